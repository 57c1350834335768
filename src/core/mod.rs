//! Domain logic of the TrustPlane site: the demo panel tour, contact form
//! handling and pricing

pub mod certificate;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod panel;
pub mod pricing;
pub mod terminal;
pub mod tour;

pub use certificate::ActionCertificate;
pub use panel::{CanaryPercent, PanelState, PanelTab, PolicyView, RunStatus, SdkLanguage};
pub use tour::{TimerHost, TourAction, TourOrchestrator, TourPhase};
