//! Contact form: validation, bot screening and delivery

pub mod form;
pub mod spam;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod notify;
#[cfg(feature = "ssr")]
pub mod rate_limiter;

pub use form::{
    ContactFieldError, ContactResult, ContactSubmission, FieldErrors, Topic, ValidContact,
    ValidationRules, validate,
};
pub use spam::{SpamVerdict, screen};

#[cfg(feature = "ssr")]
pub use api::{ContactState, contact_router};
#[cfg(feature = "ssr")]
pub use notify::ContactNotifier;
