pub mod common;
pub mod control_panel;
pub mod icon;
pub mod layout;
pub mod markdown;
pub mod motion;
pub mod pages;
pub mod terminal;

pub use control_panel::ControlPanel;
pub use icon::{Icon, icons};
pub use layout::SiteLayout;
pub use terminal::Terminal;
