//! Common reusable UI components
//!
//! Form fields, result banners and clipboard helpers shared by the pages.

pub mod copy_button;
pub mod form;
pub mod message;

pub use copy_button::{CopyChip, copy_to_clipboard, copy_with_feedback};
pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
