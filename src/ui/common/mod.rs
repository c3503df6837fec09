//! Common reusable UI components

pub mod form;
pub mod message;
pub mod modal;

pub use form::FormField;
pub use message::ErrorMessage;
pub use modal::BaseModal;
