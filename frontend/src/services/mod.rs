//! Backend communication and browser services.
//!
//! # Services
//!
//! - [`api`] - upload and history calls to the extraction API
//! - [`notify`] - blocking alerts shown to the user

pub mod api;
pub mod notify;

pub use api::*;
pub use notify::*;
