//! WhatsApp webhook integration module
//!
//! HTTP endpoint handlers for the WhatsApp Business API webhook: the
//! verification handshake, the webhook receiver and a send-test helper.
//! All messaging logic is delegated to the [`crate::services`] collaborator.

pub mod routes;

// Re-export commonly used items for convenience
pub use routes::{receive, send_test, verify};
