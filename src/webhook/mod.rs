//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`whatsapp`] - WhatsApp Business API webhook handlers
//!
//! Other messaging platforms would mount their own submodule here.

pub mod routes;
pub mod whatsapp;

use crate::services;

/// Shared application state.
///
/// Holds only the boxed messaging collaborator; the gateway keeps no mutable
/// state across requests.
pub struct AppState {
    pub messaging: services::ImplMessagingService,
}
