pub mod whatsapp;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

/// Normalized inbound message extracted from a webhook payload.
///
/// Read-only at the gateway layer; used only for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message text body
    pub text: String,
    /// Sender's WhatsApp ID (phone number)
    pub from: String,
    /// WhatsApp message ID
    pub message_id: String,
}

/// Outcome of an outbound send, relayed verbatim into the HTTP response.
///
/// `success == false` with an `error` is an in-band failure reported by the
/// WhatsApp API, distinct from a transport fault (an `Err` from the service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Messaging platform collaborator consumed by the webhook routes.
///
/// The gateway owns no messaging logic itself; everything wire-level
/// (token validation, payload parsing, API calls) lives behind this trait so
/// the routes can be exercised with a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Validates the webhook subscription handshake and returns the challenge
    /// string to echo back.
    fn verify_webhook<'a>(
        &self,
        mode: &str,
        token: &str,
        challenge: Option<&'a str>,
    ) -> anyhow::Result<String>;

    /// Parses a raw webhook payload and returns the first inbound text
    /// message, or `None` for non-message events (statuses, media, etc.).
    fn handle_incoming_message(&self, payload: &[u8])
    -> anyhow::Result<Option<IncomingMessage>>;

    /// Sends a plain text message through the platform's API.
    async fn send_simple_message(
        &self,
        phone_number: &str,
        message: &str,
    ) -> anyhow::Result<SendReport>;
}

pub type ImplMessagingService = Box<dyn MessagingService>;
