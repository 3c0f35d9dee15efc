//! # WhatsApp Messaging Service
//!
//! Real [`MessagingService`] implementation backed by the WhatsApp Business
//! API (Meta Graph). It validates the webhook verify token, parses incoming
//! webhook payloads and sends outbound text messages.

pub mod schemas;

use super::{IncomingMessage, MessagingService, SendReport};
use crate::config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use subtle::ConstantTimeEq;

/// WhatsApp Business API handler
#[derive(Clone)]
pub struct WhatsAppHandler {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// WhatsApp Business API endpoint for sending messages
    endpoint: String,
    /// Webhook verify token configured in the Meta dashboard
    verify_token: String,
    /// Authentication token
    auth_token: String,
}

impl WhatsAppHandler {
    /// Creates a new handler from the application configuration
    pub fn new() -> Self {
        let app_config = &*config::APP_CONFIG;

        Self {
            client: reqwest::Client::new(),
            endpoint: app_config.whatsapp_send_msg_endpoint(),
            verify_token: app_config.whatsapp_verify_token.clone(),
            auth_token: app_config.whatsapp_business_auth.clone(),
        }
    }
}

#[async_trait]
impl MessagingService for WhatsAppHandler {
    /// Validates the subscription handshake sent by WhatsApp.
    ///
    /// `hub.mode` must be "subscribe" and the verify token must match the
    /// configured one. The token comparison is constant-time.
    fn verify_webhook<'a>(
        &self,
        mode: &str,
        token: &str,
        challenge: Option<&'a str>,
    ) -> Result<String> {
        if mode != "subscribe" {
            anyhow::bail!("unexpected hub.mode value: {mode}");
        }

        let token_matches: bool = token
            .as_bytes()
            .ct_eq(self.verify_token.as_bytes())
            .into();
        if !token_matches {
            anyhow::bail!("verify token does not match the configured token");
        }

        Ok(challenge.unwrap_or_default().to_string())
    }

    /// Parses a webhook payload and extracts the first inbound text message.
    ///
    /// Status updates and non-text message types produce `None`; WhatsApp
    /// expects those events to be acknowledged without further processing.
    fn handle_incoming_message(&self, payload: &[u8]) -> Result<Option<IncomingMessage>> {
        let payload: schemas::WebhookPayload =
            serde_json::from_slice(payload).context("Failed to parse webhook payload")?;

        let message = payload
            .entry
            .iter()
            .flat_map(|entry| &entry.changes)
            .filter(|change| change.field == "messages")
            .filter_map(|change| change.value.messages.as_ref())
            .flatten()
            .find_map(|message| {
                message.text.as_ref().map(|text| IncomingMessage {
                    text: text.body.clone(),
                    from: message.from.clone(),
                    message_id: message.id.clone(),
                })
            });

        Ok(message)
    }

    /// Sends a plain text message via the WhatsApp Business API.
    ///
    /// An error status from the API is reported in-band as a failed
    /// [`SendReport`]; transport and parse failures surface as `Err`.
    async fn send_simple_message(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<SendReport> {
        let outgoing =
            schemas::OutgoingTextMessage::new(phone_number.to_string(), message.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(&outgoing)
            .send()
            .await
            .context("Failed to send request to WhatsApp API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            return Ok(SendReport {
                success: false,
                message_id: None,
                error: Some(format!(
                    "WhatsApp API returned error status {status}: {body}"
                )),
            });
        }

        let api_response: schemas::WhatsAppMessageResponse = response
            .json()
            .await
            .context("Failed to parse WhatsApp API response")?;

        Ok(SendReport {
            success: true,
            message_id: api_response.messages.first().map(|m| m.id.clone()),
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handler() -> WhatsAppHandler {
        WhatsAppHandler {
            client: reqwest::Client::new(),
            endpoint: "https://graph.facebook.com/v22.0/123456/messages".to_string(),
            verify_token: "expected_token".to_string(),
            auth_token: "test_auth".to_string(),
        }
    }

    fn text_message_payload() -> String {
        serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "123456",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "metadata": {
                            "display_phone_number": "+1234567890",
                            "phone_number_id": "phone123"
                        },
                        "messages": [{
                            "from": "+9876543210",
                            "id": "wamid.abc",
                            "timestamp": "1234567890",
                            "type": "text",
                            "text": { "body": "Hello" }
                        }]
                    }
                }]
            }]
        })
        .to_string()
    }

    fn status_only_payload() -> String {
        serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "123456",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "metadata": {
                            "display_phone_number": "+1234567890",
                            "phone_number_id": "phone123"
                        },
                        "statuses": [{
                            "id": "wamid.abc",
                            "status": "delivered",
                            "recipient_id": "+9876543210"
                        }]
                    }
                }]
            }]
        })
        .to_string()
    }

    #[test]
    fn test_verify_webhook_valid_token() {
        let handler = test_handler();

        let result = handler.verify_webhook("subscribe", "expected_token", Some("challenge123"));

        assert_eq!(result.unwrap(), "challenge123");
    }

    #[test]
    fn test_verify_webhook_missing_challenge_echoes_empty() {
        let handler = test_handler();

        let result = handler.verify_webhook("subscribe", "expected_token", None);

        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_verify_webhook_wrong_mode() {
        let handler = test_handler();

        let result = handler.verify_webhook("unsubscribe", "expected_token", Some("c"));

        assert!(result.is_err());
    }

    #[test]
    fn test_verify_webhook_wrong_token() {
        let handler = test_handler();

        assert!(handler.verify_webhook("subscribe", "bad_token", Some("c")).is_err());
        // Length mismatch must fail too, not panic
        assert!(handler.verify_webhook("subscribe", "x", Some("c")).is_err());
    }

    #[test]
    fn test_handle_incoming_text_message() {
        let handler = test_handler();

        let message = handler
            .handle_incoming_message(text_message_payload().as_bytes())
            .unwrap()
            .expect("text message should be extracted");

        assert_eq!(message.text, "Hello");
        assert_eq!(message.from, "+9876543210");
        assert_eq!(message.message_id, "wamid.abc");
    }

    #[test]
    fn test_handle_incoming_status_only_is_none() {
        let handler = test_handler();

        let message = handler
            .handle_incoming_message(status_only_payload().as_bytes())
            .unwrap();

        assert!(message.is_none());
    }

    #[test]
    fn test_handle_incoming_malformed_payload_fails() {
        let handler = test_handler();

        assert!(handler.handle_incoming_message(b"not json").is_err());
    }

    #[test]
    fn test_outgoing_text_message_wire_format() {
        let message = schemas::OutgoingTextMessage::new(
            "+15551234567".to_string(),
            "hi".to_string(),
        );

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["messaging_product"], "whatsapp");
        assert_eq!(json["to"], "+15551234567");
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"]["body"], "hi");
    }
}
