//! WhatsApp webhook endpoint handlers
//!
//! This module handles webhook requests from the WhatsApp Business API: the
//! verification handshake (GET), the webhook receiver (POST) and a helper
//! endpoint to send outbound test messages.
//!
//! Every handler is a stateless request/response transformation: extract
//! parameters, delegate to the messaging collaborator, pattern-match the
//! result into an HTTP response. Failures never leak internal detail to the
//! caller; the verification path intentionally answers a bare 403 for both
//! missing parameters and a rejected token so the two cases are
//! indistinguishable externally.

use crate::webhook::AppState;
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// All fields are optional at the extractor level; presence is validated by
/// the handler so a missing parameter yields 403 instead of an extractor 400.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from WhatsApp
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// JSON body for the send-test endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestRequest {
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

fn forbidden() -> web::HttpResponse {
    web::HttpResponse::Forbidden()
        .content_type("text/plain")
        .body("Forbidden")
}

/// Webhook verification endpoint (GET)
///
/// WhatsApp sends a GET request to verify the webhook URL. The collaborator
/// validates the verify token and returns the challenge to echo back.
///
/// # Returns
/// - 200 with the challenge string if verification succeeds
/// - 403 "Forbidden" if a parameter is missing or verification fails
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> web::HttpResponse {
    let (mode, token) = match (query.mode.as_deref(), query.verify_token.as_deref()) {
        (Some(mode), Some(token)) if !mode.is_empty() && !token.is_empty() => (mode, token),
        _ => return forbidden(),
    };

    match app_state
        .messaging
        .verify_webhook(mode, token, query.challenge.as_deref())
    {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("text/plain")
            .body(body),
        Err(e) => {
            log::error!("Webhook verification failed: {e:#}");
            forbidden()
        }
    }
}

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from the WhatsApp Business API. Extracted messages
/// are only logged here; command processing is a future extension point.
///
/// Always acknowledges with 200 "OK" unless the collaborator faults —
/// WhatsApp retries deliveries on anything else, so acknowledgment is
/// preferred over strict validation.
#[web::post("")]
pub async fn receive(body: Bytes, app_state: web::types::State<AppState>) -> web::HttpResponse {
    match app_state.messaging.handle_incoming_message(&body) {
        Ok(message) => {
            if let Some(message) = message {
                log::info!(
                    "Received WhatsApp message: {text} from {from}",
                    text = message.text,
                    from = message.from
                );
            }

            web::HttpResponse::Ok().content_type("text/plain").body("OK")
        }
        Err(e) => {
            log::error!("Error processing WhatsApp webhook: {e:#}");
            web::HttpResponse::InternalServerError()
                .content_type("text/plain")
                .body("Internal Server Error")
        }
    }
}

/// Send test message endpoint (POST /send-test)
///
/// Sends a plain text message to the given phone number through the
/// messaging collaborator and relays its result.
///
/// # Returns
/// - 400 if `phoneNumber` or `message` is missing
/// - 200 with the collaborator's report on success
/// - 500 on a reported send failure (with the collaborator's error detail)
///   or on a fault (generic message, detail only logged server-side)
#[web::post("/send-test")]
pub async fn send_test(
    body: web::types::Json<SendTestRequest>,
    app_state: web::types::State<AppState>,
) -> web::HttpResponse {
    let (phone_number, message) = match (body.phone_number.as_deref(), body.message.as_deref()) {
        (Some(phone), Some(msg)) if !phone.is_empty() && !msg.is_empty() => (phone, msg),
        _ => {
            return web::HttpResponse::BadRequest().json(&serde_json::json!({
                "success": false,
                "message": "Phone number and message are required",
            }));
        }
    };

    match app_state
        .messaging
        .send_simple_message(phone_number, message)
        .await
    {
        Ok(report) if report.success => web::HttpResponse::Ok().json(&serde_json::json!({
            "success": true,
            "message": "Message sent successfully",
            "data": report,
        })),
        Ok(report) => web::HttpResponse::InternalServerError().json(&serde_json::json!({
            "success": false,
            "message": "Failed to send message",
            "error": report.error,
        })),
        Err(e) => {
            log::error!("Error sending test message: {e:#}");
            web::HttpResponse::InternalServerError().json(&serde_json::json!({
                "success": false,
                "message": "Internal server error",
            }))
        }
    }
}
