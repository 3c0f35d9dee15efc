use ntex::web;

/// Configures webhook routes for external integrations.
///
/// These routes are public endpoints that don't require authentication;
/// access control is the verify-token handshake itself.
///
/// # Routes
/// - `GET /webhook/whatsapp` - WhatsApp webhook verification
/// - `POST /webhook/whatsapp` - WhatsApp webhook receiver
/// - `POST /webhook/whatsapp/send-test` - Send an outbound test message
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhook/whatsapp").service((
        super::whatsapp::verify,
        super::whatsapp::receive,
        super::whatsapp::send_test,
    )));
}
