//! # WhatsApp Webhook Gateway
//!
//! Main entry point for the webhook gateway. Terminates the WhatsApp
//! Business API webhook endpoints and delegates all messaging logic to the
//! services layer.

pub mod config;
pub mod logger;
pub mod services;
pub mod webhook;

use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;
    let messaging_handler = services::whatsapp::WhatsAppHandler::new();

    log::info!(
        "Starting WhatsApp gateway ({env}) on {host}:{port}",
        env = app_config.env,
        host = app_config.web_server_host,
        port = app_config.web_server_port
    );

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(webhook::AppState {
                messaging: Box::new(messaging_handler.clone()),
            })
            .configure(webhook::routes::whatsapp)
    })
    .bind((
        app_config.web_server_host.as_str(),
        app_config.web_server_port,
    ))?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
