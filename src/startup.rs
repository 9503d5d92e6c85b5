use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::Request,
    response::Response,
    routing::{get, post},
    serve::Serve,
};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Span, info, info_span};
use uuid::Uuid;

use crate::{
    configuration::Settings,
    routes::{health_check, submit_contact},
    telegram_client::TelegramClient,
};

pub struct AppState {
    pub telegram_client: TelegramClient,
}

pub async fn run(
    listener: TcpListener,
    telegram_client: TelegramClient,
) -> anyhow::Result<Serve<TcpListener, Router, Router>> {
    // Wrapped in an Arc pointer to allow cheap cloning of AppState across
    // handlers, since TelegramClient carries its own String fields.
    let app_state = Arc::new(AppState { telegram_client });
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(submit_contact))
        .with_state(app_state)
        // The form page is served from elsewhere; its fetch() calls need CORS.
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = Uuid::new_v4();
                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        request_id = ?request_id,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    let status = response.status();
                    span.record("status", &status.as_u16());
                    info!(parent: span, ?status, ?latency, "Response sent");
                }),
        );

    Ok(axum::serve(listener, app))
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    // build is the one that invokes the `run()` function
    // then any fn invokes `run_until_stopped`
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        if configuration.telegram.bot_token.expose_secret().is_empty() {
            tracing::warn!("Telegram bot token is not configured; dispatch will fail");
        }

        let timeout = configuration.telegram.timeout();
        let telegram_client = TelegramClient::new(
            configuration.telegram.base_url,
            configuration.telegram.bot_token,
            configuration.telegram.chat_id,
            timeout,
        );

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .await?;
        let port = listener.local_addr()?.port();

        let server = run(listener, telegram_client).await?;

        Ok(Self { server, port })
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        Ok(self.server.await?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
