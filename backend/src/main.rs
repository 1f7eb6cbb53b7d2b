use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod email_dtos;
    pub mod email_handlers;
}
mod utils {
    pub mod email_templates;
    pub mod mailer;
}

use handlers::email_handlers;
use utils::mailer::{Mailer, ResendMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
}

pub fn validate_env() {
    let _ = std::env::var("RESEND_API_KEY")
        .expect("RESEND_API_KEY must be set");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mailer = Arc::new(ResendMailer::from_env());
    let state = Arc::new(AppState { mailer });

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/send-email", post(email_handlers::send_email))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
