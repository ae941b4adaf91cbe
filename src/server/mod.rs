pub mod handlers;
pub mod types;

use crate::{
    Result, chat::ChatService, config::Config, inference::HostedModelClient,
    transcript::SessionRegistry, voice::RemoteRecognizer,
};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/predict", post(handlers::predict))
        .route("/medicine", post(handlers::medicine))
        .route("/voice/transcribe", post(handlers::transcribe))
        .route("/transcript/:session_id", get(handlers::transcript))
        .route("/session/:session_id", delete(handlers::end_session))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let chat = ChatService::new(Box::new(HostedModelClient::new(config.inference.clone())));
    let recognizer = RemoteRecognizer::new(config.voice.clone());

    let state = handlers::AppState {
        sessions: Arc::new(SessionRegistry::new()),
        chat: Arc::new(chat),
        recognizer: Arc::new(recognizer),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
