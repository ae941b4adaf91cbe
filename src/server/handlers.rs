use super::types::{
    AskRequest, AskResponse, ErrorResponse, TranscribeRequest, TranscribeResponse,
    TranscriptEntryView, TranscriptResponse,
};
use crate::{
    Error, chat::ChatService, prompt::QueryKind, transcript::SessionRegistry,
    voice::{AudioClip, AudioFormat, SpeechRecognizer, VoiceError},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use base64::Engine;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub chat: Arc<ChatService>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn reject(error: Error) -> HandlerError {
    let status = match error {
        Error::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    exchange(state, QueryKind::General, request).await
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    exchange(state, QueryKind::DiseasePrediction, request).await
}

pub async fn medicine(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    exchange(state, QueryKind::MedicineInfo, request).await
}

async fn exchange(
    state: AppState,
    kind: QueryKind,
    request: AskRequest,
) -> Result<Json<AskResponse>, HandlerError> {
    let (session_id, transcript) = state.sessions.open(request.session_id).map_err(reject)?;

    info!("Received {:?} request for session: {}", kind, session_id);

    // Per-session lock: interactions within one session are serialized.
    let mut transcript = transcript.lock().await;
    let output = state.chat.answer(&mut transcript, kind, &request.input).await;

    Ok(Json(AskResponse { session_id, output }))
}

pub async fn transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TranscriptResponse>, HandlerError> {
    let transcript = state.sessions.get(&session_id).map_err(reject)?;
    let transcript = transcript.lock().await;

    let entries = transcript
        .window()
        .iter()
        .map(|entry| TranscriptEntryView {
            query: entry.query.clone(),
            reply: entry.reply.clone(),
        })
        .collect();

    Ok(Json(TranscriptResponse {
        session_id,
        entries,
    }))
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state.sessions.end(&session_id).map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Speech-to-text for a clip captured by the presentation surface. Failures
/// come back as 200s carrying the fixed fallback literal, mirroring how the
/// transcribed text would have been shown.
pub async fn transcribe(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Result<Json<TranscribeResponse>, HandlerError> {
    let format = request.format.as_deref().unwrap_or("wav");
    let Some(format) = AudioFormat::parse(format) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unsupported audio format: {format}"),
            }),
        ));
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&request.audio_base64)
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Base64 decode error: {e}"),
                }),
            )
        })?;

    let clip = AudioClip { bytes, format };

    let text = match state.recognizer.recognize(&clip).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Recognition failed: {}", e);
            VoiceError::from(e).user_message()
        }
    };

    Ok(Json(TranscribeResponse { text }))
}
