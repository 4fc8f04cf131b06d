use crate::app::dto::*;
use crate::app::engine::RecursionEngine;
use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct HttpState {
    pub engine: RecursionEngine,
}

#[derive(Debug, Clone, serde::Serialize)]
struct ApiErrorBody {
    error: String,
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> impl IntoResponse {
    (status, Json(ApiErrorBody { error: msg.into() }))
}

pub fn build_router(engine: RecursionEngine) -> Router {
    let state = Arc::new(HttpState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/findings", get(findings))
        .route("/analyze", post(analyze))
        .route("/reload", post(reload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(engine: RecursionEngine, addr: SocketAddr) -> Result<()> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(state.engine.health())
}

async fn findings(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(state.engine.findings())
}

async fn analyze(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    match spawn_blocking(move || engine.analyze(req)).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}

async fn reload(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let engine = state.engine.clone();
    match spawn_blocking(move || engine.reload()).await {
        Ok(Ok(res)) => Json(res).into_response(),
        Ok(Err(e)) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        Err(e) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
        .into_response(),
    }
}
