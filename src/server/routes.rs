//! API routes: quote analysis and liveness

use super::AppState;
use crate::ScrewScore;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyzeQuote", post(analyze_quote))
        .route("/hello", get(hello))
        // Called cross-origin from the mobile client; endpoint carries no auth.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnalyzeRequest {
    quote_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    ok: bool,
    screw_score: ScrewScore,
    otd: u64,
    otd_provided: bool,
    /// Echo of the raw input; null when the request carried none
    received: Option<String>,
    top_issues: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HelloResponse {
    ok: bool,
    message: &'static str,
}

/// POST /analyzeQuote. A missing or malformed body degrades to empty quote
/// text; the endpoint always answers 200 with the full response shape.
async fn analyze_quote(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<AnalyzeRequest>>,
) -> Json<AnalyzeResponse> {
    log::info!("analyzeQuote called");

    let quote_text = payload.and_then(|Json(request)| request.quote_text);
    let verdict = state.analyzer.analyze(quote_text.as_deref().unwrap_or(""));

    Json(AnalyzeResponse {
        ok: true,
        screw_score: verdict.screw_score,
        otd: verdict.otd,
        otd_provided: verdict.otd_provided,
        received: quote_text,
        top_issues: verdict.top_issues,
    })
}

/// GET /hello liveness probe
async fn hello() -> Json<HelloResponse> {
    log::info!("hello called");
    Json(HelloResponse {
        ok: true,
        message: "Frontle backend is live.",
    })
}
