use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::history::AssessmentStore;
use super::questionnaire::Questionnaire;
use super::service::AnalysisService;

const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router<S>(service: Arc<AnalysisService<S>>) -> Router
where
    S: AssessmentStore + 'static,
{
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler::<S>))
        .route("/api/v1/analysis/history", get(history_handler::<S>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<AnalysisService<S>>>,
    axum::Json(questionnaire): axum::Json<Questionnaire>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let analysis = service.analyze(&questionnaire).await;
    (StatusCode::OK, axum::Json(analysis)).into_response()
}

pub(crate) async fn history_handler<S>(
    State(service): State<Arc<AnalysisService<S>>>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    match service.history(DEFAULT_HISTORY_LIMIT) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
