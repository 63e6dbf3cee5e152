use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::WorkerId;
use super::repository::{PostingRepository, WorkerProfileRepository};
use super::service::{RecommendationService, RecommendationServiceError};

/// Router builder exposing the worker recommendation feed.
pub fn recommendations_router<W, P>(service: Arc<RecommendationService<W, P>>) -> Router
where
    W: WorkerProfileRepository + 'static,
    P: PostingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/workers/:worker_id/recommendations",
            get(recommendations_handler::<W, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationParams {
    /// Evaluation date (YYYY-MM-DD); defaults to the server's calendar date.
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) async fn recommendations_handler<W, P>(
    State(service): State<Arc<RecommendationService<W, P>>>,
    Path(worker_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> Response
where
    W: WorkerProfileRepository + 'static,
    P: PostingRepository + 'static,
{
    let id = WorkerId(worker_id);
    let today = params.date.unwrap_or_else(|| Local::now().date_naive());

    match service.recommend_for_worker(&id, today) {
        Ok(ranked) => {
            let views: Vec<_> = ranked.iter().map(|entry| entry.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(RecommendationServiceError::ProfileMissing(worker)) => {
            let payload = json!({
                "error": format!("no profile found for worker '{}'", worker.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
