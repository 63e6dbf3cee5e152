use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use shiftmatch::error::AppError;
use shiftmatch::marketplace::import::PostingCsvImporter;
use shiftmatch::marketplace::recommendations::{
    recommendations_router, Availability, GeoPoint, PostingRepository, PostingStatus,
    RecommendationEngine, RecommendationService, RecommendationView, WorkerId, WorkerProfile,
    WorkerProfileRepository,
};

/// Inline worker payload for stateless preview runs. Availability arrives as
/// the loose profile string and coordinates as optional columns, exactly as
/// profile exports carry them.
#[derive(Debug, Deserialize)]
pub(crate) struct PreviewWorkerRequest {
    pub(crate) worker_id: String,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    #[serde(default)]
    pub(crate) availability: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    pub(crate) worker: PreviewWorkerRequest,
    pub(crate) postings_csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewResponse {
    pub(crate) worker_id: String,
    pub(crate) today: NaiveDate,
    pub(crate) candidate_count: usize,
    pub(crate) recommendations: Vec<RecommendationView>,
}

pub(crate) fn with_marketplace_routes<W, P>(
    service: Arc<RecommendationService<W, P>>,
) -> axum::Router
where
    W: WorkerProfileRepository + 'static,
    P: PostingRepository + 'static,
{
    recommendations_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/recommendations/preview",
            axum::routing::post(preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless what-if run: rank a CSV posting export for an inline worker
/// profile without touching the stored marketplace.
pub(crate) async fn preview_endpoint(
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let PreviewRequest {
        worker,
        postings_csv,
        today,
    } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let imported = PostingCsvImporter::from_reader(Cursor::new(postings_csv.into_bytes()))?;
    // The stored board applies this restriction in `open_postings`; a preview
    // over raw CSV applies it here.
    let candidates: Vec<_> = imported
        .into_iter()
        .filter(|posting| posting.status == PostingStatus::Open && posting.date >= today)
        .collect();

    let profile = WorkerProfile {
        worker_id: WorkerId(worker.worker_id.clone()),
        skills: worker.skills,
        location: GeoPoint::from_parts(worker.latitude, worker.longitude),
        availability: Availability::parse(&worker.availability),
    };

    let engine = RecommendationEngine::new(crate::infra::default_recommendation_config());
    let ranked = engine.recommend(&profile, &candidates, today);

    Ok(Json(PreviewResponse {
        worker_id: worker.worker_id,
        today,
        candidate_count: candidates.len(),
        recommendations: ranked.iter().map(|entry| entry.view()).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    const CSV: &str = "Posting ID,Title,Business,Venue,Hourly Rate,Date,Required Skills,Latitude,Longitude,Status\n\
p-sat,Event Steward,Colombo Expo,Fort Hall,950,2026-08-08,Ticket Handling,6.9344,79.8428,open\n\
p-mon,Event Steward,Colombo Expo,Fort Hall,950,2026-08-10,Ticket Handling,6.9344,79.8428,open\n\
p-closed,Event Steward,Colombo Expo,Fort Hall,950,2026-08-08,Ticket Handling,6.9344,79.8428,filled\n";

    fn preview_request(availability: &str) -> PreviewRequest {
        PreviewRequest {
            worker: PreviewWorkerRequest {
                worker_id: "worker-colombo".to_string(),
                skills: vec!["Ticket Handling".to_string()],
                latitude: Some(6.9271),
                longitude: Some(79.8612),
                availability: availability.to_string(),
            },
            postings_csv: CSV.to_string(),
            today: Some(chrono::NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")),
        }
    }

    #[tokio::test]
    async fn preview_ranks_open_future_postings() {
        let Json(body) = preview_endpoint(Json(preview_request("flexible")))
            .await
            .expect("preview succeeds");

        assert_eq!(body.candidate_count, 2);
        assert_eq!(body.recommendations.len(), 2);
        assert!(body
            .recommendations
            .iter()
            .all(|entry| entry.score == 100.0));
    }

    #[tokio::test]
    async fn preview_honours_weekend_availability() {
        let Json(body) = preview_endpoint(Json(preview_request("weekends")))
            .await
            .expect("preview succeeds");

        assert_eq!(body.recommendations.len(), 1);
        assert_eq!(body.recommendations[0].posting_id.0, "p-sat");
    }

    #[tokio::test]
    async fn preview_rejects_malformed_csv() {
        let mut request = preview_request("flexible");
        request.postings_csv =
            "Posting ID,Title,Business,Venue,Hourly Rate,Date,Required Skills,Latitude,Longitude,Status\n\
,Event Steward,Colombo Expo,Fort Hall,950,2026-08-08,,,,open\n"
                .to_string();

        let error = preview_endpoint(Json(request))
            .await
            .expect_err("import must fail");
        assert!(matches!(error, AppError::Import(_)));
    }
}
