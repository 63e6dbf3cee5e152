use crate::cli::ServeArgs;
use crate::demo::sample_marketplace;
use crate::infra::{
    default_recommendation_config, AppState, InMemoryPostingBoard, InMemoryWorkerProfiles,
};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use shiftmatch::config::AppConfig;
use shiftmatch::error::AppError;
use shiftmatch::telemetry;
use shiftmatch::marketplace::recommendations::RecommendationService;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profiles = Arc::new(InMemoryWorkerProfiles::default());
    let board = Arc::new(InMemoryPostingBoard::default());
    let service = Arc::new(RecommendationService::new(
        profiles,
        board,
        default_recommendation_config(),
    ));

    if args.seed_demo {
        let today = Local::now().date_naive();
        let seeded = sample_marketplace(&service, today)?;
        info!(
            workers = seeded.workers,
            postings = seeded.postings,
            "seeded demo marketplace"
        );
    }

    let app = with_marketplace_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "shiftmatch marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
