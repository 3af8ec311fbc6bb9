use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentStore};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vitaguard::analysis::{AnalysisService, GeminiClient, HealthAnalyzer};
use vitaguard::config::AppConfig;
use vitaguard::error::AppError;
use vitaguard::telemetry;

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

    let gemini = GeminiClient::new(&config.gemini)?;
    if gemini.is_configured() {
        info!(model = %config.gemini.model, "gemini analysis enabled");
    } else {
        info!("gemini api key absent or placeholder, deterministic engine only");
    }

    let store = Arc::new(InMemoryAssessmentStore::default());
    let service = Arc::new(AnalysisService::new(HealthAnalyzer::new(gemini), store));

    let app = with_analysis_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "health risk analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
