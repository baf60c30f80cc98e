use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::analysis_routes;
use axum::http::{header, Method};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fineclaire::config::AppConfig;
use fineclaire::error::AppError;
use fineclaire::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
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

    // credentialed browser clients, so origins stay an explicit allow-list
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors.origin_values()?))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = analysis_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "financial analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
