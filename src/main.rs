use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use dashboard_metrics::backend::{DashboardBackend, HttpBackend};
use dashboard_metrics::config::{Config, LogFormat};
use dashboard_metrics::dashboard::{DashboardService, DashboardSettings};
use dashboard_metrics::middleware::{BearerAuth, RequestId};
use dashboard_metrics::performance::models::metric_keys;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting dashboard metrics service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!("Upstream backend: {}", config.backend.base_url);

    let backend: Arc<dyn DashboardBackend> =
        Arc::new(HttpBackend::new(&config.backend).context("Failed to build backend client")?);

    let settings = DashboardSettings {
        currency: config.app.currency,
        chart_offset: config.app.chart_offset()?,
        default_metric: metric_keys::SALES.to_string(),
    };
    let service = web::Data::new(DashboardService::new(backend, settings));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET"])
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(BearerAuth)
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(dashboard_metrics::configure_routes)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "dashboard_metrics={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Dashboard Metrics",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
