use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gst_ledger::config::{Config, LogFormat};
use gst_ledger::middleware::RequestId;
use gst_ledger::modules::taxes::GstCalculator;
use gst_ledger::startup::{build_repositories, configure_app, Services};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gst_ledger={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting GST Ledger");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Store backend: {:?}", config.app.store_backend);

    let repos = build_repositories(&config)
        .await
        .context("Failed to open record store")?;
    let services = Services::new(repos, GstCalculator::default());

    let bind_address = config.server.bind_address();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .configure(|cfg| configure_app(cfg, &services))
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
