use anyhow::{bail, Context, Result};
use axum::serve;
use digipass::core::config::Config;
use digipass::core::state::AppState;
use digipass::core::{routes, tracing_init};
use digipass::issuance::assets::FileAssets;
use digipass::issuance::batch::issue_all;
use digipass::roster::cache::RosterCache;
use digipass::roster::source::load_roster;
use digipass::security::rate_limiter::RateLimiter;
use digipass::utils::time::current_timestamp;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, warn, Level};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let command = args.get(1).map(String::as_str).unwrap_or("serve");
    let config_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    // Load and validate configuration
    let config = Config::from_file(&config_path).context(format!(
        "Failed to load configuration from '{}'. \
        If this is your first run, copy config.example.toml to config.toml and adjust the values.",
        config_path.display()
    ))?;

    // Initialize tracing/logging
    tracing_init::init_tracing(&config.logging);

    // Build Tokio runtime with configured number of threads
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    match command {
        "serve" => runtime.block_on(run_server(config, config_path)),
        "issue" => runtime.block_on(run_issuance(config)),
        other => {
            bail!("Unknown command '{other}'. Usage: digipass <serve|issue> [config.toml]")
        }
    }
}

async fn run_server(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        "Membership verification service starting"
    );

    let roster_path = config.roster.csv_path.clone();
    let snapshot = tokio::task::spawn_blocking(move || load_roster(&roster_path))
        .await
        .context("Roster load task failed")?
        .context("Failed to load roster")?;

    let state = AppState::new(config.clone(), RosterCache::new(snapshot));

    spawn_cleanup_task(
        Arc::clone(&state.rate_limiter),
        config.performance.cleanup_interval,
    );

    info!(
        roster_members = state.roster.len(),
        max_requests_per_minute = config.performance.max_requests_per_minute,
        cleanup_interval_seconds = config.performance.cleanup_interval,
        "Startup complete"
    );

    let app = routes::build_router(Arc::new(state)).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "Listening");

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")?;

    info!("Shutting down gracefully");

    Ok(())
}

async fn run_issuance(config: Config) -> Result<()> {
    let roster_path = config.roster.csv_path.clone();
    let roster = tokio::task::spawn_blocking(move || load_roster(&roster_path))
        .await
        .context("Roster load task failed")?
        .context("Failed to load roster")?;

    if roster.is_empty() {
        bail!(
            "Roster '{}' contains no usable members, nothing to issue",
            config.roster.csv_path.display()
        );
    }

    info!(
        members = roster.len(),
        output_dir = %config.issuance.output_dir.display(),
        concurrency = config.issuance.concurrency,
        "Issuing passes"
    );

    let assets = Arc::new(FileAssets::new(
        config.assets.font_path.clone(),
        config.assets.logo_path.clone(),
    ));

    let outcome = issue_all(
        &roster,
        &config.verify.base_url,
        &config.issuance.output_dir,
        config.issuance.concurrency,
        assets,
    )
    .await;

    if outcome.failed() > 0 {
        warn!(
            failed = outcome.failed(),
            succeeded = outcome.succeeded(),
            "Some passes could not be issued"
        );
    }

    if outcome.succeeded() == 0 {
        bail!("No passes were issued ({} failures)", outcome.failed());
    }

    Ok(())
}

/// Spawn a background task that drops expired rate-limit windows
fn spawn_cleanup_task(rate_limiter: Arc<RateLimiter>, cleanup_interval: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));

        loop {
            interval.tick().await;

            rate_limiter.cleanup_expired(current_timestamp());
            debug!(
                tracked_clients = rate_limiter.tracked_clients(),
                "Rate limiter cleanup completed"
            );
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
