use std::env;
use std::error::Error;
use std::sync::Arc;

use tokio::{net::TcpListener, signal};
use tracing::{info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shift_scheduler::api::{AppState, create_router};
use shift_scheduler::config::ConfigLoader;
use shift_scheduler::usecase::ShiftService;

const CONFIG_ENV: &str = "SHIFT_SCHEDULER_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_dir = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server().log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(config.build_store()?);
    let service = ShiftService::new(
        store,
        config.server().match_policy,
        info_span!("shift_usecase"),
    );
    info!(
        config_dir = %config_dir,
        seeded = config.seed().len(),
        policy = ?service.policy(),
        "Loaded configuration"
    );

    let app = create_router(AppState::new(service, info_span!("shift_controller")));

    let listener = TcpListener::bind(config.server().bind_addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
