pub mod handlers;
pub mod routings;

use crate::routings::router;
use app_config::AppConfig;
use app_error::AppError;
use app_log::init_tracing;
use app_state::AppState;
use std::sync::Arc;
use tokio::signal;
use tracing::*;

pub async fn web_service() -> Result<(), AppError> {
    let config = AppConfig::new()?;
    let bind = config.backend_bind.clone();
    init_tracing(config.log_level.clone());
    // SQLite
    let db = app_database::open(&config).await.map_err(|e| {
        error!("Cannot initialise database {}: {}", &config.database_url, &e.message);
        e
    })?;
    // Generating AppState
    let app_state = Arc::new(AppState { config, db });
    // Loading Routes
    let routes = router(app_state);
    // Setup TCP Port
    let tcp_listener = tokio::net::TcpListener::bind(&bind).await.map_err(|e| {
        error!("Cannot bind {}: {}", &bind, &e);
        AppError::from(e)
    })?;
    // Running Server ...
    info!("Serving web server on {}", &bind);
    axum::serve(tcp_listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => warn!("Cannot listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
