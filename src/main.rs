mod model;
mod server;

use std::net::SocketAddr;

use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, scheduler::maintenance, service::email::EmailDispatcher,
    startup, state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_schema(&db).await;
    let http_client = startup::setup_reqwest_client()?;
    let mailer = EmailDispatcher::from_config(&config)?;

    // Keep the handle alive for the lifetime of the server
    let _scheduler = maintenance::start_scheduler(db.clone()).await?;

    let bind_addr = config.bind_addr;
    let app = server::router::router(&config)?.with_state(AppState::new(
        db,
        http_client,
        mailer,
        config,
    ));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server running on {}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
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
}
