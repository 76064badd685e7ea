use std::process::ExitCode;

use userboard::config::AppConfig;
use userboard::error::ServerError;
use userboard::store::UserStore;
use userboard::{routes, services, state};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "userboard failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    let store = UserStore::new();
    tracing::info!(users = store.len(), "user store seeded");

    // Spawn background snapshot observer.
    let _observer = services::snapshot::spawn_snapshot_observer(&store);

    let state = state::AppState::new(store, config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "userboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
