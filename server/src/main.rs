#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;
mod supabase;

use std::sync::Arc;
use std::time::Duration;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() {
    // Local development reads a `.env`; deployments set real variables.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let backend = match services::backend::SupabaseBackend::new(&config.supabase) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "backend client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(url = %config.supabase.url, users = %config.supabase.users_table, trips = %config.supabase.trips_table, "backend configured");

    let port = config.port;
    let state = state::AppState::new(Arc::new(backend), config);

    let _sweeper = services::session::spawn_session_sweeper(state.sessions.clone(), SESSION_SWEEP_INTERVAL);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "tourvisto listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
