mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing `.env` is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    match &config.delivery {
        config::Delivery::Email { to, .. } => tracing::info!(%to, "contact messages delivered by email"),
        config::Delivery::Log => tracing::warn!("RESEND_API_KEY not set, contact messages are only logged"),
    }
    tracing::info!(backend = config.contact_backend.as_str(), "contact backend selected");

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
