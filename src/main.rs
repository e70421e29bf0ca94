mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::IdentityConfig::from_env();
    let port = config::port_from_env();
    tracing::info!(summary = ?config.summary(), "identity configuration loaded");

    let state = state::AppState::new(config);
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "managed-login listening");
    axum::serve(listener, app).await.expect("server failed");
}
