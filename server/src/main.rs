mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let state = routes::access::GateState::new(&config)?;
    tracing::info!(
        cookie = %config.gate.cookie_name,
        remote = state.validates_remotely(),
        "session gate configured"
    );

    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
