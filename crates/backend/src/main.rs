pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    // Config: config.toml рядом с exe или встроенный default
    let config = shared::config::load_config()?;

    shared::llm::initialize_provider(&config.gemini)?;

    let app = routes::configure_routes(&config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Backend listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
