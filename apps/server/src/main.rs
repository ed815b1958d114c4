use stocker_server::{
    api::app_router, build_state, config::Config, init_tracing, spawn_activation,
};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    if config.activate_on_start {
        spawn_activation(state.clone());
    }

    let static_service = ServeDir::new(&config.static_dir);
    let router = app_router(state, &config).fallback_service(static_service);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
