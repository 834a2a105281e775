mod api;
mod db;
mod players;
mod router;
mod state;

use std::sync::Arc;

use tracing::info;

fn load_config() -> roster_core::Config {
    roster_core::config::load_dotenv();
    roster_core::Config::from_env()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    config.log_summary();

    let pool = db::init_db(&config.storage).await?;

    let state = Arc::new(state::AppState {
        db: pool,
        roster_size: config.session.roster_size,
    });
    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
