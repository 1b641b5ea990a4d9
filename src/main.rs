use dotenvy::dotenv;
use tracing::{info, warn};

use mergington::config::ServerConfig;
use mergington::database;
use mergington::web::build_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    mergington::init_tracing("info");

    let config = ServerConfig::from_env();
    info!(
        database_url = %config.database_url,
        build = env!("MERGINGTON_BUILD_ID"),
        "starting activities server"
    );

    let pool = database::prepare(&config.database_url).await?;
    let app = build_router(pool, &config.assets_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}; trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);
    info!("board page at http://{}/board", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
