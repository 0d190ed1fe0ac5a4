use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use babylog_backend::config::AppConfig;
use babylog_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("babylog_backend=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
