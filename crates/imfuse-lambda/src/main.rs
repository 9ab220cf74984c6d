use tracing_subscriber::EnvFilter;

use imfuse_lambda::config::ServiceConfig;
use imfuse_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        max_count = config.max_count,
        allowed_origin = config
            .allowed_origin
            .as_ref()
            .and_then(|o| o.to_str().ok())
            .unwrap_or("*"),
        "starting fusion service"
    );

    let app = imfuse_lambda::router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
