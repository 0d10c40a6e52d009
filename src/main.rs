use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;
use chatbot_game::LoggingSink;

/// Main entry point for the chatbot game service
///
/// Starts the REST server with OpenAPI/Swagger documentation. Riddles submitted over REST are
/// passed to a [`LoggingSink`] until a game engine is attached.
///
/// # Environment Variables
/// - `CHATBOT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `RUST_LOG`: extra tracing filter directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chatbot_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("chatbot_game=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RestConfig::from_env()?;

    tracing::info!("++ Starting chatbot REST on {}", config.addr());

    api_rest::serve(config, Arc::new(LoggingSink)).await
}
