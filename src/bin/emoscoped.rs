//! emoscoped — emotion detection daemon.
//!
//! Serves the emotion detection HTTP API, forwarding classification to
//! the Watson NLP service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use emoscope::EmotionDetector;
use emoscope::providers::{EmotionProvider, RetryingEmotionProvider, WatsonEmotionClient};
use emoscope::server::{self, Config};

/// Emotion detection daemon.
#[derive(Parser)]
#[command(name = "emoscoped")]
#[command(version = emoscope::PKG_VERSION)]
#[command(about = "Emotion detection web service")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration (built-in defaults when no file exists)
    let config = Config::load(args.config.as_deref())?;

    let detector = Arc::new(EmotionDetector::new(build_provider(&config)));
    let app = server::build_router(detector);

    info!(
        version = emoscope::version_string(),
        address = %config.server.address,
        "emoscoped starting"
    );

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the classifier client from configuration, wrapping it in the
/// retry decorator when retries are enabled.
fn build_provider(config: &Config) -> Arc<dyn EmotionProvider> {
    let client = WatsonEmotionClient::with_timeout(
        config.watson.base_url.as_str(),
        Duration::from_secs(config.watson.timeout_secs),
    )
    .model_id(config.watson.model_id.as_str());

    if config.retry.enabled() {
        Arc::new(RetryingEmotionProvider::new(
            Arc::new(client),
            config.retry.to_retry_config(),
        ))
    } else {
        Arc::new(client)
    }
}
