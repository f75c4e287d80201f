//! Emoscope - Emotion detection web service
//!
//! This crate wraps an external emotion-classification service (Watson
//! NLP) behind a stable [`EmotionProvider`](providers::EmotionProvider)
//! trait and exposes a small HTTP surface over it. Consumers build a
//! router with an injected provider, which keeps the upstream service
//! swappable in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use emoscope::EmotionDetector;
//! use emoscope::providers::WatsonEmotionClient;
//! use emoscope::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WatsonEmotionClient::new();
//!     let detector = Arc::new(EmotionDetector::new(Arc::new(client)));
//!
//!     let app = server::build_router(detector);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod detector;
pub mod error;
pub mod providers;
pub mod server;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use detector::EmotionDetector;
pub use error::{EmoscopeError, Result};
pub use types::{Emotion, EmotionReport, EmotionScores};
pub use version::{PKG_VERSION, version_string};
