//! HTTP surface: router construction and request handlers.

pub mod config;
mod handlers;

pub use config::Config;
pub use handlers::INVALID_TEXT_MESSAGE;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::EmotionDetector;

/// Build the application router with all routes bound.
///
/// Takes the detector explicitly so callers (and tests) inject the
/// classifier backend instead of relying on process-wide state.
pub fn build_router(detector: Arc<EmotionDetector>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/emotionDetector", get(handlers::detect_emotion))
        .with_state(detector)
}
