//! Detector core: input validation, provider dispatch, and
//! dominant-emotion computation.

use std::sync::Arc;
use std::time::Instant;

use tracing::instrument;

use crate::providers::EmotionProvider;
use crate::telemetry;
use crate::types::EmotionReport;
use crate::{EmoscopeError, Result};

/// Coordinates a single classification request.
///
/// Owns the provider behind a trait object so the HTTP surface and tests
/// can inject any backend. One instance is shared across all requests;
/// it holds no per-request state.
pub struct EmotionDetector {
    provider: Arc<dyn EmotionProvider>,
}

impl EmotionDetector {
    /// Create a detector over the given classification backend.
    pub fn new(provider: Arc<dyn EmotionProvider>) -> Self {
        Self { provider }
    }

    /// Classify `text`, if any.
    ///
    /// Absent or empty text fails with [`EmoscopeError::EmptyInput`]
    /// without touching the upstream service. Upstream errors pass
    /// through unchanged; the caller decides how to surface them.
    #[instrument(skip(self, text), fields(operation = "detect"))]
    pub async fn detect(&self, text: Option<&str>) -> Result<EmotionReport> {
        let start = Instant::now();
        let result = self.detect_inner(text).await;
        Self::record_request(self.provider.name(), start, result.is_ok());
        result
    }

    async fn detect_inner(&self, text: Option<&str>) -> Result<EmotionReport> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(EmoscopeError::EmptyInput),
        };

        let scores = self.provider.detect_emotions(text).await?;
        Ok(EmotionReport::from_scores(scores))
    }

    /// Record request outcome metrics (counter + histogram).
    fn record_request(provider: &str, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        let elapsed = start.elapsed().as_secs_f64();
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "provider" => provider.to_owned(),
            "operation" => "detect",
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
            "provider" => provider.to_owned(),
            "operation" => "detect",
        )
        .record(elapsed);
    }
}
