//! Provider trait for emotion classification backends.
//!
//! The detector and HTTP handlers depend only on this trait, which
//! enables:
//! - Decorator patterns: `RetryingEmotionProvider<T>`
//! - Dependency injection of fake classifiers in tests

use async_trait::async_trait;

use crate::Result;
use crate::types::EmotionScores;

/// Backend that scores a text across the five emotion categories.
///
/// Implementations must not interpret the scores; computing the dominant
/// emotion is the detector's job.
#[async_trait]
pub trait EmotionProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Score `text` across the five tracked emotions.
    async fn detect_emotions(&self, text: &str) -> Result<EmotionScores>;
}
