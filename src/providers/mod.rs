//! Emotion classification providers.
//!
//! The [`EmotionProvider`] trait is the seam between the HTTP surface and
//! the upstream classifier. [`WatsonEmotionClient`] is the production
//! implementation; tests substitute mocks.

pub mod retry;
pub mod traits;
pub mod watson;

pub use retry::{RetryConfig, RetryingEmotionProvider};
pub use traits::EmotionProvider;
pub use watson::WatsonEmotionClient;
