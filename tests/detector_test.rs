//! Tests for the detector core: input validation, provider dispatch,
//! dominant-emotion computation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use emoscope::providers::EmotionProvider;
use emoscope::types::EmotionScores;
use emoscope::{Emotion, EmoscopeError, EmotionDetector, Result};

/// Mock provider that returns fixed scores and counts invocations.
struct FixedScoresProvider {
    scores: EmotionScores,
    calls: AtomicU32,
}

impl FixedScoresProvider {
    fn new(scores: EmotionScores) -> Self {
        Self {
            scores,
            calls: AtomicU32::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EmotionProvider for FixedScoresProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn detect_emotions(&self, _text: &str) -> Result<EmotionScores> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.scores)
    }
}

struct FailingProvider;

#[async_trait]
impl EmotionProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn detect_emotions(&self, _text: &str) -> Result<EmotionScores> {
        Err(EmoscopeError::Api {
            status: 503,
            message: "unavailable".into(),
        })
    }
}

fn happy_scores() -> EmotionScores {
    EmotionScores {
        anger: 0.01,
        disgust: 0.02,
        fear: 0.03,
        joy: 0.9,
        sadness: 0.04,
    }
}

#[tokio::test]
async fn classifies_text_and_computes_dominant() {
    let provider = Arc::new(FixedScoresProvider::new(happy_scores()));
    let detector = EmotionDetector::new(provider.clone());

    let report = detector.detect(Some("I am so happy today!")).await.unwrap();

    assert_eq!(report.dominant, Emotion::Joy);
    assert!((report.scores.joy - 0.9).abs() < f64::EPSILON);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn absent_text_is_empty_input_without_upstream_call() {
    let provider = Arc::new(FixedScoresProvider::new(happy_scores()));
    let detector = EmotionDetector::new(provider.clone());

    let result = detector.detect(None).await;

    assert!(matches!(result, Err(EmoscopeError::EmptyInput)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn empty_text_is_empty_input_without_upstream_call() {
    let provider = Arc::new(FixedScoresProvider::new(happy_scores()));
    let detector = EmotionDetector::new(provider.clone());

    let result = detector.detect(Some("")).await;

    assert!(matches!(result, Err(EmoscopeError::EmptyInput)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn whitespace_text_is_forwarded_upstream() {
    // Only truly empty input short-circuits; the classifier decides
    // whether whitespace is usable.
    let provider = Arc::new(FixedScoresProvider::new(happy_scores()));
    let detector = EmotionDetector::new(provider.clone());

    let result = detector.detect(Some("   ")).await;

    assert!(result.is_ok());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn upstream_error_passes_through() {
    let detector = EmotionDetector::new(Arc::new(FailingProvider));

    let result = detector.detect(Some("some text")).await;

    match result {
        Err(EmoscopeError::Api { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn identical_inputs_yield_identical_reports() {
    let detector = EmotionDetector::new(Arc::new(FixedScoresProvider::new(happy_scores())));

    let first = detector.detect(Some("same text")).await.unwrap();
    let second = detector.detect(Some("same text")).await.unwrap();

    assert_eq!(first, second);
}
