//! Request handlers for the emotion detection endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::warn;

use crate::EmotionDetector;
use crate::types::EmotionReport;

/// Fixed message returned when the text is missing or classification fails.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Query parameters of `GET /emotionDetector`.
#[derive(Debug, Deserialize)]
pub(crate) struct DetectParams {
    #[serde(rename = "textToAnalyze")]
    text_to_analyze: Option<String>,
}

/// `GET /emotionDetector` — classify the supplied text.
///
/// Every failure (missing text, upstream errors) collapses into the fixed
/// invalid-text message with a 200 status; the cause is only logged.
pub(crate) async fn detect_emotion(
    State(detector): State<Arc<EmotionDetector>>,
    Query(params): Query<DetectParams>,
) -> String {
    match detector.detect(params.text_to_analyze.as_deref()).await {
        Ok(report) => format_report(&report),
        Err(error) => {
            warn!(%error, "classification failed");
            INVALID_TEXT_MESSAGE.to_string()
        }
    }
}

/// Render a report as the fixed response sentence.
fn format_report(report: &EmotionReport) -> String {
    let scores = &report.scores;
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {}, 'sadness': {}. The dominant emotion is {}.",
        scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, report.dominant
    )
}

/// `GET /` — static landing page.
pub(crate) async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmotionScores;

    #[test]
    fn format_report_embeds_all_scores_and_dominant() {
        let report = EmotionReport::from_scores(EmotionScores {
            anger: 0.1,
            disgust: 0.05,
            fear: 0.2,
            joy: 0.9,
            sadness: 0.15,
        });
        assert_eq!(
            format_report(&report),
            "For the given statement, the system response is 'anger': 0.1, \
             'disgust': 0.05, 'fear': 0.2, 'joy': 0.9, 'sadness': 0.15. \
             The dominant emotion is joy."
        );
    }

    #[test]
    fn format_report_renders_json_style_numbers() {
        let report = EmotionReport::from_scores(EmotionScores {
            anger: 0.0064,
            disgust: 0.0026,
            fear: 0.0093,
            joy: 0.968,
            sadness: 0.0497,
        });
        let rendered = format_report(&report);
        assert!(rendered.contains("'joy': 0.968"));
        assert!(rendered.contains("'anger': 0.0064"));
        assert!(rendered.ends_with("The dominant emotion is joy."));
    }
}
