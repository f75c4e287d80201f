//! Watson NLP emotion client.
//!
//! Calls the Watson NLP `EmotionPredict` endpoint and adapts its JSON
//! payload into [`EmotionScores`]. The wire format is an implementation
//! detail of this module; nothing upstream-shaped leaks past it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::EmotionProvider;
use crate::types::EmotionScores;
use crate::{EmoscopeError, Result};

/// Default base URL for the Watson NLP service.
const DEFAULT_BASE_URL: &str = "https://sn-watson-emotion.labs.skills.network";

/// Path of the EmotionPredict operation.
const EMOTION_PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Model id sent in the `grpc-metadata-mm-model-id` header.
const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Default upstream request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Watson NLP emotion service.
#[derive(Clone)]
pub struct WatsonEmotionClient {
    http: Client,
    base_url: String,
    model_id: String,
}

impl WatsonEmotionClient {
    /// Create a client against the hosted Watson NLP service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Override the model id sent to the service.
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Score a text across the five emotion categories.
    ///
    /// Sends the text as a raw document and takes the first prediction
    /// from the response. An empty prediction list is an error.
    pub async fn detect(&self, text: &str) -> Result<EmotionScores> {
        let url = format!("{}{}", self.base_url, EMOTION_PREDICT_PATH);

        let response = self
            .http
            .post(&url)
            .header("grpc-metadata-mm-model-id", &self.model_id)
            .json(&EmotionPredictRequest {
                raw_document: RawDocument { text },
            })
            .send()
            .await
            .map_err(|e| EmoscopeError::Http(e.to_string()))?;

        self.handle_response_errors(&response)?;

        let result: EmotionPredictResponse = response
            .json()
            .await
            .map_err(|e| EmoscopeError::Http(e.to_string()))?;

        let prediction = result
            .emotion_predictions
            .into_iter()
            .next()
            .ok_or(EmoscopeError::EmptyResponse)?;

        Ok(prediction.emotion)
    }

    /// Check response status and map to appropriate error.
    fn handle_response_errors(&self, response: &reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            // Watson rejects blank or unusable documents with 400
            400 => Err(EmoscopeError::InvalidInput(
                "classifier rejected the document".to_string(),
            )),
            401 => Err(EmoscopeError::AuthenticationFailed),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(EmoscopeError::RateLimited { retry_after })
            }
            code => Err(EmoscopeError::Api {
                status: code,
                message: format!("Watson NLP error: {}", status),
            }),
        }
    }
}

impl Default for WatsonEmotionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct EmotionPredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions", default)]
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Deserialize)]
struct EmotionPrediction {
    emotion: EmotionScores,
}

#[async_trait]
impl EmotionProvider for WatsonEmotionClient {
    fn name(&self) -> &str {
        "watson-nlp"
    }

    async fn detect_emotions(&self, text: &str) -> Result<EmotionScores> {
        // Delegate to the existing method
        WatsonEmotionClient::detect(self, text).await
    }
}
