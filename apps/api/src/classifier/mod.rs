/// Emotion Classifier Client — the single point of entry for all calls to the
/// external text-classification model.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All classification MUST go through this module.
///
/// Model: SamLowe/roberta-base-go_emotions (hardcoded to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod postprocess;

const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";
/// The multi-label emotion model used for all classification calls.
pub const MODEL: &str = "SamLowe/roberta-base-go_emotions";

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("classifier returned no result rows")]
    EmptyResult,
}

/// One scored emotion label, in model-defined order (typically descending
/// by confidence). Score is a confidence in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceApiError {
    error: String,
}

/// Thin client over the hosted inference endpoint. No retries, no caching,
/// and no timeout beyond the transport default; transient failures surface
/// directly to the caller as `ClassifierError`.
#[derive(Clone)]
pub struct EmotionClassifier {
    client: Client,
    token: String,
}

impl EmotionClassifier {
    /// The token is taken as-is; an empty token is only rejected by the
    /// remote API once a call is attempted.
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    /// Classifies a block of text into scored emotion labels, preserving the
    /// model's ordering. The response shape is validated here so callers
    /// never see untyped values.
    pub async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        let url = format!("{INFERENCE_API_BASE}/{MODEL}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<InferenceApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The hosted endpoint wraps text-classification output in one result
        // row per input; a single input yields a single row.
        let rows: Vec<Vec<EmotionScore>> = response.json().await?;
        let scores = rows.into_iter().next().ok_or(ClassifierError::EmptyResult)?;

        debug!("Classified {} chars into {} labels", text.len(), scores.len());
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_parses_into_typed_scores() {
        let body = r#"[[{"label":"admiration","score":0.93},{"label":"joy","score":0.04}]]"#;
        let rows: Vec<Vec<EmotionScore>> = serde_json::from_str(body).unwrap();
        let scores = rows.into_iter().next().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "admiration");
        assert!(scores[0].score > scores[1].score);
    }

    #[test]
    fn test_malformed_response_shape_is_rejected() {
        // A bare object instead of nested arrays must fail the typed parse.
        let body = r#"{"label":"joy","score":0.5}"#;
        assert!(serde_json::from_str::<Vec<Vec<EmotionScore>>>(body).is_err());
    }

    #[test]
    fn test_api_error_body_is_extracted() {
        let body = r#"{"error":"Authorization header is correct, but the token seems invalid"}"#;
        let parsed: InferenceApiError = serde_json::from_str(body).unwrap();
        assert!(parsed.error.contains("token"));
    }
}
