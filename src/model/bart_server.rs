use anyhow::Result;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ModelError;
use crate::model::{GenerationParams, SummarizationModel};

/// Client for a local model server hosting a pretrained seq2seq checkpoint
///
/// The server owns the expensive one-time model load; this client is cheap to
/// clone and holds no model state of its own. Both tokenization and
/// generation go to the same server so their tokenizers cannot drift apart.
#[derive(Debug, Clone)]
pub struct BartServer {
    /// Base URL of the model server
    base_url: String,
    /// Name of the checkpoint the server should use
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Tokenize request for the model server
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeRequest {
    /// Checkpoint name to tokenize with
    model: String,
    /// Text to tokenize
    text: String,
}

/// Tokenize response from the model server
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResponse {
    /// Number of input tokens the text occupies
    pub token_count: usize,
}

/// Summarize request for the model server
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Checkpoint name to generate with
    model: String,
    /// Source text to summarize
    text: String,
    /// Decoding parameters
    parameters: SummarizeParameters,
}

/// Decoding parameters as the model server expects them
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeParameters {
    /// Minimum number of generated tokens
    min_length: u32,
    /// Maximum number of generated tokens
    max_length: u32,
    /// Number of beams for beam search
    num_beams: u32,
    /// Size of n-grams that must not repeat
    no_repeat_ngram_size: u32,
    /// Length penalty applied during beam search
    length_penalty: f32,
    /// Whether beam search stops early
    early_stopping: bool,
    /// Truncate input to this many tokens before generation
    #[serde(skip_serializing_if = "Option::is_none")]
    truncation_max_tokens: Option<usize>,
}

impl From<&GenerationParams> for SummarizeParameters {
    fn from(params: &GenerationParams) -> Self {
        Self {
            min_length: params.min_length,
            max_length: params.max_length,
            num_beams: params.num_beams,
            no_repeat_ngram_size: params.no_repeat_ngram_size,
            length_penalty: params.length_penalty,
            early_stopping: params.early_stopping,
            truncation_max_tokens: params.truncate_input_to,
        }
    }
}

/// Summarize response from the model server
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Generated summary text
    pub summary_text: String,
    /// Number of input tokens the server actually fed the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<usize>,
    /// Number of generated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_tokens: Option<usize>,
}

impl BartServer {
    /// Create a new client for the given server endpoint and checkpoint name
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self, ModelError> {
        let base_url = endpoint.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ModelError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            model: model.into(),
            client,
        })
    }

    /// Build the full URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and decode the JSON response, mapping failures
    async fn post_json<Req: Serialize, Resp: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp, ModelError> {
        let response = self
            .client
            .post(self.url(path))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ModelError::ConnectionError(format!("Failed to reach model server: {}", e))
                } else {
                    ModelError::RequestFailed(format!("Request to {} failed: {}", path, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "<no body>".to_string());
            error!("Model server error on {}: {} - {}", path, status, message);
            return Err(ModelError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| ModelError::ParseError(format!("Invalid response from {}: {}", path, e)))
    }
}

#[async_trait]
impl SummarizationModel for BartServer {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn count_tokens(&self, text: &str) -> Result<usize, ModelError> {
        let request = TokenizeRequest {
            model: self.model.clone(),
            text: text.to_string(),
        };
        let response: TokenizeResponse = self.post_json("tokenize", &request).await?;
        Ok(response.token_count)
    }

    async fn generate(&self, text: &str, params: &GenerationParams) -> Result<String, ModelError> {
        let request = SummarizeRequest {
            model: self.model.clone(),
            text: text.to_string(),
            parameters: SummarizeParameters::from(params),
        };
        let response: SummarizeResponse = self.post_json("summarize", &request).await?;
        Ok(response.summary_text)
    }

    async fn test_connection(&self) -> Result<(), ModelError> {
        let response = self
            .client
            .get(self.url("health"))
            .send()
            .await
            .map_err(|e| ModelError::ConnectionError(format!("Failed to reach model server: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ModelError::ApiError {
                status_code: status.as_u16(),
                message: "Health check failed".to_string(),
            })
        }
    }
}
