/// HTTP annotator. Delegates NER to an external service speaking the
/// spaCy-style `{"text": ...}` → `{"ents": [{"text", "label"}]}` contract.
///
/// Retries 429 and 5xx with exponential backoff; any other non-success status
/// fails immediately.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{AnnotatorError, Entity, EntityAnnotator};

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    #[serde(alias = "entities")]
    ents: Option<Vec<NerSpan>>,
}

#[derive(Debug, Deserialize)]
struct NerSpan {
    text: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct NerErrorBody {
    #[serde(alias = "error")]
    detail: String,
}

#[derive(Clone)]
pub struct HttpAnnotator {
    client: Client,
    endpoint: String,
    max_attempts: u32,
}

impl HttpAnnotator {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        max_attempts: u32,
    ) -> Result<Self, AnnotatorError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            max_attempts: max_attempts.max(1),
        })
    }
}

#[async_trait]
impl EntityAnnotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<Entity>, AnnotatorError> {
        let request_body = NerRequest { text };
        let mut last_error: Option<AnnotatorError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                // 1s, 2s, 4s, ...
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(16)));
                warn!(
                    "NER call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AnnotatorError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("NER service returned {}: {}", status, body);
                last_error = Some(AnnotatorError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AnnotatorError::Api {
                    status: status.as_u16(),
                    message: error_message(&body),
                });
            }

            let body = response.text().await?;
            let entities = parse_entities(&body)?;
            debug!(
                "NER call succeeded: chars={}, entities={}",
                text.chars().count(),
                entities.len()
            );
            return Ok(entities);
        }

        Err(last_error.unwrap_or(AnnotatorError::Exhausted {
            attempts: self.max_attempts,
        }))
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

/// Decodes a service response body. Spans with empty text are dropped.
fn parse_entities(body: &str) -> Result<Vec<Entity>, AnnotatorError> {
    let parsed: NerResponse = serde_json::from_str(body)?;
    let spans = parsed.ents.ok_or(AnnotatorError::EmptyContent)?;
    Ok(spans
        .into_iter()
        .filter(|s| !s.text.trim().is_empty())
        .map(|s| Entity::new(s.text, &s.label))
        .collect())
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<NerErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}
