use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::Place;

use super::transport::build_http_client;

const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not read recommendations: {0}")]
    Decode(#[from] serde_json::Error),
}

// Error pages from proxies can be whole HTML documents; only the start of the
// body ends up in the chat.
fn body_excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

/// Anything that can turn a keyword into a list of places.
pub trait RecommendationSource: Send + Sync + 'static {
    fn fetch(&self, keyword: &str) -> impl Future<Output = Result<Vec<Place>, FetchError>> + Send;
}

#[derive(Debug, Serialize)]
struct RecommendationRequest<'a> {
    keyword: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecommendationPayload {
    List(Vec<Place>),
    Wrapped { recommendations: Vec<Place> },
}

impl From<RecommendationPayload> for Vec<Place> {
    fn from(payload: RecommendationPayload) -> Self {
        match payload {
            RecommendationPayload::List(places) => places,
            RecommendationPayload::Wrapped { recommendations } => recommendations,
        }
    }
}

/// HTTP client for the recommendation backend.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http: build_http_client(timeout)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecommendationSource for RecommendationClient {
    async fn fetch(&self, keyword: &str) -> Result<Vec<Place>, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&RecommendationRequest { keyword })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: body_excerpt(&body),
            });
        }

        let payload: RecommendationPayload = serde_json::from_str(&body)?;
        Ok(payload.into())
    }
}
