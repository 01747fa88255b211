// API client module: a small blocking HTTP client for the AISHE
// question-answering API. One question in, one answer out.

use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Deserializer, Serialize};

/// Blocking client bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

/// Request body for `POST /api/v1/ask`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub question: String,
}

/// A citation attached to an answer. `number` is the 1-based index the
/// server assigned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Source {
    #[serde(deserialize_with = "null_as_default")]
    pub number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Response body of the ask endpoint. Missing or `null` fields decode to
/// their zero values, so an unrelated JSON object still parses (with a
/// blank answer) while a type mismatch is a decode error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct QuestionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
    /// Server-side processing time in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub processing_time: f64,
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

impl ApiClient {
    /// Build a client whose timeout covers the whole round trip.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, config })
    }

    /// POST the question and decode the answer. A non-2xx status is only
    /// logged; the body is decoded the same way as a success body.
    pub fn ask(&self, question: &str) -> Result<QuestionResponse> {
        let req = QuestionRequest {
            question: question.to_string(),
        };
        let body = serde_json::to_vec(&req).context("Failed to encode question as JSON")?;

        let url = self.config.ask_url();
        tracing::debug!(url = %url, bytes = body.len(), "sending question");

        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .with_context(|| format!("Failed to send ask request to {}", url))?;

        let status = res.status();
        if status.is_success() {
            tracing::info!(%status, "received response");
        } else {
            tracing::warn!(%status, "ask endpoint returned a non-success status");
        }

        let txt = res.text().context("Failed to read ask response body")?;
        decode_response(&txt)
    }
}

/// Parse a response body into a `QuestionResponse`.
pub fn decode_response(body: &str) -> Result<QuestionResponse> {
    let resp: QuestionResponse =
        serde_json::from_str(body).context("Parsing ask response json")?;
    Ok(resp)
}
