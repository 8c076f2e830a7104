use reqwest::blocking::Response;
use serde::Deserialize;
use std::error::Error as _;
use thiserror::Error;

/// Failure of a call to the Contentful API.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub status_text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: None,
            status_text: None,
        }
    }

    /// Build from a non-success response, preferring the `message` field of
    /// the JSON error body.
    pub fn from_response(response: Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().map(str::to_string);
        let body_message = response
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        let message = body_message
            .or_else(|| status_text.clone())
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

        ApiError {
            message,
            status: Some(status.as_u16()),
            status_text,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        ApiError {
            message,
            status: status.map(|s| s.as_u16()),
            status_text: status.and_then(|s| s.canonical_reason()).map(str::to_string),
        }
    }
}
