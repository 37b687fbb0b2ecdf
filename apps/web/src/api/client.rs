use gloo_net::http::Request;

use crate::models::{AnalysisRequest, StoryReport};

/// Same-origin default; `trunk serve` proxies this to a local service.
const DEFAULT_API_BASE_URL: &str = "/api";

/// Base URL of the analysis service, overridable at build time.
pub fn api_base_url() -> &'static str {
    option_env!("STORYSCOPE_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    NetworkError(String),
    ParseError(String),
    ServerError(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ApiError::ServerError(status) => write!(f, "Server error: HTTP {}", status),
        }
    }
}

impl ApiError {
    /// Text surfaced to the user for a failed submission. Transport and HTTP
    /// failures collapse into one generic message; a decode failure surfaces
    /// the decoder's own message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NetworkError(_) | ApiError::ServerError(_) => {
                "Failed to analyze synopsis".to_string()
            }
            ApiError::ParseError(msg) if msg.is_empty() => "Unexpected error".to_string(),
            ApiError::ParseError(msg) => msg.clone(),
        }
    }
}

/// Submit a synopsis for analysis.
///
/// A non-2xx status is a failure regardless of body; the body is only parsed
/// on the success path, and a partial decode is discarded as an error.
pub async fn analyze_synopsis(story: &str) -> Result<StoryReport, ApiError> {
    let url = format!("{}/analyze_synopsis", api_base_url());
    let body = AnalysisRequest {
        story: story.to_string(),
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| ApiError::NetworkError(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    if !response.ok() {
        log::warn!("analysis request failed: HTTP {}", response.status());
        return Err(ApiError::ServerError(response.status()));
    }

    response
        .json::<StoryReport>()
        .await
        .map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Loading messages to cycle through during analysis
pub fn get_loading_messages() -> Vec<&'static str> {
    vec![
        "Reading the synopsis...",
        "Mapping narrative beats...",
        "Tracing the emotional arc...",
        "Profiling characters...",
        "Scoring narrative strength...",
        "Checking market fit...",
        "Scanning comparable titles...",
        "Drafting pitch copy...",
        "Compiling the report...",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_share_one_user_message() {
        let network = ApiError::NetworkError("connection refused".into());
        let http = ApiError::ServerError(503);
        assert_eq!(network.user_message(), "Failed to analyze synopsis");
        assert_eq!(http.user_message(), "Failed to analyze synopsis");
    }

    #[test]
    fn every_http_status_maps_to_the_same_message() {
        for status in [400u16, 401, 404, 422, 500, 502, 503] {
            assert_eq!(
                ApiError::ServerError(status).user_message(),
                "Failed to analyze synopsis"
            );
        }
    }

    #[test]
    fn parse_failure_surfaces_decoder_message() {
        let err = ApiError::ParseError("missing field `top_level_score`".into());
        assert_eq!(err.user_message(), "missing field `top_level_score`");
    }

    #[test]
    fn empty_parse_message_falls_back_to_generic_text() {
        let err = ApiError::ParseError(String::new());
        assert_eq!(err.user_message(), "Unexpected error");
    }

    #[test]
    fn display_includes_error_kind() {
        assert_eq!(
            ApiError::ServerError(500).to_string(),
            "Server error: HTTP 500"
        );
        assert_eq!(
            ApiError::NetworkError("timed out".into()).to_string(),
            "Network error: timed out"
        );
    }
}
