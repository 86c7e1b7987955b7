use reqwest::StatusCode;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("No content from Gemini")]
    EmptyContent,

    #[error("Gemini call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse JSON from Gemini: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Transport(_) | Error::UpstreamStatus { .. } | Error::Timeout(_) => "transport",
            Error::EmptyContent => "empty_content",
            Error::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_classified() {
        assert_eq!(Error::Config("missing key".into()).kind(), "config");
        assert_eq!(Error::EmptyContent.kind(), "empty_content");
        let status = Error::UpstreamStatus {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "quota".into(),
        };
        assert_eq!(status.kind(), "transport");
        assert!(status.to_string().contains("quota"));
    }

    #[test]
    fn sub_second_timeout_reports_its_duration() {
        let err = Error::Timeout(Duration::from_millis(300));
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.to_string(), "Gemini call timed out after 300ms");
    }

    #[test]
    fn parse_error_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Parse {
            source,
            raw: "not json".into(),
        };
        assert_eq!(err.kind(), "parse");
        match err {
            Error::Parse { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
