// src/error.rs
//! Error kinds shared by both jobs

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobError>;

#[derive(Error, Debug)]
pub enum JobError {
    /// A required environment variable is absent or empty
    #[error("{0} is missing")]
    MissingConfig(&'static str),

    /// An environment variable is present but unusable
    #[error("invalid value for {var}: {reason}")]
    InvalidConfig { var: &'static str, reason: String },

    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, TLS or timeout failure before a status was received
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status the caller does not accept
    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// A decoded record lacks a field the job needs
    #[error("record {index} from {url} has no {field}")]
    MalformedRecord {
        url: String,
        index: usize,
        field: &'static str,
    },

    /// The response body could not be read or decoded
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl JobError {
    pub fn invalid_config(var: &'static str, reason: impl Into<String>) -> Self {
        JobError::InvalidConfig {
            var,
            reason: reason.into(),
        }
    }

    /// True for errors raised before any request was sent
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            JobError::MissingConfig(_) | JobError::InvalidConfig { .. }
        )
    }

    /// Process exit status for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            JobError::MissingConfig(_)
            | JobError::InvalidConfig { .. }
            | JobError::ClientBuild(_)
            | JobError::Transport { .. }
            | JobError::Status { .. }
            | JobError::MalformedRecord { .. }
            | JobError::Decode { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_flagged() {
        assert!(JobError::MissingConfig("API_KEY").is_config());
        assert!(JobError::invalid_config("HTTP_TIMEOUT_SECS", "not a number").is_config());

        let status = JobError::Status {
            url: "http://localhost/ai/refresh-signals".to_string(),
            status: StatusCode::OK,
            body: String::new(),
        };
        assert!(!status.is_config());
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            JobError::MissingConfig("AI_INTERNAL_API_KEY"),
            JobError::invalid_config("API_BASE_URL", "empty"),
            JobError::Status {
                url: "http://localhost/x".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            },
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_status_message_includes_body() {
        let err = JobError::Status {
            url: "http://localhost/ai/refresh-signals".to_string(),
            status: StatusCode::FORBIDDEN,
            body: "{\"error\":\"bad key\"}".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("bad key"));
    }
}
