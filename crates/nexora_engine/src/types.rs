use std::fmt;

use nexora_core::{Dashboard, SubmissionId, TrendingCareer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AssessmentCompleted {
        submission_id: SubmissionId,
        result: Result<Dashboard, ApiError>,
    },
    ChatReplied {
        session_id: String,
        result: Result<String, ApiError>,
    },
    RoadmapDrafted {
        topic: String,
        result: Result<String, ApiError>,
    },
    AuthCompleted {
        result: Result<(), ApiError>,
    },
    TrendingLoaded {
        result: Result<Vec<TrendingCareer>, ApiError>,
    },
    /// Emitted after any request answered 401; the token is already cleared.
    SessionExpired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {}", summary(.detail, .message))]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// `error` field from the response body, when the server sent one.
    pub detail: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == FailureKind::Unauthorized
    }

    /// Server-provided detail if any, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_string())
    }
}

fn summary<'a>(detail: &'a Option<String>, message: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(message)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Unauthorized,
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Unauthorized => write!(f, "unauthorized"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unexpected response"),
        }
    }
}
