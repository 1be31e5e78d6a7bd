use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{MatchDetail, MatchRecord};

/// Response body for the match list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MatchesEnvelope {
    pub success: bool,
    pub matches: Vec<MatchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchesEnvelope {
    /// Plain success envelope without a timestamp.
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self {
            success: true,
            matches,
            timestamp: None,
            note: None,
            error: None,
        }
    }

    /// Success envelope stamped with the current time.
    pub fn stamped(matches: Vec<MatchRecord>) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Self::new(matches)
        }
    }

    /// Success envelope carrying stand-in data plus the reason the real data is missing.
    pub fn degraded(
        matches: Vec<MatchRecord>,
        note: impl Into<String>,
        error: impl ToString,
    ) -> Self {
        Self {
            note: Some(note.into()),
            error: Some(error.to_string()),
            ..Self::new(matches)
        }
    }
}

/// Response body for the single match endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetailEnvelope {
    pub success: bool,
    #[serde(rename = "match")]
    pub match_detail: MatchDetail,
}

impl MatchDetailEnvelope {
    /// Success envelope wrapping `match_detail`.
    pub fn new(match_detail: MatchDetail) -> Self {
        Self {
            success: true,
            match_detail,
        }
    }
}

/// Failure body carrying the error message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    /// Failure envelope with `error`'s message.
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// Response body for the health check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthEnvelope {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
