//! Core data types for the FluidSurveys client
//!
//! Survey payloads are kept as opaque `serde_json::Value`s; only the pieces the
//! client needs to address the API (credentials, survey ids) get their own types.

pub mod surveys;
pub mod transport;

pub use surveys::{SurveysClient, DEFAULT_BASE_URL, DEFAULT_CACHE_TIMEOUT_SECS};
pub use transport::{HttpTransport, Transport};

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when talking to the survey API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// HTTP Basic credentials for the API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key, sent as the Basic auth user name
    pub key: String,
    /// API password, sent as the Basic auth password
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Identifier of a survey
///
/// The API hands out numeric ids in listings, while callers often have them
/// as strings. Either form renders to the same path segment; numbers are
/// written the way JSON prints them, so `-3` and `1.0` survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SurveyId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyId::Number(n) => write!(f, "{}", n),
            SurveyId::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! survey_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for SurveyId {
                fn from(id: $int) -> Self {
                    SurveyId::Number(serde_json::Number::from(id))
                }
            }
        )*
    };
}

survey_id_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for SurveyId {
    fn from(id: &str) -> Self {
        SurveyId::Text(id.to_string())
    }
}

impl From<String> for SurveyId {
    fn from(id: String) -> Self {
        SurveyId::Text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_survey_id_display_matches_for_number_and_text() {
        assert_eq!(SurveyId::from(42u64).to_string(), "42");
        assert_eq!(SurveyId::from("42").to_string(), "42");
    }

    #[test]
    fn test_survey_id_deserializes_from_listing_values() {
        let numeric: SurveyId = serde_json::from_value(json!(17)).unwrap();
        let text: SurveyId = serde_json::from_value(json!("abc")).unwrap();

        assert_eq!(numeric, SurveyId::from(17u64));
        assert_eq!(text, SurveyId::Text("abc".to_string()));
    }

    #[test]
    fn test_survey_id_from_any_integer_type() {
        assert_eq!(SurveyId::from(42).to_string(), "42");
        assert_eq!(SurveyId::from(42i64).to_string(), "42");
        assert_eq!(SurveyId::from(42usize).to_string(), "42");
        assert_eq!(SurveyId::from(-3).to_string(), "-3");
    }

    #[test]
    fn test_survey_id_keeps_negative_and_float_listing_ids() {
        let negative: SurveyId = serde_json::from_value(json!(-3)).unwrap();
        let float: SurveyId = serde_json::from_value(json!(1.0)).unwrap();

        assert_eq!(negative.to_string(), "-3");
        assert_eq!(float.to_string(), "1.0");
    }

    #[test]
    fn test_survey_id_rejects_non_scalar_values() {
        let result: Result<SurveyId, _> = serde_json::from_value(json!({"id": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("my-key", "hunter2");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("my-key"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_missing_field_error_message() {
        let err = ApiError::MissingField("surveys".to_string());
        assert_eq!(err.to_string(), "Missing expected field in response: surveys");
    }
}
