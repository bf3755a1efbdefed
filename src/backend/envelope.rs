use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use crate::sync::SyncError;

/// Response body for a sync-all request. Clients tell the two apart by
/// `success`, which is derived from the variant when serialising.
#[derive(Debug, PartialEq)]
pub enum SyncEnvelope {
    Success { results: Value },
    Failure { error: String },
}

impl SyncEnvelope {
    pub fn success(results: Value) -> Self {
        Self::Success { results }
    }

    pub fn failure(error: &SyncError) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    pub fn from_outcome(outcome: Result<Value, SyncError>) -> Self {
        match outcome {
            Ok(results) => Self::success(results),
            Err(e) => Self::failure(&e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { .. } => StatusCode::OK,
            Self::Failure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Serialize for SyncEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("SyncEnvelope", 2)?;
        match self {
            Self::Success { results } => {
                body.serialize_field("success", &true)?;
                body.serialize_field("results", results)?;
            }
            Self::Failure { error } => {
                body.serialize_field("success", &false)?;
                body.serialize_field("error", error)?;
            }
        }
        body.end()
    }
}

impl IntoResponse for SyncEnvelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_carries_results_verbatim() {
        let envelope = SyncEnvelope::from_outcome(Ok(json!(["conn1-ok", "conn2-ok"])));

        assert_eq!(envelope.status(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "results": ["conn1-ok", "conn2-ok"]})
        );
    }

    #[test]
    fn empty_results_are_still_success() {
        let envelope = SyncEnvelope::from_outcome(Ok(json!([])));

        assert!(envelope.is_success());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "results": []})
        );
    }

    #[test]
    fn failure_is_500_with_rendered_error() {
        let envelope =
            SyncEnvelope::from_outcome(Err(SyncError::failed("timeout contacting conn3")));

        assert_eq!(envelope.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "error": "Error: timeout contacting conn3"})
        );
    }

    #[test]
    fn success_flag_follows_the_variant() {
        let ok = SyncEnvelope::Success { results: json!(null) };
        let failed = SyncEnvelope::Failure { error: "x".to_string() };

        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"success": true, "results": null}));
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(serde_json::to_value(&failed).unwrap(), json!({"success": false, "error": "x"}));
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn structured_failure_is_stringified() {
        let envelope = SyncEnvelope::from_outcome(Err(SyncError::Value(json!({"retry": true}))));

        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["error"], json!(r#"{"retry":true}"#));
        assert!(body["error"].is_string());
    }
}
