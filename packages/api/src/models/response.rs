//! The `{code, message, data, success}` envelope around every backend reply.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response envelope returned by every backend endpoint.
///
/// `data` is `None` when the backend sends `null` or leaves it out, which it
/// does for most failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful response.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessPlan, UserInfo};

    #[test]
    fn test_success_envelope() {
        let response: ApiResponse<bool> = serde_json::from_str(
            r#"{"code": 200, "message": "ok", "data": true, "success": true}"#,
        )
        .unwrap();
        assert_eq!(response.data, Some(true));
        assert!(response.into_result().unwrap());
    }

    #[test]
    fn test_failure_envelope_with_null_data() {
        let response: ApiResponse<UserInfo> = serde_json::from_str(
            r#"{"code": 404, "message": "user not found", "data": null, "success": false}"#,
        )
        .unwrap();
        assert!(response.data.is_none());
        match response.into_result() {
            Err(ApiError::Rejected { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "user not found");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_decodes_as_none() {
        let response: ApiResponse<FitnessPlan> = serde_json::from_str(
            r#"{"code": 403, "message": "forbidden", "success": false}"#,
        )
        .unwrap();
        assert_eq!(response.code, 403);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_success_without_data_is_rejected() {
        let response: ApiResponse<UserInfo> =
            serde_json::from_str(r#"{"code": 200, "message": "ok", "success": true}"#).unwrap();
        assert!(response.into_result().is_err());
    }
}
