use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required credential {name} is not set")]
    MissingCredential { name: &'static str },
}

/// Failures of a single generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("text generation failed: {message}")]
    Upstream { message: String },

    #[error("response format not recognized: {details}")]
    MalformedResponse { details: String },

    #[error("photo search failed: {message}")]
    Photo { message: String },
}

impl GenerateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            GenerateError::Upstream { .. } | GenerateError::MalformedResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            GenerateError::Photo { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Upstream {
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for GenerateError {
    fn from(rejection: JsonRejection) -> Self {
        GenerateError::InvalidInput {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for GenerateError {
    fn from(rejection: PathRejection) -> Self {
        GenerateError::InvalidInput {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("run failed: {}", self);
        }
        let body = Json(json!({
            "status": "error",
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let invalid = GenerateError::InvalidInput {
            message: "keyword".into(),
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let malformed = GenerateError::MalformedResponse {
            details: "no JSON object".into(),
        };
        assert_eq!(malformed.status_code(), StatusCode::BAD_GATEWAY);
        assert!(malformed.to_string().contains("format not recognized"));
    }

    #[test]
    fn error_body_is_json() {
        let response = GenerateError::Upstream {
            message: "quota".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
