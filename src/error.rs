use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::input::{keys::KeyError, InjectError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("Unknown {device} action: {action}")]
    UnknownAction {
        device: &'static str,
        action: String,
    },

    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    #[error("Input injection failed: {0}")]
    Injection(#[from] InjectError),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl actix_web::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidParameter(_)
            | ServerError::UnknownAction { .. }
            | ServerError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            ServerError::Injection(_) | ServerError::IOError(_) | ServerError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // Every rejected request passes through here, so this is where it is logged.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{self}");
        } else {
            warn!(status = status.as_u16(), "{self}");
        }
        HttpResponse::build(status).json(json!({
            "status": "error",
            "error": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, ResponseError};
    use serde_json::Value;

    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let unknown = ServerError::UnknownAction {
            device: "keyboard",
            action: "sing".into(),
        };
        assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown.to_string(), "Unknown keyboard action: sing");
        assert_eq!(
            ServerError::InvalidKey(KeyError::Empty).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn injection_errors_are_server_errors() {
        let err = ServerError::from(InjectError::Failed("no display".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Input injection failed: no display");
    }

    #[actix_web::test]
    async fn error_body_shape() {
        let response = ServerError::InvalidParameter("No key provided".into()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "No key provided");
    }
}
