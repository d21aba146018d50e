//! Errors surfaced to HTTP callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::image_preprocessor::PreprocessError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Nenhuma imagem enviada")]
    NoImage,

    #[error("Nenhuma imagem selecionada")]
    NoFilename,

    #[error("Imagem muito grande")]
    TooLarge,

    #[error("Erro ao processar imagem")]
    Preprocess(#[source] PreprocessError),

    /// Carries detail for the log only; callers see the generic message.
    #[error("Erro interno do servidor")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoImage | ApiError::NoFilename | ApiError::Preprocess(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Preprocess(e) => format!("{}: {}", self, e),
            ApiError::Internal(detail) => format!("{}: {}", self, detail),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, json) =
            body_json(ApiError::Internal("model produced 3 scores".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Erro interno do servidor" }));
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_request() {
        let (status, json) = body_json(ApiError::NoImage).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Nenhuma imagem enviada");

        let (status, json) = body_json(ApiError::NoFilename).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Nenhuma imagem selecionada");

        let (status, json) = body_json(ApiError::Preprocess(PreprocessError::Empty)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Erro ao processar imagem");
    }

    #[test]
    fn test_detail_keeps_cause() {
        let error = ApiError::Internal("task panicked".to_string());
        assert_eq!(error.detail(), "Erro interno do servidor: task panicked");

        let error = ApiError::Preprocess(PreprocessError::Empty);
        assert_eq!(error.detail(), "Erro ao processar imagem: empty upload");
    }
}
