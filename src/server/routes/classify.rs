//! Classification endpoint

use axum::{
    body::Bytes,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::image_classifier::interface::ImageClassifier;
use crate::image_preprocessor::preprocess;
use crate::scoring::{score, ClassifyResponse};
use crate::server::error::ApiError;
use crate::server::state::{AppState, SharedState};

const IMAGE_FIELD: &str = "image";

/// POST /classify - Classify the uploaded `image` file
pub async fn classify(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let logger = state.logger.with_namespace("classify");

    let result = match read_image_field(multipart).await {
        Ok(bytes) => {
            let worker_state = state.clone();
            tokio::task::spawn_blocking(move || run_pipeline(&worker_state, &bytes))
                .await
                .unwrap_or_else(|e| {
                    Err(ApiError::Internal(format!("classification task failed: {}", e)))
                })
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            let _ = logger.info(&format!(
                "Classified as {} ({:.3}, {} points)",
                response.category.label(),
                response.confidence,
                response.points
            ));
            Ok(Json(response))
        }
        Err(e) => {
            let _ = logger.error(&e.detail());
            Err(e)
        }
    }
}

/// Finds the first `image` part that carries a filename. Parts without a
/// filename are plain form values, not uploads.
async fn read_image_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Bytes, ApiError> {
    let mut multipart = multipart.map_err(|_| ApiError::NoImage)?;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        match field.file_name() {
            None => continue,
            Some("") => return Err(ApiError::NoFilename),
            Some(_) => {}
        }

        return field.bytes().await.map_err(upload_error);
    }

    Err(ApiError::NoImage)
}

fn upload_error(e: MultipartError) -> ApiError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::TooLarge,
        _ => ApiError::NoImage,
    }
}

fn run_pipeline(state: &AppState, bytes: &[u8]) -> Result<ClassifyResponse, ApiError> {
    let input = preprocess(bytes, state.config.input_size).map_err(ApiError::Preprocess)?;

    let classification = state
        .classifier
        .classify(input)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(score(&classification))
}
