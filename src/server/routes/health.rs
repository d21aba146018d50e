//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::SharedState;
use crate::waste_category::available_labels;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub available_classes: Vec<&'static str>,
}

/// GET /health - Reports whether a trained model is serving requests
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.classifier.is_model_loaded(),
        available_classes: available_labels(),
    })
}
