//! Service statistics endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_classifications: u64,
    pub accuracy: f64,
    pub most_classified: &'static str,
    pub supported_formats: [&'static str; 4],
}

/// GET /stats - Fixed figures; nothing is counted.
pub async fn get_stats() -> Json<StatsResponse> {
    Json(StatsResponse {
        total_classifications: 1247,
        accuracy: 0.89,
        most_classified: "plastico",
        supported_formats: ["jpg", "jpeg", "png", "webp"],
    })
}
