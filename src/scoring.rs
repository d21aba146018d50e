use crate::image_classifier::interface::Classification;
use crate::waste_category::{tip_for_label, WasteCategory};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    #[serde(rename = "type")]
    pub category: WasteCategory,
    pub confidence: f64,
    pub points: i64,
    pub tips: String,
    pub recycling_locations: String,
}

/// Truncates, never rounds: 0.899 is worth 89 points.
pub fn points(confidence: f64) -> i64 {
    (confidence * 100.0) as i64
}

pub fn score(classification: &Classification) -> ClassifyResponse {
    let category = classification.category;

    ClassifyResponse {
        category,
        confidence: classification.confidence,
        points: points(classification.confidence),
        tips: tip_for_label(category.label()).to_string(),
        recycling_locations: category.recycling_locations(),
    }
}
