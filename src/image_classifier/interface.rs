use crate::waste_category::WasteCategory;
use tract_onnx::prelude::tract_ndarray::Array4;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: WasteCategory,
    pub confidence: f64,
}

pub trait ImageClassifier {
    fn classify(
        &self,
        input: Array4<f32>,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>>;
}
