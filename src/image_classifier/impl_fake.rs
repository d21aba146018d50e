use crate::config::SimulatedConfidence;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::waste_category::WasteCategory;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

/// Stands in for a trained model: picks a category uniformly at random and
/// reports a confidence drawn from the configured range.
pub struct ImageClassifierFake {
    confidence: SimulatedConfidence,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(confidence: SimulatedConfidence, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            confidence,
            logger: logger.with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        _input: Array4<f32>,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, WasteCategory::ALL.len())?;

        let confidence_dist =
            Uniform::new_inclusive(self.confidence.min, self.confidence.max)?;

        let classification = Classification {
            category: WasteCategory::ALL[index_dist.sample(&mut rng)],
            confidence: confidence_dist.sample(&mut rng),
        };

        let _ = self
            .logger
            .info(&format!("Simulated classification: {:?}", classification));

        Ok(classification)
    }
}
