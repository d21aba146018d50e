use crate::config::Config;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

/// The classifier chosen at startup. Never changes for the life of the process.
pub enum Classifier {
    Model(ImageClassifierTractOnnx),
    Simulated(ImageClassifierFake),
}

impl Classifier {
    pub fn is_model_loaded(&self) -> bool {
        matches!(self, Classifier::Model(_))
    }
}

impl ImageClassifier for Classifier {
    fn classify(
        &self,
        input: Array4<f32>,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Classifier::Model(classifier) => classifier.classify(input),
            Classifier::Simulated(classifier) => classifier.classify(input),
        }
    }
}

/// Tries the model at `config.model_path`. Any failure degrades to simulated
/// classification; there is no retry.
pub fn load_classifier(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Classifier {
    let logger = logger.with_namespace("image_classifier");

    let simulated =
        || ImageClassifierFake::new(config.simulated_confidence.clone(), logger.clone());

    if !config.model_path.exists() {
        let _ = logger.info(&format!(
            "Model not found at {:?}. Using simulated classification.",
            config.model_path
        ));
        return Classifier::Simulated(simulated());
    }

    match ImageClassifierTractOnnx::new(&config.model_path, config.input_size) {
        Ok(classifier) => {
            let _ = logger.info(&format!("Model loaded from {:?}", config.model_path));
            Classifier::Model(classifier)
        }
        Err(e) => {
            let _ = logger.error(&format!(
                "Failed to load model from {:?}: {}. Using simulated classification.",
                config.model_path, e
            ));
            Classifier::Simulated(simulated())
        }
    }
}
