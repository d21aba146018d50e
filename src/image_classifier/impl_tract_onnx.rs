use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::waste_category::WasteCategory;
use std::path::Path;
use tract_onnx::prelude::tract_ndarray::Array4;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
}

impl ImageClassifierTractOnnx {
    /// Loads an ONNX model expecting NHWC input of `(1, input_size, input_size, 3)`.
    pub fn new(
        model_path: &Path,
        input_size: u32,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let size = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact([1, size, size, 3]).into())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        input: Array4<f32>,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.model.run(tvec!(input.into_tensor().into_tvalue()))?;
        let output = outputs[0].to_array_view::<f32>()?;
        let scores: Vec<f32> = output.iter().copied().collect();

        pick_prediction(&scores)
    }
}

/// Takes the highest score as the prediction. Scores are used as-is, so a
/// model without a softmax head reports raw logits as confidence.
pub fn pick_prediction(
    scores: &[f32],
) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
    if scores.len() != WasteCategory::ALL.len() {
        return Err(format!(
            "model produced {} scores, expected {}",
            scores.len(),
            WasteCategory::ALL.len()
        )
        .into());
    }

    if let Some(bad) = scores.iter().find(|score| !score.is_finite()) {
        return Err(format!("model produced a non-finite score: {}", bad).into());
    }

    let (index, confidence) = scores
        .iter()
        .copied()
        .enumerate()
        .skip(1)
        .fold((0, scores[0]), |best, (i, score)| {
            if score > best.1 {
                (i, score)
            } else {
                best
            }
        });

    let category = WasteCategory::from_index(index)
        .ok_or_else(|| format!("no category for output index {}", index))?;

    Ok(Classification {
        category,
        confidence: confidence as f64,
    })
}
