use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedConfidence {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    /// Edge length of the square image the classifier consumes.
    pub input_size: u32,
    pub simulated_confidence: SimulatedConfidence,
    /// Upload size cap. `None` accepts any size.
    pub body_limit_bytes: Option<usize>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from("models/waste_classifier.onnx"),
            input_size: 224,
            simulated_confidence: SimulatedConfidence {
                min: 0.7,
                max: 0.95,
            },
            body_limit_bytes: None,
            logger_timezone: brasilia_time(),
        }
    }
}

fn brasilia_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(3 * 3600).unwrap()
}
