use image::{imageops, DynamicImage};
use thiserror::Error;
use tract_onnx::prelude::tract_ndarray::Array4;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("empty upload")]
    Empty,

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decodes `bytes` into an NHWC tensor of shape `(1, size, size, 3)` with
/// channel values scaled into `[0, 1]`.
pub fn preprocess(bytes: &[u8], size: u32) -> Result<Array4<f32>, PreprocessError> {
    if bytes.is_empty() {
        return Err(PreprocessError::Empty);
    }

    let image = image::load_from_memory(bytes)?;

    Ok(image_to_tensor(&image, size))
}

pub fn image_to_tensor(image: &DynamicImage, size: u32) -> Array4<f32> {
    let rgb = imageops::resize(
        &image.to_rgb8(),
        size,
        size,
        imageops::FilterType::Triangle,
    );

    Array4::from_shape_fn((1, size as usize, size as usize, 3), |(_, y, x, c)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        pixel[c] as f32 / 255.0
    })
}
