//! OCR stage: image loading and the recognizer seam.

#[cfg(feature = "native")]
mod engine;

#[cfg(feature = "native")]
pub use engine::PureOcrEngine;

use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeadscanError, OcrError};
use crate::models::config::OcrConfig;

/// A recognized text box with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of OCR processing on an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrResult {
    /// Recognized text boxes.
    pub boxes: Vec<TextBox>,

    /// Full text (boxes joined with newlines).
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

impl OcrResult {
    /// Wrap already-recognized text, e.g. a saved transcript.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sort boxes by reading order (top-to-bottom, left-to-right).
    pub fn sort_by_reading_order(&mut self) {
        self.boxes.sort_by(|a, b| {
            let (ax, ay, _, _) = a.rect();
            let (bx, by, _, _) = b.rect();

            // Group by approximate vertical position (within 20 pixels)
            let row_a = (ay / 20.0) as i32;
            let row_b = (by / 20.0) as i32;

            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        self.text = self
            .boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

/// Turns a decoded image into text.
pub trait TextRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, OcrError>;
}

/// Decode an image file and convert it to RGB8.
pub fn load_image(path: &Path) -> Result<DynamicImage, LeadscanError> {
    let image = image::open(path)?;
    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

/// Create the OCR engine compiled into this build.
#[cfg(feature = "native")]
pub fn create_engine(config: &OcrConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
    Ok(Box::new(PureOcrEngine::from_config(config)?))
}

/// Create the OCR engine compiled into this build.
#[cfg(not(feature = "native"))]
pub fn create_engine(_config: &OcrConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
    Err(OcrError::Unavailable(
        "built without the `native` feature".to_string(),
    ))
}
