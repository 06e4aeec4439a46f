use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::{ports::ImagePreprocessor, value_objects::ProcessedImage},
};

/// Downscales uploads with the `image` crate and re-encodes them as JPEG.
#[derive(Debug, Clone, Default)]
pub struct JpegImagePreprocessor;

impl JpegImagePreprocessor {
    pub fn new() -> Self {
        Self
    }
}

impl ImagePreprocessor for JpegImagePreprocessor {
    fn downscale(
        &self,
        data: &[u8],
        max_dimension: u32,
        quality: u8,
    ) -> Result<ProcessedImage, CoreError> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| CoreError::InvalidInput(format!("unreadable image upload: {e}")))?;

        let resized = if decoded.width().max(decoded.height()) > max_dimension {
            decoded.resize(max_dimension, max_dimension, FilterType::Triangle)
        } else {
            decoded
        };

        // JPEG has no alpha channel.
        let rgb = resized.to_rgb8();
        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| CoreError::ImageProcessing(format!("jpeg encoding failed: {e}")))?;

        Ok(ProcessedImage {
            data: buffer.into_inner(),
            mime_type: "image/jpeg".to_string(),
            width: rgb.width(),
            height: rgb.height(),
        })
    }
}
