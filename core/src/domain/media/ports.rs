use crate::domain::{common::entities::app_errors::CoreError, media::value_objects::ProcessedImage};

/// Pre-processing applied to uploads before they are shipped to the vision
/// model.
#[cfg_attr(test, mockall::automock)]
pub trait ImagePreprocessor: Send + Sync {
    /// Decodes `data`, resizes it so its longest side does not exceed
    /// `max_dimension` (aspect ratio preserved), and re-encodes it as JPEG at
    /// the given quality.
    fn downscale(
        &self,
        data: &[u8],
        max_dimension: u32,
        quality: u8,
    ) -> Result<ProcessedImage, CoreError>;
}
