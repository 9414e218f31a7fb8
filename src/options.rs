use crate::error::{Result, SpcError};
use crate::imgproc::{resize::ResizeFilter, DitheringMethod};

/// Exponent of the sRGB-to-linear power law.
pub const DEFAULT_GAMMA: f32 = 2.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Linearize perceptual intensities before dithering.
    pub linear_correction: bool,
    pub gamma: f32,
    pub dithering: DitheringMethod,
    pub filter: ResizeFilter,
    /// PCW pixels are twice as tall as they are wide; double the preview
    /// height so it is not squashed on a square-pixel display.
    pub preview_double_height: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            linear_correction: false,
            gamma: DEFAULT_GAMMA,
            dithering: DitheringMethod::FloydSteinberg,
            filter: ResizeFilter::Triangle,
            preview_double_height: true,
        }
    }
}

impl ConvertOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(SpcError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}
