//! Retouch Core - Image processing library
//!
//! This crate provides the core image processing functionality for Retouch:
//! decoding uploaded JPEG/PNG bytes, the slider-driven edit pipeline
//! (brightness, contrast, blur, per-channel color, stylistic effects), and
//! JPEG re-encoding for download.

pub mod adjust;
pub mod buffer;
pub mod color;
pub mod decode;
pub mod encode;
pub mod pipeline;

mod blur;

pub use buffer::{Channels, ImageBuffer};
pub use pipeline::render;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum value for the brightness/contrast/red/green/blue sliders.
pub const SLIDER_MIN: i32 = -100;
/// Maximum value for the brightness/contrast/red/green/blue sliders.
pub const SLIDER_MAX: i32 = 100;
/// Maximum value for the blur slider.
pub const BLUR_MAX: u32 = 30;

/// An adjustment parameter outside its slider range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("{name} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

pub(crate) fn check_range(
    name: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ParamError> {
    if value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// The exclusive stylistic effect applied as the final pipeline stage.
///
/// At most one effect is active per edit. The UI exposes five independent
/// checkboxes; [`Effect::from_flags`] resolves them with first-true-wins
/// priority so the exclusivity cannot be violated downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// No effect; the per-channel adjusted image is the final result.
    #[default]
    None,
    /// Luma-weighted reduction to a single channel.
    Grayscale,
    /// Fixed 3x3 color-mixing matrix (vintage brown tint).
    Sepia,
    /// Per-sample complement (255 - s).
    Negative,
    /// Red +10, blue -10.
    Warm,
    /// Blue +10, red -10.
    Cool,
}

impl Effect {
    /// Resolve five checkbox states into a single effect.
    ///
    /// Priority order: grayscale > sepia > negative > warm > cool.
    pub fn from_flags(grayscale: bool, sepia: bool, negative: bool, warm: bool, cool: bool) -> Self {
        if grayscale {
            Effect::Grayscale
        } else if sepia {
            Effect::Sepia
        } else if negative {
            Effect::Negative
        } else if warm {
            Effect::Warm
        } else if cool {
            Effect::Cool
        } else {
            Effect::None
        }
    }
}

/// The full set of edit controls for one pipeline run.
///
/// Each interactive change re-runs the pipeline against the original upload
/// with a fresh `Adjustments`; values are never cumulative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    /// Brightness, applied to the HSV value channel (-100 to 100).
    pub brightness: i32,
    /// Contrast stretch around mid-gray (-100 to 100).
    pub contrast: i32,
    /// Gaussian blur kernel size (0 to 30, even values promoted to odd).
    pub blur: u32,
    /// Red channel shift (-100 to 100).
    pub red: i32,
    /// Green channel shift (-100 to 100).
    pub green: i32,
    /// Blue channel shift (-100 to 100).
    pub blue: i32,
    /// Exclusive stylistic effect.
    pub effect: Effect,
}

impl Adjustments {
    /// Create a new Adjustments with all controls neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all controls are at their neutral defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check every control against its slider range.
    pub fn validate(&self) -> Result<(), ParamError> {
        let min = SLIDER_MIN as i64;
        let max = SLIDER_MAX as i64;
        check_range("brightness", self.brightness as i64, min, max)?;
        check_range("contrast", self.contrast as i64, min, max)?;
        check_range("blur", self.blur as i64, 0, BLUR_MAX as i64)?;
        check_range("red", self.red as i64, min, max)?;
        check_range("green", self.green as i64, min, max)?;
        check_range("blue", self.blue as i64, min, max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustments_default() {
        let adj = Adjustments::new();
        assert!(adj.is_default());
        assert_eq!(adj.effect, Effect::None);
    }

    #[test]
    fn test_adjustments_not_default() {
        let mut adj = Adjustments::new();
        adj.brightness = 50;
        assert!(!adj.is_default());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let adj = Adjustments {
            brightness: -100,
            contrast: 100,
            blur: 30,
            red: 100,
            green: -100,
            blue: 0,
            effect: Effect::Sepia,
        };
        assert!(adj.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut adj = Adjustments::new();
        adj.contrast = 131;
        let err = adj.validate().unwrap_err();
        assert_eq!(
            err,
            ParamError::OutOfRange {
                name: "contrast",
                value: 131,
                min: -100,
                max: 100,
            }
        );
    }

    #[test]
    fn test_validate_rejects_blur_over_max() {
        let mut adj = Adjustments::new();
        adj.blur = 31;
        assert!(adj.validate().is_err());
    }

    #[test]
    fn test_effect_priority_first_true_wins() {
        assert_eq!(
            Effect::from_flags(true, true, true, true, true),
            Effect::Grayscale
        );
        assert_eq!(
            Effect::from_flags(false, true, true, true, true),
            Effect::Sepia
        );
        assert_eq!(
            Effect::from_flags(false, false, true, true, true),
            Effect::Negative
        );
        assert_eq!(
            Effect::from_flags(false, false, false, true, true),
            Effect::Warm
        );
        assert_eq!(
            Effect::from_flags(false, false, false, false, true),
            Effect::Cool
        );
        assert_eq!(
            Effect::from_flags(false, false, false, false, false),
            Effect::None
        );
    }

    #[test]
    fn test_param_error_display() {
        let err = ParamError::OutOfRange {
            name: "brightness",
            value: 101,
            min: -100,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "brightness out of range: 101 (allowed -100..=100)"
        );
    }
}
