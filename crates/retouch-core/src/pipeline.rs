//! Edit pipeline composer.
//!
//! One user interaction triggers one full re-run against the original
//! uploaded buffer; adjustments never accumulate across runs. The stage
//! order is fixed:
//!
//! 1. Brightness
//! 2. Contrast
//! 3. Blur
//! 4. Per-channel RGB shift
//! 5. At most one stylistic effect
//!
//! No stage is skipped structurally; each no-ops on its neutral value. There
//! is no retry or partial-failure handling: the first error aborts the edit,
//! and because the original is only borrowed it survives failed edits intact.

use crate::adjust;
use crate::buffer::ImageBuffer;
use crate::{Adjustments, Effect, ParamError};

/// Run the full pipeline over `original` and return the adjusted buffer.
///
/// Validates every control against its slider range up front, then applies
/// the fixed stage order. Only the grayscale effect changes the channel
/// count of the result.
pub fn render(original: &ImageBuffer, adjustments: &Adjustments) -> Result<ImageBuffer, ParamError> {
    adjustments.validate()?;

    let buf = adjust::adjust_brightness(original, adjustments.brightness)?;
    let buf = adjust::adjust_contrast(&buf, adjustments.contrast)?;
    let buf = adjust::apply_blur(&buf, adjustments.blur)?;
    let buf = adjust::adjust_channels(&buf, adjustments.red, adjustments.green, adjustments.blue)?;

    Ok(match adjustments.effect {
        Effect::None => buf,
        Effect::Grayscale => adjust::apply_grayscale(&buf),
        Effect::Sepia => adjust::apply_sepia(&buf),
        Effect::Negative => adjust::apply_negative(&buf),
        Effect::Warm => adjust::apply_warm(&buf),
        Effect::Cool => adjust::apply_cool(&buf),
    })
}
