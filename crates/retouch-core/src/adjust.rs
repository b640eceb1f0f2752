//! Pixel transform library.
//!
//! Each function maps an input buffer (plus scalar controls) to a new buffer
//! of the same width and height; only [`apply_grayscale`] changes the channel
//! count. All arithmetic saturates to the 0..=255 sample range, inputs are
//! never mutated, and slider-driven transforms reject out-of-range values
//! with [`ParamError`].

use crate::blur::gaussian_blur;
use crate::buffer::{Channels, ImageBuffer};
use crate::color::{hsv_to_rgb, luma_u8, rgb_to_hsv};
use crate::{check_range, ParamError, BLUR_MAX, SLIDER_MAX, SLIDER_MIN};

/// Sample shift applied by the warm and cool tone effects.
const TONE_SHIFT: u8 = 10;

/// Color-mixing matrix for the sepia effect; rows produce output R, G, B
/// from input (R, G, B).
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Shift a sample by a signed delta with saturation.
///
/// Callers validate the slider range, so `|delta|` always fits in a u8.
#[inline]
fn shift_sample(sample: u8, delta: i32) -> u8 {
    if delta >= 0 {
        sample.saturating_add(delta as u8)
    } else {
        sample.saturating_sub((-delta) as u8)
    }
}

/// Adjust brightness by shifting the HSV value channel.
///
/// The pixel is converted to HSV, the value channel is shifted by `amount`
/// with saturation, and the pixel is converted back. Hue and saturation are
/// carried through untouched, so only perceived lightness changes.
pub fn adjust_brightness(buf: &ImageBuffer, amount: i32) -> Result<ImageBuffer, ParamError> {
    check_range(
        "brightness",
        amount as i64,
        SLIDER_MIN as i64,
        SLIDER_MAX as i64,
    )?;
    if amount == 0 {
        return Ok(buf.clone());
    }
    debug_assert_eq!(buf.channels, Channels::Rgb, "brightness requires RGB input");

    let mut pixels = Vec::with_capacity(buf.pixels.len());
    for chunk in buf.pixels.chunks_exact(3) {
        let (h, s, v) = rgb_to_hsv(chunk[0], chunk[1], chunk[2]);
        let (r, g, b) = hsv_to_rgb(h, s, shift_sample(v, amount));
        pixels.extend_from_slice(&[r, g, b]);
    }
    Ok(ImageBuffer::new_rgb(buf.width, buf.height, pixels))
}

/// Adjust contrast with a linear stretch around mid-gray (127).
///
/// Uses the factor `f = 131(amount + 127) / (127(131 - amount))` and maps
/// each sample to `f * s + 127(1 - f)`, clamped. The formula has a pole at
/// amount = 131; the enforced slider bound of 100 keeps it unreachable.
pub fn adjust_contrast(buf: &ImageBuffer, amount: i32) -> Result<ImageBuffer, ParamError> {
    check_range(
        "contrast",
        amount as i64,
        SLIDER_MIN as i64,
        SLIDER_MAX as i64,
    )?;
    if amount == 0 {
        return Ok(buf.clone());
    }

    let f = 131.0 * (amount as f32 + 127.0) / (127.0 * (131.0 - amount as f32));
    let offset = 127.0 * (1.0 - f);

    let pixels = buf
        .pixels
        .iter()
        .map(|&s| (f * s as f32 + offset).round().clamp(0.0, 255.0) as u8)
        .collect();
    Ok(ImageBuffer::new(buf.width, buf.height, buf.channels, pixels))
}

/// Apply a Gaussian blur with a square kernel of side `radius`.
///
/// Even radii are promoted to the next odd value because the kernel needs a
/// center sample; sigma is derived from the kernel size.
pub fn apply_blur(buf: &ImageBuffer, radius: u32) -> Result<ImageBuffer, ParamError> {
    check_range("blur", radius as i64, 0, BLUR_MAX as i64)?;
    if radius == 0 {
        return Ok(buf.clone());
    }

    let ksize = if radius % 2 == 1 { radius } else { radius + 1 };
    Ok(gaussian_blur(buf, ksize as usize))
}

/// Shift the red, green, and blue planes independently.
///
/// Positive deltas add with saturation, negative deltas subtract, zero
/// leaves the plane untouched. Planes are recombined in their original
/// order.
pub fn adjust_channels(
    buf: &ImageBuffer,
    red: i32,
    green: i32,
    blue: i32,
) -> Result<ImageBuffer, ParamError> {
    let min = SLIDER_MIN as i64;
    let max = SLIDER_MAX as i64;
    check_range("red", red as i64, min, max)?;
    check_range("green", green as i64, min, max)?;
    check_range("blue", blue as i64, min, max)?;
    if red == 0 && green == 0 && blue == 0 {
        return Ok(buf.clone());
    }
    debug_assert_eq!(buf.channels, Channels::Rgb, "channel shift requires RGB input");

    let mut pixels = Vec::with_capacity(buf.pixels.len());
    for chunk in buf.pixels.chunks_exact(3) {
        pixels.push(shift_sample(chunk[0], red));
        pixels.push(shift_sample(chunk[1], green));
        pixels.push(shift_sample(chunk[2], blue));
    }
    Ok(ImageBuffer::new_rgb(buf.width, buf.height, pixels))
}

/// Reduce to a single luma channel (BT.601 weights).
pub fn apply_grayscale(buf: &ImageBuffer) -> ImageBuffer {
    debug_assert_eq!(buf.channels, Channels::Rgb, "grayscale requires RGB input");

    let pixels = buf
        .pixels
        .chunks_exact(3)
        .map(|chunk| luma_u8(chunk[0], chunk[1], chunk[2]))
        .collect();
    ImageBuffer::new_luma(buf.width, buf.height, pixels)
}

/// Apply the sepia color-mixing matrix per pixel, saturating each output.
pub fn apply_sepia(buf: &ImageBuffer) -> ImageBuffer {
    debug_assert_eq!(buf.channels, Channels::Rgb, "sepia requires RGB input");

    let mut pixels = Vec::with_capacity(buf.pixels.len());
    for chunk in buf.pixels.chunks_exact(3) {
        let (r, g, b) = (chunk[0] as f32, chunk[1] as f32, chunk[2] as f32);
        for row in &SEPIA_MATRIX {
            let mixed = row[0] * r + row[1] * g + row[2] * b;
            pixels.push(mixed.round().clamp(0.0, 255.0) as u8);
        }
    }
    ImageBuffer::new_rgb(buf.width, buf.height, pixels)
}

/// Complement every sample: `255 - s`. Applying it twice restores the input.
pub fn apply_negative(buf: &ImageBuffer) -> ImageBuffer {
    let pixels = buf.pixels.iter().map(|&s| 255 - s).collect();
    ImageBuffer::new(buf.width, buf.height, buf.channels, pixels)
}

/// Warm tone: red up, blue down, green untouched.
pub fn apply_warm(buf: &ImageBuffer) -> ImageBuffer {
    debug_assert_eq!(buf.channels, Channels::Rgb, "warm tone requires RGB input");

    let mut pixels = Vec::with_capacity(buf.pixels.len());
    for chunk in buf.pixels.chunks_exact(3) {
        pixels.push(chunk[0].saturating_add(TONE_SHIFT));
        pixels.push(chunk[1]);
        pixels.push(chunk[2].saturating_sub(TONE_SHIFT));
    }
    ImageBuffer::new_rgb(buf.width, buf.height, pixels)
}

/// Cool tone: blue up, red down, green untouched.
pub fn apply_cool(buf: &ImageBuffer) -> ImageBuffer {
    debug_assert_eq!(buf.channels, Channels::Rgb, "cool tone requires RGB input");

    let mut pixels = Vec::with_capacity(buf.pixels.len());
    for chunk in buf.pixels.chunks_exact(3) {
        pixels.push(chunk[0].saturating_sub(TONE_SHIFT));
        pixels.push(chunk[1]);
        pixels.push(chunk[2].saturating_add(TONE_SHIFT));
    }
    ImageBuffer::new_rgb(buf.width, buf.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for small RGB buffers with arbitrary samples.
    fn rgb_buffer_strategy() -> impl Strategy<Value = ImageBuffer> {
        (1u32..=8, 1u32..=8)
            .prop_flat_map(|(w, h)| {
                let len = (w * h * 3) as usize;
                (Just(w), Just(h), prop::collection::vec(any::<u8>(), len..=len))
            })
            .prop_map(|(w, h, pixels)| ImageBuffer::new_rgb(w, h, pixels))
    }

    proptest! {
        /// Property: applying negative twice restores the input exactly.
        #[test]
        fn prop_negative_involution(buf in rgb_buffer_strategy()) {
            prop_assert_eq!(apply_negative(&apply_negative(&buf)), buf);
        }

        /// Property: every transform keeps width, height, and buffer length.
        #[test]
        fn prop_transforms_preserve_dimensions(
            buf in rgb_buffer_strategy(),
            brightness in -100i32..=100,
            contrast in -100i32..=100,
            radius in 0u32..=30,
        ) {
            for out in [
                adjust_brightness(&buf, brightness).unwrap(),
                adjust_contrast(&buf, contrast).unwrap(),
                apply_blur(&buf, radius).unwrap(),
                apply_sepia(&buf),
                apply_warm(&buf),
                apply_cool(&buf),
            ] {
                prop_assert_eq!(out.width, buf.width);
                prop_assert_eq!(out.height, buf.height);
                prop_assert_eq!(out.byte_size(), buf.byte_size());
            }
            let gray = apply_grayscale(&buf);
            prop_assert_eq!(gray.width, buf.width);
            prop_assert_eq!(gray.height, buf.height);
            prop_assert_eq!(gray.byte_size(), buf.pixel_count() as usize);
        }

        /// Property: brightness leaves hue and saturation untouched.
        #[test]
        fn prop_brightness_only_moves_value(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            amount in 1i32..=100,
        ) {
            use crate::color::rgb_to_hsv;

            let buf = ImageBuffer::new_rgb(1, 1, vec![r, g, b]);
            let out = adjust_brightness(&buf, amount).unwrap();

            let (_, _, v_in) = rgb_to_hsv(r, g, b);
            let (_, _, v_out) = rgb_to_hsv(out.pixels[0], out.pixels[1], out.pixels[2]);
            let expected = v_in.saturating_add(amount as u8);
            // One count of slack for the HSV round trip.
            prop_assert!((v_out as i32 - expected as i32).abs() <= 1,
                "value {} -> {} expected {}", v_in, v_out, expected);
        }

        /// Property: channel shifts stay within the sample range and never
        /// cross the direction of the shift.
        #[test]
        fn prop_channel_shift_direction(
            buf in rgb_buffer_strategy(),
            red in -100i32..=100,
            green in -100i32..=100,
            blue in -100i32..=100,
        ) {
            let out = adjust_channels(&buf, red, green, blue).unwrap();
            for (chunk_in, chunk_out) in
                buf.pixels.chunks_exact(3).zip(out.pixels.chunks_exact(3))
            {
                for (c, delta) in [red, green, blue].into_iter().enumerate() {
                    let before = chunk_in[c] as i32;
                    let after = chunk_out[c] as i32;
                    if delta >= 0 {
                        prop_assert!(after >= before && after <= before + delta);
                    } else {
                        prop_assert!(after <= before && after >= before + delta);
                    }
                }
            }
        }
    }
}
