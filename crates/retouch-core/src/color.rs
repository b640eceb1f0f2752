//! 8-bit color space conversions used by the transform pipeline.
//!
//! The brightness stage shifts only the HSV value channel, so the RGB <-> HSV
//! round trip is implemented here as explicit, tested functions rather than
//! through a library's internal conventions: rounding at the channel
//! boundaries is what decides whether the saturation law holds.
//!
//! The 8-bit HSV convention stores hue halved (H in 0..180) so it fits a u8;
//! S and V use the full 0..255 range.

/// BT.601 coefficient for red in the grayscale reduction.
pub const LUMA_R: f32 = 0.299;

/// BT.601 coefficient for green in the grayscale reduction.
pub const LUMA_G: f32 = 0.587;

/// BT.601 coefficient for blue in the grayscale reduction.
pub const LUMA_B: f32 = 0.114;

/// Calculate 8-bit luma from 8-bit RGB using BT.601 coefficients.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    lum.round().clamp(0.0, 255.0) as u8
}

/// Convert an 8-bit RGB pixel to 8-bit HSV (H in 0..180, S and V in 0..255).
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (v - min) as f32;

    let s = if v == 0 {
        0
    } else {
        (diff * 255.0 / v as f32).round() as u8
    };

    let h_deg = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g as f32 - b as f32) / diff
    } else if v == g {
        120.0 + 60.0 * (b as f32 - r as f32) / diff
    } else {
        240.0 + 60.0 * (r as f32 - g as f32) / diff
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    // Halved hue wraps at 180 so 359.x does not round out of range.
    let mut h = (h_deg / 2.0).round() as u16;
    if h >= 180 {
        h -= 180;
    }
    (h as u8, s, v)
}

/// Convert an 8-bit HSV pixel (H in 0..180) back to 8-bit RGB.
#[inline]
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> (u8, u8, u8) {
    if s == 0 {
        return (v, v, v);
    }

    let sector = (h as f32) * 2.0 / 60.0;
    let i = sector.floor() as i32 % 6;
    let f = sector - sector.floor();
    let s_f = s as f32 / 255.0;
    let v_f = v as f32;

    let p = v_f * (1.0 - s_f);
    let q = v_f * (1.0 - s_f * f);
    let t = v_f * (1.0 - s_f * (1.0 - f));

    let (r, g, b) = match i {
        0 => (v_f, t, p),
        1 => (q, v_f, p),
        2 => (p, v_f, t),
        3 => (p, q, v_f),
        4 => (t, p, v_f),
        _ => (v_f, p, q),
    };
    (r.round() as u8, g.round() as u8, b.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert_eq!(luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 64, 127, 192, 255] {
            let lum = luma_u8(v, v, v);
            assert!(
                (lum as i32 - v as i32).abs() <= 1,
                "Gray {} should produce luma ~{}, got {}",
                v,
                v,
                lum
            );
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert!((luma_u8(255, 0, 0) as i32 - 76).abs() <= 1);
        assert!((luma_u8(0, 255, 0) as i32 - 150).abs() <= 1);
        assert!((luma_u8(0, 0, 255) as i32 - 29).abs() <= 1);
    }

    #[test]
    fn test_hsv_gray_has_zero_saturation() {
        for v in [0u8, 1, 127, 254, 255] {
            assert_eq!(rgb_to_hsv(v, v, v), (0, 0, v));
        }
    }

    #[test]
    fn test_hsv_primaries() {
        // Red = 0 deg, Green = 120 deg, Blue = 240 deg (stored halved).
        assert_eq!(rgb_to_hsv(255, 0, 0), (0, 255, 255));
        assert_eq!(rgb_to_hsv(0, 255, 0), (60, 255, 255));
        assert_eq!(rgb_to_hsv(0, 0, 255), (120, 255, 255));
    }

    #[test]
    fn test_hsv_negative_hue_wraps() {
        // Magenta-ish: hue sits just below 360 degrees before wrapping.
        let (h, _, _) = rgb_to_hsv(255, 0, 10);
        assert!(h >= 178 || h <= 2, "hue {} should sit near the wrap", h);
    }

    #[test]
    fn test_hsv_round_trip_exact_for_primaries() {
        for rgb in [(255u8, 0u8, 0u8), (0, 255, 0), (0, 0, 255), (255, 255, 0)] {
            let (h, s, v) = rgb_to_hsv(rgb.0, rgb.1, rgb.2);
            assert_eq!(hsv_to_rgb(h, s, v), rgb);
        }
    }

    #[test]
    fn test_hsv_round_trip_tolerance() {
        // Hue is quantized to 2 degrees and saturation to 1/255, so the
        // round trip is close but not exact for arbitrary colors.
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let (h, s, v) = rgb_to_hsv(r as u8, g as u8, b as u8);
                    let (r2, g2, b2) = hsv_to_rgb(h, s, v);
                    assert!(
                        (r as i32 - r2 as i32).abs() <= 4
                            && (g as i32 - g2 as i32).abs() <= 4
                            && (b as i32 - b2 as i32).abs() <= 4,
                        "round trip too lossy for ({}, {}, {}) -> ({}, {}, {})",
                        r,
                        g,
                        b,
                        r2,
                        g2,
                        b2
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsv_value_is_max_channel() {
        let (_, _, v) = rgb_to_hsv(10, 200, 30);
        assert_eq!(v, 200);
    }
}
