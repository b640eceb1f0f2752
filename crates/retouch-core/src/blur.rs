//! Separable Gaussian convolution backing the blur stage.

use crate::buffer::ImageBuffer;

/// Build a normalized 1D Gaussian kernel of odd size `ksize`.
///
/// Sigma is derived from the kernel size with the zero-sigma convention
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`, so callers only choose a size.
pub(crate) fn gaussian_kernel(ksize: usize) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1, "Kernel size must be odd");
    let sigma = 0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (ksize / 2) as isize;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-(i * i) as f32 / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Reflect an out-of-bounds coordinate back into `0..len` without repeating
/// the edge sample (reflect-101: -1 maps to 1, len maps to len - 2).
#[inline]
fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let mut i = index;
    // Kernels wider than the image bounce more than once.
    loop {
        if i < 0 {
            i = -i;
        } else if i >= len {
            i = 2 * (len - 1) - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve a buffer with a square Gaussian kernel of side `ksize`,
/// applied as two separable 1D passes. Works on any channel layout.
pub(crate) fn gaussian_blur(buf: &ImageBuffer, ksize: usize) -> ImageBuffer {
    let kernel = gaussian_kernel(ksize);
    let half = (ksize / 2) as isize;
    let width = buf.width as usize;
    let height = buf.height as usize;
    let ch = buf.channels.count();

    // Horizontal pass into a float intermediate to avoid double rounding.
    let mut horizontal = vec![0.0f32; buf.pixels.len()];
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            for c in 0..ch {
                let mut acc = 0.0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half, width);
                    acc += weight * buf.pixels[(row + sx) * ch + c] as f32;
                }
                horizontal[(row + x) * ch + c] = acc;
            }
        }
    }

    // Vertical pass back to u8.
    let mut pixels = vec![0u8; buf.pixels.len()];
    for y in 0..height {
        for x in 0..width {
            for c in 0..ch {
                let mut acc = 0.0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - half, height);
                    acc += weight * horizontal[(sy * width + x) * ch + c];
                }
                pixels[(y * width + x) * ch + c] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    ImageBuffer::new(buf.width, buf.height, buf.channels, pixels)
}
