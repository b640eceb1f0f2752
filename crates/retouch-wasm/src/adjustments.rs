//! Adjustment controls WASM bindings.
//!
//! Exposes the `Adjustments` parameter set to TypeScript: six integer
//! sliders plus the five mutually-exclusive effect checkboxes, which are
//! resolved through the core's first-true-wins priority.

use retouch_core::Effect;
use wasm_bindgen::prelude::*;

/// Edit controls wrapper for JavaScript
#[wasm_bindgen]
pub struct Adjustments {
    inner: retouch_core::Adjustments,
}

#[wasm_bindgen]
impl Adjustments {
    /// Create new adjustments with all controls neutral
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: retouch_core::Adjustments::new(),
        }
    }

    /// Get brightness value
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> i32 {
        self.inner.brightness
    }

    /// Set brightness value (-100 to 100)
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: i32) {
        self.inner.brightness = value;
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> i32 {
        self.inner.contrast
    }

    /// Set contrast value (-100 to 100)
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: i32) {
        self.inner.contrast = value;
    }

    /// Get blur radius
    #[wasm_bindgen(getter)]
    pub fn blur(&self) -> u32 {
        self.inner.blur
    }

    /// Set blur radius (0 to 30)
    #[wasm_bindgen(setter)]
    pub fn set_blur(&mut self, value: u32) {
        self.inner.blur = value;
    }

    /// Get red channel shift
    #[wasm_bindgen(getter)]
    pub fn red(&self) -> i32 {
        self.inner.red
    }

    /// Set red channel shift (-100 to 100)
    #[wasm_bindgen(setter)]
    pub fn set_red(&mut self, value: i32) {
        self.inner.red = value;
    }

    /// Get green channel shift
    #[wasm_bindgen(getter)]
    pub fn green(&self) -> i32 {
        self.inner.green
    }

    /// Set green channel shift (-100 to 100)
    #[wasm_bindgen(setter)]
    pub fn set_green(&mut self, value: i32) {
        self.inner.green = value;
    }

    /// Get blue channel shift
    #[wasm_bindgen(getter)]
    pub fn blue(&self) -> i32 {
        self.inner.blue
    }

    /// Set blue channel shift (-100 to 100)
    #[wasm_bindgen(setter)]
    pub fn set_blue(&mut self, value: i32) {
        self.inner.blue = value;
    }

    /// Resolve the five effect checkboxes into the single active effect.
    ///
    /// Priority order: grayscale > sepia > negative > warm > cool.
    pub fn set_effect_flags(
        &mut self,
        grayscale: bool,
        sepia: bool,
        negative: bool,
        warm: bool,
        cool: bool,
    ) {
        self.inner.effect = Effect::from_flags(grayscale, sepia, negative, warm, cool);
    }

    /// Clear the active effect
    pub fn clear_effect(&mut self) {
        self.inner.effect = Effect::None;
    }

    /// Name of the active effect ("none" when no checkbox is set)
    pub fn effect_name(&self) -> String {
        match self.inner.effect {
            Effect::None => "none",
            Effect::Grayscale => "grayscale",
            Effect::Sepia => "sepia",
            Effect::Negative => "negative",
            Effect::Warm => "warm",
            Effect::Cool => "cool",
        }
        .to_string()
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjustments {
    /// Access the wrapped core adjustments.
    pub(crate) fn inner(&self) -> &retouch_core::Adjustments {
        &self.inner
    }
}
