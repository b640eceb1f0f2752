//! Edit pipeline WASM bindings.
//!
//! Each slider change in the chrome calls [`render`] with the original
//! decoded image and the full control set; the pipeline re-runs from the
//! original every time, so edits never accumulate.

use crate::adjustments::Adjustments;
use crate::types::JsImage;
use retouch_core::pipeline;
use wasm_bindgen::prelude::*;

/// Run the full edit pipeline over the original image.
///
/// Applies brightness, contrast, blur, per-channel shifts, and the active
/// effect in the fixed stage order. The input image is not modified.
///
/// # Errors
///
/// Returns an error if any control is outside its slider range.
#[wasm_bindgen]
pub fn render(image: &JsImage, adjustments: &Adjustments) -> Result<JsImage, JsValue> {
    let buf = image.to_buffer().map_err(|e| JsValue::from_str(&e))?;
    pipeline::render(&buf, adjustments.inner())
        .map(JsImage::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the full edit pipeline with controls passed as a plain JS object.
///
/// `params` is deserialized into the core parameter set, e.g.
/// `{ brightness: 50, contrast: 0, blur: 0, red: 0, green: 0, blue: 0,
/// effect: "Grayscale" }`. Missing-field and type errors surface as JS
/// errors.
#[wasm_bindgen]
pub fn render_with_params(image: &JsImage, params: JsValue) -> Result<JsImage, JsValue> {
    let adjustments: retouch_core::Adjustments = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid adjustment params: {}", e)))?;

    let buf = image.to_buffer().map_err(|e| JsValue::from_str(&e))?;
    pipeline::render(&buf, &adjustments)
        .map(JsImage::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Expand a grayscale result to the canonical RGB display layout.
///
/// RGB images pass through unchanged. This is a presentation transform for
/// the canvas, not a pipeline stage.
#[wasm_bindgen]
pub fn to_display_rgb(image: &JsImage) -> Result<JsImage, JsValue> {
    let buf = image.to_buffer().map_err(|e| JsValue::from_str(&e))?;
    Ok(JsImage::from_buffer(buf.to_display_rgb()))
}
