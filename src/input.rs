// Pure helpers for browser-provided pointer and canvas geometry.

use field_core::surface_to_ndc;

pub const PIXEL_RATIO_MIN: f64 = 1.0;
pub const PIXEL_RATIO_MAX: f64 = 2.0;

/// Latest pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: [f32; 2],
}

impl PointerState {
    /// Position relative to the canvas' top-left corner, in CSS pixels.
    /// An empty canvas keeps the last position.
    pub fn set_from_css(&mut self, x_css: f32, y_css: f32, width_css: f32, height_css: f32) {
        if let Some(ndc) = surface_to_ndc(x_css, y_css, width_css, height_css) {
            self.ndc = ndc.to_array();
        }
    }
}

#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(PIXEL_RATIO_MIN, PIXEL_RATIO_MAX)
    } else {
        PIXEL_RATIO_MIN
    }
}

/// Canvas backing-store size for a CSS size at the given device pixel ratio.
#[inline]
pub fn backing_size(width_css: f64, height_css: f64, dpr: f64) -> (u32, u32) {
    let ratio = clamp_pixel_ratio(dpr);
    let w = (width_css.max(0.0) * ratio) as u32;
    let h = (height_css.max(0.0) * ratio) as u32;
    (w.max(1), h.max(1))
}
