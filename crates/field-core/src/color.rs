//! Hex color tokens and the site palette.

use crate::constants::{
    PALETTE_BACKGROUND, PALETTE_PARTICLES, PALETTE_PRIMARY, PALETTE_SECONDARY,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color token {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color token {0:?} must have 6 hex digits")]
    BadLength(String),
    #[error("color token {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// sRGB color with components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` token.
    pub fn from_hex(token: &str) -> Result<Self, ColorError> {
        let digits = token
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(token.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::BadLength(token.to_string()));
        }
        // from_str_radix alone would let a sign through ("+F")
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(token.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::BadDigit(token.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert from sRGB encoding to linear light, as the GPU blends in linear space.
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: 1.0,
        }
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub particles: Rgb,
}

impl Palette {
    pub fn from_tokens() -> Result<Self, ColorError> {
        Ok(Self {
            background: Rgb::from_hex(PALETTE_BACKGROUND)?,
            primary: Rgb::from_hex(PALETTE_PRIMARY)?,
            secondary: Rgb::from_hex(PALETTE_SECONDARY)?,
            particles: Rgb::from_hex(PALETTE_PARTICLES)?,
        })
    }
}
