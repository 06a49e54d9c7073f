//! Color types and conversions
//!
//! - **Color**: normalized float RGBA, the library's semantic color
//! - **PackedColor**: 32-bit ARGB, 8 bits per channel, the form
//!   Direct3D-class backends read from vertex buffers
//! - **PrimColor**: the per-vertex color record, carrying both

use bytemuck::{Pod, Zeroable};

/// Normalized float RGBA color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// 32-bit packed ARGB color (alpha in the high byte)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct PackedColor(pub u32);

/// Quantize one normalized channel to 0..=255
fn quantize(channel: f32) -> u32 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u32
}

impl PackedColor {
    /// Pack a normalized color; channels outside [0, 1] are clamped
    pub fn from_color(color: Color) -> Self {
        Self(
            (quantize(color.a) << 24)
                | (quantize(color.r) << 16)
                | (quantize(color.g) << 8)
                | quantize(color.b),
        )
    }

    /// Expand back to normalized floats
    ///
    /// This is a forward projection of the quantized value: the result is
    /// within 1/255 per channel of whatever was packed, not the original.
    pub fn to_color(self) -> Color {
        Color {
            r: self.r() as f32 / 255.0,
            g: self.g() as f32 / 255.0,
            b: self.b() as f32 / 255.0,
            a: self.a() as f32 / 255.0,
        }
    }

    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Per-vertex color: float channels plus the packed backend form
///
/// Software and OpenGL-class backends read the floats, Direct3D-class
/// backends read `packed`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PrimColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub packed: PackedColor,
}

impl From<Color> for PrimColor {
    fn from(color: Color) -> Self {
        color_to_prim(color)
    }
}

impl From<PrimColor> for Color {
    fn from(color: PrimColor) -> Self {
        prim_to_color(color)
    }
}

/// Convert a normalized color into the per-vertex representation
pub fn color_to_prim(color: Color) -> PrimColor {
    PrimColor {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
        packed: PackedColor::from_color(color),
    }
}

/// Convert a per-vertex color back into a normalized color
pub fn prim_to_color(color: PrimColor) -> Color {
    Color::rgba(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
