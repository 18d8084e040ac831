//! Colors for canvas drawing.

use std::fmt;

/// RGBA color with 8-bit channels and a fractional alpha, matching CSS `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// The violet accent used for particles.
    pub const ACCENT: Self = Self::rgb(124, 92, 255);

    /// Creates a color from channels and alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from a 0xRRGGBB value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns the CSS `rgba(r,g,b,a)` form.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::hex(0x7C5CFF), Color::ACCENT);
    }

    #[test]
    fn test_css_form() {
        assert_eq!(Color::ACCENT.with_alpha(0.25).to_css(), "rgba(124,92,255,0.25)");
        assert_eq!(Color::WHITE.to_css(), "rgba(255,255,255,1)");
    }
}
