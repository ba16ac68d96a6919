use icn_lang::{Diagnostic, parse_hex_color};

/// Straight-alpha sRGB color, channels in `[0, 1]`.
///
/// ICN only ever produces opaque colors; alpha is carried so backends can
/// forward it unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Decodes an ICN color argument (`rgb` / `rrggbb`, optional `#`) as an
    /// opaque color.
    pub fn from_hex(text: &str) -> Result<Self, Diagnostic> {
        let [r, g, b] = parse_hex_color(text)?;
        Ok(Self::from_srgb_u8(r, g, b, 255))
    }

    /// Straight sRGB bytes, channels clamped and rounded.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl Default for Color {
    /// White, the pen color before any `c` command.
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_bytes() {
        let c = Color::from_hex("#3366cc").unwrap();
        assert_eq!(c.to_srgb_u8(), [0x33, 0x66, 0xcc, 255]);
        assert!(c.is_opaque());
    }

    #[test]
    fn shorthand_matches_long_form() {
        assert_eq!(Color::from_hex("abc"), Color::from_hex("aabbcc"));
    }

    #[test]
    fn malformed_hex_is_an_error() {
        assert!(Color::from_hex("#12").is_err());
    }

    #[test]
    fn to_srgb_clamps() {
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_srgb_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
