//! 24-bit RGB colors

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// RGB color stored as a `0xRRGGBB` integer
///
/// Serializes as the bare integer so configuration files can write
/// `background = 0x202124`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// White (`0xffffff`)
    pub const WHITE: Self = Self(0x00ff_ffff);

    /// Black (`0x000000`)
    pub const BLACK: Self = Self(0);

    /// Create a color from a `0xRRGGBB` value; bits above 24 are dropped
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// The `0xRRGGBB` value
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Red, green and blue channels as bytes
    pub const fn to_rgb8(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Channels normalized to `[0, 1]`
    pub fn to_vec3(self) -> Vec3 {
        let [r, g, b] = self.to_rgb8();
        Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
    }

    /// Quantize a `[0, 1]` color back to bytes, clamping out-of-range values
    pub fn rgb8_from_vec3(color: Vec3) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(color.x), quantize(color.y), quantize(color.z)]
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_channels() {
        let color = Color::from_hex(0x0020_2124);
        assert_eq!(color.to_rgb8(), [0x20, 0x21, 0x24]);
        assert_relative_eq!(color.to_vec3().x, 32.0 / 255.0);
        assert_eq!(color.to_string(), "#202124");
    }

    #[test]
    fn test_high_bits_dropped() {
        assert_eq!(Color::from_hex(0xff00_77ff).hex(), 0x0000_77ff);
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(Color::rgb8_from_vec3(Vec3::new(1.5, -0.2, 0.5)), [255, 0, 128]);
    }
}
