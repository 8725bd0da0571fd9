//! Material parameter types for different material workflows

use crate::render::primitives::Color;

/// Standard lit material parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterialParams {
    /// Base color (albedo)
    pub base_color: Color,
}

impl Default for StandardMaterialParams {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
        }
    }
}

/// Unlit material parameters: drawn with the flat color, lights ignored
#[derive(Debug, Clone, PartialEq)]
pub struct UnlitMaterialParams {
    /// Material color
    pub color: Color,
}

impl Default for UnlitMaterialParams {
    fn default() -> Self {
        Self { color: Color::WHITE }
    }
}
