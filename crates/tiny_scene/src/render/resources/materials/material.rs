//! Material type definitions

use super::{StandardMaterialParams, UnlitMaterialParams};
use crate::render::primitives::Color;

/// Enumeration of supported material types
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialType {
    /// Lit material: responds to ambient and directional lights
    Standard(StandardMaterialParams),
    /// Unlit material drawn with its flat color
    Unlit(UnlitMaterialParams),
}

/// Surface description attached to a mesh object
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material type and parameters
    pub material_type: MaterialType,
    /// Optional name for debugging
    pub name: Option<String>,
}

impl Material {
    /// Create a standard lit material
    pub fn standard(params: StandardMaterialParams) -> Self {
        Self {
            material_type: MaterialType::Standard(params),
            name: None,
        }
    }

    /// Create a standard lit material with only its base color set
    pub fn standard_color(color: Color) -> Self {
        Self::standard(StandardMaterialParams {
            base_color: color,
            ..StandardMaterialParams::default()
        })
    }

    /// Create an unlit material
    pub fn unlit(params: UnlitMaterialParams) -> Self {
        Self {
            material_type: MaterialType::Unlit(params),
            name: None,
        }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Surface color regardless of material type
    pub fn color(&self) -> Color {
        match &self.material_type {
            MaterialType::Standard(params) => params.base_color,
            MaterialType::Unlit(params) => params.color,
        }
    }

    /// Whether lights affect this material
    pub fn is_lit(&self) -> bool {
        matches!(self.material_type, MaterialType::Standard(_))
    }
}
