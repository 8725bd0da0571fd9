//! Material system

pub mod material;
pub mod material_params;

pub use material::{Material, MaterialType};
pub use material_params::{StandardMaterialParams, UnlitMaterialParams};
