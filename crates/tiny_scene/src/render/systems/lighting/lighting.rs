//! Scene lighting
//!
//! Two light types cover the scene: a directional light (parallel rays
//! from a position toward a target) and an ambient light that lifts every
//! surface uniformly. Lights are pure data; renderers decide how to shade
//! with them.

use crate::foundation::math::Vec3;
use crate::render::primitives::Color;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Directional light (like sunlight)
    Directional,
    /// Uniform light with no direction
    Ambient,
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light position (directional lights shine from here toward `direction`)
    pub position: Vec3,
    /// Normalized direction the light travels (zero for ambient lights)
    pub direction: Vec3,
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
}

impl Light {
    /// Directional light placed at `position`, shining at the origin
    pub fn directional_at(position: Vec3, color: Color, intensity: f32) -> Self {
        Self::directional_towards(position, Vec3::zeros(), color, intensity)
    }

    /// Directional light placed at `position`, shining at `target`
    pub fn directional_towards(position: Vec3, target: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            position,
            direction: (target - position).normalize(),
            color,
            intensity,
        }
    }

    /// Ambient light
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self {
            light_type: LightType::Ambient,
            position: Vec3::zeros(),
            direction: Vec3::zeros(),
            color,
            intensity,
        }
    }

    /// Light color scaled by intensity
    pub fn radiance(&self) -> Vec3 {
        self.color.to_vec3() * self.intensity
    }

    /// Light contribution to a surface with the given world-space normal
    ///
    /// Ambient lights ignore the normal; directional lights use Lambert's
    /// cosine law.
    pub fn irradiance(&self, normal: &Vec3) -> Vec3 {
        match self.light_type {
            LightType::Ambient => self.radiance(),
            LightType::Directional => self.radiance() * normal.dot(&-self.direction).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_directional_points_at_origin() {
        let light = Light::directional_at(Vec3::new(3.0, 3.0, 3.0), Color::WHITE, 1.0);
        let expected = -Vec3::new(1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(light.direction, expected, epsilon = 1e-6);
        assert_eq!(light.light_type, LightType::Directional);
    }

    #[test]
    fn test_lambert_falloff() {
        let light = Light::directional_towards(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros(), Color::WHITE, 1.0);
        assert_relative_eq!(light.irradiance(&Vec3::z()).x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(light.irradiance(&-Vec3::z()).x, 0.0);
        assert_relative_eq!(light.irradiance(&Vec3::x()).x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ambient_ignores_normal() {
        let light = Light::ambient(Color::from_hex(0x0040_4040), 1.0);
        let up = light.irradiance(&Vec3::y());
        let down = light.irradiance(&-Vec3::y());
        assert_relative_eq!(up, down);
        assert_relative_eq!(up.x, 64.0 / 255.0, epsilon = 1e-6);
    }
}
