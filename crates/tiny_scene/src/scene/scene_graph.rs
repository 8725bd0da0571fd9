//! Scene container
//!
//! A flat scene: a background fill, mesh objects addressed by
//! [`ObjectKey`], and a list of lights. Objects are only ever added.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::primitives::{Color, Mesh};
use crate::render::resources::materials::Material;
use crate::render::systems::lighting::{Light, LightType};

new_key_type! {
    /// Handle to a mesh object stored in a [`Scene`]
    pub struct ObjectKey;
}

/// Mesh placed in the scene with its own transform
#[derive(Debug, Clone)]
pub struct MeshObject {
    /// Geometry in object space
    pub mesh: Mesh,
    /// Surface material
    pub material: Material,
    /// Position in world space
    pub position: Vec3,
    /// Euler rotation in radians, applied X then Y then Z
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl MeshObject {
    /// Create an object at the origin with no rotation and unit scale
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self {
            mesh,
            material,
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Object-to-world transform (`T × R × S`)
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * Mat4::euler_xyz(self.rotation)
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Scene graph root
#[derive(Debug, Clone)]
pub struct Scene {
    /// Color the frame is cleared to
    pub background: Color,
    objects: SlotMap<ObjectKey, MeshObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the given background
    pub fn new(background: Color) -> Self {
        Self {
            background,
            objects: SlotMap::with_key(),
            lights: Vec::new(),
        }
    }

    /// Add a mesh object and return its key
    pub fn add_object(&mut self, object: MeshObject) -> ObjectKey {
        let key = self.objects.insert(object);
        log::debug!("Scene object added: {:?} ({} total)", key, self.objects.len());
        key
    }

    /// Add a light
    pub fn add_light(&mut self, light: Light) {
        log::debug!("Scene light added: {:?} {}", light.light_type, light.color);
        self.lights.push(light);
    }

    /// Look up an object
    pub fn object(&self, key: ObjectKey) -> Option<&MeshObject> {
        self.objects.get(key)
    }

    /// Look up an object mutably
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut MeshObject> {
        self.objects.get_mut(key)
    }

    /// Iterate over all mesh objects
    pub fn objects(&self) -> impl Iterator<Item = &MeshObject> {
        self.objects.values()
    }

    /// Number of mesh objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All lights in insertion order
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Lights of one type
    pub fn lights_of(&self, light_type: LightType) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(move |light| light.light_type == light_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube() -> MeshObject {
        MeshObject::new(Mesh::cube(1.0), Material::standard_color(Color::WHITE))
    }

    #[test]
    fn test_add_and_lookup() {
        let mut scene = Scene::new(Color::BLACK);
        let mut object = cube();
        object.position = Vec3::new(1.0, 0.0, 0.0);
        let key = scene.add_object(object);

        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.object(key).unwrap().position.x, 1.0);

        scene.object_mut(key).unwrap().rotation.y = 0.5;
        assert_eq!(scene.object(key).unwrap().rotation.y, 0.5);
    }

    #[test]
    fn test_lights_filtered_by_type() {
        let mut scene = Scene::new(Color::BLACK);
        scene.add_light(Light::directional_at(Vec3::new(3.0, 3.0, 3.0), Color::WHITE, 1.0));
        scene.add_light(Light::ambient(Color::from_hex(0x0040_4040), 1.0));

        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.lights_of(LightType::Ambient).count(), 1);
        assert_eq!(scene.lights_of(LightType::Directional).count(), 1);
    }

    #[test]
    fn test_model_matrix_identity_at_rest() {
        assert_relative_eq!(cube().model_matrix(), Mat4::identity());
    }

    #[test]
    fn test_model_matrix_translates() {
        let mut object = cube();
        object.position = Vec3::new(0.0, 2.0, 0.0);
        let moved = object.model_matrix().transform_point(&nalgebra::Point3::origin());
        assert_relative_eq!(moved.y, 2.0);
    }
}
