//! Session construction

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::handle::{tick, LoopState, Session, SessionInner, SessionState};
use super::{
    AMBIENT_LIGHT_COLOR, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CUBE_COLOR, CUBE_SIZE,
    KEY_LIGHT_COLOR, KEY_LIGHT_POSITION,
};
use crate::config::SceneConfig;
use crate::foundation::math::Vec3;
use crate::host::Host;
use crate::render::api::{Renderer, RendererFactory, RendererOptions};
use crate::render::primitives::{Camera, Mesh};
use crate::render::resources::materials::Material;
use crate::render::systems::lighting::Light;
use crate::render::window::SurfaceRef;
use crate::render::RenderResult;
use crate::scene::{MeshObject, Scene};

/// Builds sessions against one host and one renderer factory
pub struct SessionManager<F> {
    host: Host,
    factory: F,
}

impl<F: RendererFactory> SessionManager<F> {
    /// Create a manager
    pub fn new(host: Host, factory: F) -> Self {
        Self { host, factory }
    }

    /// The host environment sessions are created against
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Build a rotating-cube session inside `surface`
    ///
    /// The output size comes from `config`, then from the surface's measured
    /// size, then 800×600. The renderer's output node is appended to the
    /// surface. With animation on, one tick runs before this returns and the
    /// next is queued with the host scheduler; otherwise a single frame is
    /// rendered.
    ///
    /// # Errors
    ///
    /// Renderer construction and first-frame errors are returned as-is. If
    /// the first frame fails the partly built session is stopped on drop.
    pub fn create(&self, surface: SurfaceRef, config: &SceneConfig) -> RenderResult<Session<F::Renderer>>
    where
        F::Renderer: 'static,
    {
        let resolved = {
            let surface = surface.borrow();
            config.resolve(surface.measured_width(), surface.measured_height())
        };
        log::info!(
            "Creating session: {}x{} background {} animate {}",
            resolved.width,
            resolved.height,
            resolved.background,
            resolved.animate
        );

        let mut scene = Scene::new(resolved.background);
        let camera = Camera::perspective(
            Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            CAMERA_FOV_DEGREES,
            resolved.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );

        let mut renderer = self.factory.create_renderer(&RendererOptions { antialias: true })?;
        renderer.set_size(resolved.width, resolved.height);
        renderer.set_pixel_ratio(self.host.effective_pixel_ratio());

        let node = renderer.output_node();
        surface.borrow_mut().append_child(node);

        let cube = scene.add_object(MeshObject::new(
            Mesh::cube(CUBE_SIZE),
            Material::standard_color(CUBE_COLOR).with_name("cube"),
        ));
        let [x, y, z] = KEY_LIGHT_POSITION;
        scene.add_light(Light::directional_at(Vec3::new(x, y, z), KEY_LIGHT_COLOR, 1.0));
        scene.add_light(Light::ambient(AMBIENT_LIGHT_COLOR, 1.0));

        let inner = Rc::new(SessionInner {
            state: RefCell::new(SessionState {
                scene,
                camera,
                renderer,
                cube,
            }),
            loop_state: Cell::new(LoopState::Idle),
            dispose_pending: Cell::new(false),
            scheduler: Rc::clone(self.host.scheduler()),
            surface,
            node,
            config: resolved,
        });
        let session = Session::from_inner(Rc::clone(&inner));

        if resolved.animate {
            tick(&inner)?;
        } else {
            session.render_frame()?;
        }
        Ok(session)
    }
}
