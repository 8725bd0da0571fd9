//! Session handle and animation loop

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use super::ROTATION_STEP;
use crate::config::ResolvedConfig;
use crate::host::{FrameHandle, FrameScheduler};
use crate::render::api::Renderer;
use crate::render::primitives::Camera;
use crate::render::window::{OutputNode, SurfaceRef};
use crate::render::{RenderError, RenderResult};
use crate::scene::{MeshObject, ObjectKey, Scene};

/// Animation loop state
///
/// `Stopped` is terminal and only [`Session::stop`] enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Running without a pending frame (static session, or the loop ended)
    Idle,
    /// A tick is queued with the host scheduler
    Scheduled(FrameHandle),
    /// Torn down
    Stopped,
}

/// Mutable part of a session, borrowed per operation
pub(super) struct SessionState<R> {
    pub(super) scene: Scene,
    pub(super) camera: Camera,
    pub(super) renderer: R,
    pub(super) cube: ObjectKey,
}

pub(super) struct SessionInner<R> {
    pub(super) state: RefCell<SessionState<R>>,
    pub(super) loop_state: Cell<LoopState>,
    /// Set when `stop` could not reach the renderer because the state was borrowed
    pub(super) dispose_pending: Cell<bool>,
    pub(super) scheduler: Rc<dyn FrameScheduler>,
    pub(super) surface: SurfaceRef,
    pub(super) node: OutputNode,
    pub(super) config: ResolvedConfig,
}

impl<R: Renderer> SessionInner<R> {
    fn dispose_renderer(&self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            log::warn!("Renderer dispose deferred: session state is borrowed");
            self.dispose_pending.set(true);
            return;
        };
        self.dispose_pending.set(false);
        if let Err(e) = state.renderer.dispose() {
            log::error!("Failed to dispose renderer: {}", e);
        }
    }

    /// Finish a deferred dispose once the state is free again
    fn settle(&self) {
        if self.dispose_pending.get() {
            self.dispose_renderer();
        }
    }
}

/// Handle to a live rendering session
///
/// Owns the scene, camera and renderer. Accessors hand out `RefCell`
/// guards; a frame that comes up while a guard is alive is skipped.
///
/// Dropping the handle stops the session.
pub struct Session<R: Renderer> {
    inner: Rc<SessionInner<R>>,
}

impl<R: Renderer> Session<R> {
    pub(super) fn from_inner(inner: Rc<SessionInner<R>>) -> Self {
        Self { inner }
    }

    /// Tear the session down
    ///
    /// Cancels the pending tick, disposes the renderer and detaches the
    /// output node if the surface is connected and still holds it. Each
    /// step that fails is logged and the rest still run. If an accessor
    /// guard is alive the dispose waits until the state is next borrowed
    /// or the handle is dropped. Calling `stop` again does nothing.
    pub fn stop(&self) {
        let previous = self.inner.loop_state.replace(LoopState::Stopped);
        if previous == LoopState::Stopped {
            self.inner.settle();
            log::debug!("Session already stopped");
            return;
        }

        if let LoopState::Scheduled(handle) = previous {
            self.inner.scheduler.cancel_frame(handle);
            log::debug!("Cancelled pending frame {:?}", handle);
        }

        self.inner.dispose_renderer();
        self.detach_output();
        log::info!("Session stopped");
    }

    fn detach_output(&self) {
        let node = self.inner.node;
        let Ok(mut surface) = self.inner.surface.try_borrow_mut() else {
            log::error!("Failed to detach output node {:?}: surface is borrowed", node);
            return;
        };

        if !surface.is_connected() {
            log::debug!("Surface disconnected, leaving output node {:?}", node);
            return;
        }
        if !surface.contains(node) {
            log::debug!("Output node {:?} no longer attached", node);
            return;
        }
        if let Err(e) = surface.remove_child(node) {
            log::error!("Failed to detach output node {:?}: {}", node, e);
        }
    }

    fn state_mut(&self) -> RenderResult<RefMut<'_, SessionState<R>>> {
        self.inner.state.try_borrow_mut().map_err(|_| RenderError::StateBorrowed)
    }

    /// Resize the output and render one frame at the new size
    ///
    /// Sets the renderer size, sets the camera aspect to `width / height`
    /// and refreshes its projection. Sizes are not validated. Does nothing
    /// once the session is stopped.
    ///
    /// # Errors
    ///
    /// [`RenderError::StateBorrowed`] while an accessor guard is alive, or
    /// the renderer's error for the frame.
    pub fn resize(&self, width: u32, height: u32) -> RenderResult<()> {
        if self.is_stopped() {
            log::warn!("Resize to {}x{} ignored: session is stopped", width, height);
            return Ok(());
        }

        let mut state = self.state_mut()?;
        let state = &mut *state;
        state.renderer.set_size(width, height);
        state.camera.aspect = width as f32 / height as f32;
        state.camera.update_projection_matrix();
        log::debug!("Session resized to {}x{}", width, height);
        state.renderer.render(&state.scene, &state.camera)
    }

    /// Render one frame now, outside the animation loop
    ///
    /// # Errors
    ///
    /// [`RenderError::StateBorrowed`] while an accessor guard is alive, or
    /// the renderer's error for the frame.
    pub fn render_frame(&self) -> RenderResult<()> {
        if self.is_stopped() {
            return Ok(());
        }
        let mut state = self.state_mut()?;
        let state = &mut *state;
        state.renderer.render(&state.scene, &state.camera)
    }

    fn state(&self) -> Ref<'_, SessionState<R>> {
        self.inner.settle();
        self.inner.state.borrow()
    }

    fn state_guard_mut(&self) -> RefMut<'_, SessionState<R>> {
        self.inner.settle();
        self.inner.state.borrow_mut()
    }

    /// The scene graph
    pub fn scene(&self) -> Ref<'_, Scene> {
        Ref::map(self.state(), |s| &s.scene)
    }

    /// The scene graph, mutably
    pub fn scene_mut(&self) -> RefMut<'_, Scene> {
        RefMut::map(self.state_guard_mut(), |s| &mut s.scene)
    }

    /// The camera
    pub fn camera(&self) -> Ref<'_, Camera> {
        Ref::map(self.state(), |s| &s.camera)
    }

    /// The camera, mutably
    pub fn camera_mut(&self) -> RefMut<'_, Camera> {
        RefMut::map(self.state_guard_mut(), |s| &mut s.camera)
    }

    /// The renderer
    pub fn renderer(&self) -> Ref<'_, R> {
        Ref::map(self.state(), |s| &s.renderer)
    }

    /// The renderer, mutably
    pub fn renderer_mut(&self) -> RefMut<'_, R> {
        RefMut::map(self.state_guard_mut(), |s| &mut s.renderer)
    }

    /// Scene key of the rotating cube
    pub fn cube_key(&self) -> ObjectKey {
        self.state().cube
    }

    /// The rotating cube
    pub fn cube(&self) -> Option<Ref<'_, MeshObject>> {
        Ref::filter_map(self.state(), |s| s.scene.object(s.cube)).ok()
    }

    /// The rotating cube, mutably
    pub fn cube_mut(&self) -> Option<RefMut<'_, MeshObject>> {
        RefMut::filter_map(self.state_guard_mut(), |s| s.scene.object_mut(s.cube)).ok()
    }

    /// Configuration the session was created with, after resolution
    pub fn config(&self) -> &ResolvedConfig {
        &self.inner.config
    }

    /// The renderer's output node, attached to the surface while running
    pub fn output_node(&self) -> OutputNode {
        self.inner.node
    }

    /// Current animation loop state
    pub fn loop_state(&self) -> LoopState {
        self.inner.loop_state.get()
    }

    /// Whether [`Session::stop`] has run
    pub fn is_stopped(&self) -> bool {
        self.loop_state() == LoopState::Stopped
    }
}

impl<R: Renderer> Drop for Session<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One animation step: rotate the cube, render, queue the next step
///
/// A frame that finds the state borrowed is skipped and the next one is
/// still queued. Render errors leave the loop `Idle` with nothing queued.
pub(super) fn tick<R: Renderer + 'static>(inner: &Rc<SessionInner<R>>) -> RenderResult<()> {
    if inner.loop_state.get() == LoopState::Stopped {
        return Ok(());
    }

    if let Ok(mut state) = inner.state.try_borrow_mut() {
        let state = &mut *state;
        if let Some(cube) = state.scene.object_mut(state.cube) {
            cube.rotation.x += ROTATION_STEP;
            cube.rotation.y += ROTATION_STEP;
        }
        if let Err(e) = state.renderer.render(&state.scene, &state.camera) {
            inner.loop_state.set(LoopState::Idle);
            return Err(e);
        }
    } else {
        log::warn!("Frame skipped: session state is borrowed");
    }

    let weak = Rc::downgrade(inner);
    let handle = inner.scheduler.request_frame(Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if let Err(e) = tick(&inner) {
            log::error!("Animation loop ended: {}", e);
        }
    }));

    inner.loop_state.set(LoopState::Scheduled(handle));
    Ok(())
}
