//! # Headless Renderer
//!
//! CPU rasterizer implementing [`Renderer`] without any graphics device.
//!
//! ## Pipeline
//!
//! 1. Clear color to the scene background, depth to +∞
//! 2. Per object: `projection × view × model` to clip space, perspective divide
//! 3. Back-face culling in screen space
//! 4. Edge-function rasterization with a depth test on NDC depth
//! 5. Flat shading: ambient + Lambert directional per triangle
//!
//! With anti-aliasing enabled every pixel holds a 2×2 grid of samples that
//! is averaged when pixels are read or exported.
//!
//! ## Limitations
//! Triangles with any vertex behind the camera are dropped rather than
//! clipped against the near plane.

use std::path::Path;

use crate::foundation::math::{Mat3, Mat4, Vec3, Vec4};
use crate::render::api::{Renderer, RendererOptions};
use crate::render::primitives::{Camera, Color};
use crate::render::systems::lighting::LightType;
use crate::render::window::OutputNode;
use crate::render::{RenderError, RenderResult};
use crate::scene::{MeshObject, Scene};

/// Samples per axis when anti-aliasing is on
const SUPERSAMPLE: u32 = 2;

/// Largest framebuffer, in samples, the renderer will allocate
const MAX_SAMPLES: usize = 1 << 26;

/// Color and depth storage for one output size
#[derive(Debug)]
struct FrameBuffer {
    width: u32,
    height: u32,
    samples: u32,
    color: Vec<[u8; 4]>,
    depth: Vec<f32>,
}

impl FrameBuffer {
    /// `None` when the sample grid does not fit in `u32` or exceeds [`MAX_SAMPLES`]
    fn new(width: u32, height: u32, samples: u32) -> Option<Self> {
        let sample_w = width.checked_mul(samples)?;
        let sample_h = height.checked_mul(samples)?;
        let len = (sample_w as usize).checked_mul(sample_h as usize)?;
        if len > MAX_SAMPLES {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
            color: vec![[0, 0, 0, 255]; len],
            depth: vec![f32::INFINITY; len],
        })
    }

    fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            samples: 1,
            color: Vec::new(),
            depth: Vec::new(),
        }
    }

    fn sample_width(&self) -> u32 {
        self.width * self.samples
    }

    fn sample_height(&self) -> u32 {
        self.height * self.samples
    }

    fn clear(&mut self, background: Color) {
        let [r, g, b] = background.to_rgb8();
        self.color.fill([r, g, b, 255]);
        self.depth.fill(f32::INFINITY);
    }

    /// Average the sample grid under pixel (x, y)
    fn resolve_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let stride = self.sample_width() as usize;
        let mut sum = [0u32; 4];
        for sy in 0..self.samples {
            for sx in 0..self.samples {
                let index = (y * self.samples + sy) as usize * stride + (x * self.samples + sx) as usize;
                for (acc, channel) in sum.iter_mut().zip(self.color[index]) {
                    *acc += u32::from(channel);
                }
            }
        }
        let count = self.samples * self.samples;
        sum.map(|acc| ((acc + count / 2) / count) as u8)
    }

    fn resolve(&self) -> Vec<[u8; 4]> {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(self.resolve_pixel(x, y));
            }
        }
        pixels
    }
}

/// Triangle after projection, in sample-space coordinates
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    z: f32,
}

fn edge(a: ScreenVertex, b: ScreenVertex, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// CPU renderer with an RGBA8 framebuffer
#[derive(Debug)]
pub struct HeadlessRenderer {
    node: OutputNode,
    antialias: bool,
    logical_size: (u32, u32),
    pixel_ratio: f32,
    framebuffer: FrameBuffer,
    /// Why the last resize could not allocate, reported by `render`
    allocation_error: Option<String>,
    disposed: bool,
    frame_count: u64,
}

impl HeadlessRenderer {
    /// Create a renderer with a 1×1 output; callers size it with `set_size`
    pub fn new(options: &RendererOptions) -> Self {
        let mut renderer = Self {
            node: OutputNode::next(),
            antialias: options.antialias,
            logical_size: (1, 1),
            pixel_ratio: 1.0,
            framebuffer: FrameBuffer::empty(),
            allocation_error: None,
            disposed: false,
            frame_count: 0,
        };
        renderer.reallocate();
        log::debug!("Headless renderer created (node {:?}, antialias: {})", renderer.node, renderer.antialias);
        renderer
    }

    /// Factory function usable directly as a [`crate::render::api::RendererFactory`]
    pub fn create(options: &RendererOptions) -> RenderResult<Self> {
        Ok(Self::new(options))
    }

    /// Logical output size as last set
    pub fn size(&self) -> (u32, u32) {
        self.logical_size
    }

    /// Pixel ratio as last set
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Size of the output in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = |v: u32| (v as f32 * self.pixel_ratio).round().max(0.0) as u32;
        (scale(self.logical_size.0), scale(self.logical_size.1))
    }

    /// Whether anti-aliasing was requested
    pub fn antialias(&self) -> bool {
        self.antialias
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether `dispose` has released the framebuffer
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Resolved color of physical pixel (x, y), if in bounds and not disposed
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let fb = &self.framebuffer;
        (!self.disposed && x < fb.width && y < fb.height).then(|| fb.resolve_pixel(x, y))
    }

    /// Write the current frame as a PNG image
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        if self.disposed {
            return Err(RenderError::RendererDisposed);
        }
        let fb = &self.framebuffer;
        let pixels = fb.resolve();
        let image = image::RgbaImage::from_raw(fb.width, fb.height, bytemuck::cast_slice(&pixels).to_vec())
            .ok_or_else(|| RenderError::Export("framebuffer size mismatch".to_string()))?;
        image
            .save(path.as_ref())
            .map_err(|e| RenderError::Export(e.to_string()))?;
        log::info!("Frame {} written to {}", self.frame_count, path.as_ref().display());
        Ok(())
    }

    fn reallocate(&mut self) {
        if self.disposed {
            return;
        }
        let (width, height) = self.physical_size();
        let samples = if self.antialias { SUPERSAMPLE } else { 1 };
        if let Some(framebuffer) = FrameBuffer::new(width, height, samples) {
            self.framebuffer = framebuffer;
            self.allocation_error = None;
            log::trace!("Headless framebuffer allocated: {}x{} ({} samples/axis)", width, height, samples);
        } else {
            let message = format!("framebuffer of {}x{} ({} samples/axis) is too large", width, height, samples);
            log::error!("Headless {}", message);
            self.framebuffer = FrameBuffer::empty();
            self.allocation_error = Some(message);
        }
    }

    fn draw_object(fb: &mut FrameBuffer, object: &MeshObject, view_projection: &Mat4, light: &SceneLight) {
        let model = object.model_matrix();
        let mvp = view_projection * model;
        let Some(normal_matrix) = model
            .fixed_view::<3, 3>(0, 0)
            .into_owned()
            .try_inverse()
            .map(|m: Mat3| m.transpose())
        else {
            log::trace!("Skipping object with degenerate transform");
            return;
        };

        let sample_w = fb.sample_width() as f32;
        let sample_h = fb.sample_height() as f32;
        let to_screen = |position: [f32; 3]| -> Option<ScreenVertex> {
            let clip = mvp * Vec4::new(position[0], position[1], position[2], 1.0);
            if clip.w <= f32::EPSILON {
                return None;
            }
            let ndc = clip.xyz() / clip.w;
            Some(ScreenVertex {
                x: (ndc.x + 1.0) * 0.5 * sample_w,
                y: (1.0 - ndc.y) * 0.5 * sample_h,
                z: ndc.z,
            })
        };

        for [va, vb, vc] in object.mesh.triangles() {
            let (Some(a), Some(b), Some(c)) = (to_screen(va.position), to_screen(vb.position), to_screen(vc.position)) else {
                continue;
            };

            // Counter-clockwise in NDC is clockwise once Y points down
            let area = edge(a, b, c.x, c.y);
            if area >= 0.0 {
                continue;
            }

            let normal = (normal_matrix * va.normal_vec()).normalize();
            let rgb = Color::rgb8_from_vec3(light.shade(object, &normal));
            Self::fill_triangle(fb, a, b, c, area, [rgb[0], rgb[1], rgb[2], 255]);
        }
    }

    fn fill_triangle(fb: &mut FrameBuffer, a: ScreenVertex, b: ScreenVertex, c: ScreenVertex, area: f32, color: [u8; 4]) {
        let max_x = fb.sample_width() as f32;
        let max_y = fb.sample_height() as f32;
        let min_px = a.x.min(b.x).min(c.x).floor().clamp(0.0, max_x) as u32;
        let max_px = a.x.max(b.x).max(c.x).ceil().clamp(0.0, max_x) as u32;
        let min_py = a.y.min(b.y).min(c.y).floor().clamp(0.0, max_y) as u32;
        let max_py = a.y.max(b.y).max(c.y).ceil().clamp(0.0, max_y) as u32;
        let stride = fb.sample_width() as usize;

        for py in min_py..max_py {
            for px in min_px..max_px {
                let (sx, sy) = (px as f32 + 0.5, py as f32 + 0.5);
                let w0 = edge(b, c, sx, sy) / area;
                let w1 = edge(c, a, sx, sy) / area;
                let w2 = edge(a, b, sx, sy) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                if !(-1.0..=1.0).contains(&z) {
                    continue;
                }

                let index = py as usize * stride + px as usize;
                if z < fb.depth[index] {
                    fb.depth[index] = z;
                    fb.color[index] = color;
                }
            }
        }
    }
}

/// Lighting gathered once per frame
struct SceneLight<'a> {
    ambient: Vec3,
    scene: &'a Scene,
}

impl<'a> SceneLight<'a> {
    fn gather(scene: &'a Scene) -> Self {
        let ambient = scene
            .lights_of(LightType::Ambient)
            .fold(Vec3::zeros(), |acc, light| acc + light.radiance());
        Self { ambient, scene }
    }

    fn shade(&self, object: &MeshObject, normal: &Vec3) -> Vec3 {
        let base = object.material.color().to_vec3();
        if !object.material.is_lit() {
            return base;
        }
        let direct = self
            .scene
            .lights_of(LightType::Directional)
            .fold(Vec3::zeros(), |acc, light| acc + light.irradiance(normal));
        base.component_mul(&(self.ambient + direct))
    }
}

impl Renderer for HeadlessRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.logical_size = (width, height);
        self.reallocate();
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
        self.reallocate();
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> RenderResult<()> {
        if self.disposed {
            return Err(RenderError::RendererDisposed);
        }
        if let Some(message) = &self.allocation_error {
            return Err(RenderError::ResourceCreationFailed(message.clone()));
        }
        let fb = &mut self.framebuffer;
        fb.clear(scene.background);

        if !fb.color.is_empty() {
            let view_projection = camera.projection_matrix() * camera.view_matrix();
            let light = SceneLight::gather(scene);
            for object in scene.objects() {
                Self::draw_object(fb, object, &view_projection, &light);
            }
        }

        self.frame_count += 1;
        log::trace!("Headless frame {} rendered ({} objects)", self.frame_count, scene.object_count());
        Ok(())
    }

    fn dispose(&mut self) -> RenderResult<()> {
        if self.disposed {
            return Err(RenderError::AlreadyDisposed);
        }
        self.disposed = true;
        self.framebuffer = FrameBuffer::empty();
        log::debug!("Headless renderer {:?} disposed", self.node);
        Ok(())
    }

    fn output_node(&self) -> OutputNode {
        self.node
    }
}
