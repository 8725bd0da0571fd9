//! Rotating cube demo
//!
//! Runs a session on a headless surface for a couple of seconds, resizes it,
//! writes the last frame to `cube_app.png` and stops.
//!
//! Usage: `cube_app [config.toml|config.ron]`

use tiny_scene::config::{Config, ConfigError, SceneConfig};
use tiny_scene::host::FrameLoop;
use tiny_scene::render::{HeadlessRenderer, HeadlessSurface, RenderError, SurfaceRef};
use tiny_scene::session::SessionManager;

const SURFACE_WIDTH: u32 = 640;
const SURFACE_HEIGHT: u32 = 480;
const TARGET_FPS: u32 = 60;
const FRAMES: u64 = 120;
const RESIZED: (u32, u32) = (320, 240);
const DEVICE_PIXEL_RATIO: f32 = 1.0;
const OUTPUT_PATH: &str = "cube_app.png";

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

fn load_config() -> Result<SceneConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene config from {}", path);
            Ok(SceneConfig::load_from_file(&path)?)
        }
        None => Ok(SceneConfig::default()),
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;

    let mut frame_loop = FrameLoop::new(TARGET_FPS);
    let surface = HeadlessSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT).shared();
    let manager = SessionManager::new(frame_loop.host(Some(DEVICE_PIXEL_RATIO)), HeadlessRenderer::create);

    let shared: SurfaceRef = surface.clone();
    let session = manager.create(shared, &config)?;
    log::info!("Output node {:?} attached", session.output_node());

    frame_loop.run_for(FRAMES);
    if let Some(cube) = session.cube() {
        log::info!("Cube rotation after {} frames: ({:.2}, {:.2})", FRAMES, cube.rotation.x, cube.rotation.y);
    }

    let (width, height) = RESIZED;
    session.resize(width, height)?;
    session.renderer().save_png(OUTPUT_PATH)?;

    session.stop();
    log::info!(
        "Done: {} frames rendered, {} nodes left on surface",
        session.renderer().frame_count(),
        surface.borrow().children().len()
    );
    Ok(())
}

fn main() {
    tiny_scene::foundation::logging::init();
    log::info!("Starting cube demo");

    if let Err(e) = run() {
        log::error!("Cube demo failed: {}", e);
        std::process::exit(1);
    }
}
