//! Configuration system
//!
//! [`SceneConfig`] carries the optional session settings. Each option is
//! resolved exactly once, when a session is created, into a
//! [`ResolvedConfig`].

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::render::primitives::Color;

/// Width used when neither the options nor the surface provide one
pub const FALLBACK_WIDTH: u32 = 800;

/// Height used when neither the options nor the surface provide one
pub const FALLBACK_HEIGHT: u32 = 600;

/// Background used when no color is configured
pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0x0020_2124);

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        format.parse(&contents)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = ConfigFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// File formats understood by [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a configuration document
    pub fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize a configuration document
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => {
                toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Session options
///
/// Every field is optional. Unset sizes fall back to the display surface's
/// measured size and then to 800×600; an unset background falls back to
/// [`DEFAULT_BACKGROUND`]; animation is on unless `animate` is `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output width in pixels
    pub width: Option<u32>,
    /// Output height in pixels
    pub height: Option<u32>,
    /// Background fill color
    pub background: Option<Color>,
    /// Run the continuous animation loop
    pub animate: Option<bool>,
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Create an empty configuration (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set an explicit output size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Builder pattern: Set the background color
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Builder pattern: Enable or disable the animation loop
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    /// Resolve the options against the surface's measured size
    ///
    /// Precedence per dimension: explicit option, then measured size, then
    /// the fallback. A measured size of zero is a real measurement and is
    /// kept.
    pub fn resolve(&self, measured_width: Option<u32>, measured_height: Option<u32>) -> ResolvedConfig {
        ResolvedConfig {
            width: self.width.or(measured_width).unwrap_or(FALLBACK_WIDTH),
            height: self.height.or(measured_height).unwrap_or(FALLBACK_HEIGHT),
            background: self.background.unwrap_or(DEFAULT_BACKGROUND),
            animate: self.animate != Some(false),
        }
    }
}

/// Effective session settings, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Background fill color
    pub background: Color,
    /// Whether the animation loop runs
    pub animate: bool,
}

impl ResolvedConfig {
    /// Width divided by height, unvalidated
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_size_wins_over_measured() {
        let resolved = SceneConfig::new().with_size(200, 150).resolve(Some(100), Some(80));
        assert_eq!((resolved.width, resolved.height), (200, 150));
    }

    #[test]
    fn test_measured_size_used_when_unset() {
        let resolved = SceneConfig::new().resolve(Some(400), Some(300));
        assert_eq!((resolved.width, resolved.height), (400, 300));
    }

    #[test]
    fn test_fallback_size() {
        let resolved = SceneConfig::new().resolve(None, None);
        assert_eq!((resolved.width, resolved.height), (FALLBACK_WIDTH, FALLBACK_HEIGHT));
    }

    #[test]
    fn test_dimensions_resolve_independently() {
        let config = SceneConfig { width: Some(1024), ..SceneConfig::default() };
        let resolved = config.resolve(None, Some(500));
        assert_eq!((resolved.width, resolved.height), (1024, 500));
    }

    #[test]
    fn test_zero_measurement_is_kept() {
        let resolved = SceneConfig::new().resolve(Some(0), Some(0));
        assert_eq!((resolved.width, resolved.height), (0, 0));
    }

    #[test]
    fn test_background_and_animate_defaults() {
        let resolved = SceneConfig::new().resolve(None, None);
        assert_eq!(resolved.background, DEFAULT_BACKGROUND);
        assert_eq!(resolved.background.hex(), 0x0020_2124);
        assert!(resolved.animate);

        let custom = SceneConfig::new()
            .with_background(Color::from_hex(0x00ff_0000))
            .with_animate(true)
            .resolve(None, None);
        assert_eq!(custom.background.hex(), 0x00ff_0000);
        assert!(custom.animate);

        assert!(!SceneConfig::new().with_animate(false).resolve(None, None).animate);
    }

    #[test]
    fn test_parse_toml() {
        let config: SceneConfig = ConfigFormat::Toml
            .parse("width = 320\nheight = 240\nbackground = 0x112233\nanimate = false\n")
            .unwrap();
        assert_eq!(config.width, Some(320));
        assert_eq!(config.height, Some(240));
        assert_eq!(config.background, Some(Color::from_hex(0x0011_2233)));
        assert_eq!(config.animate, Some(false));
    }

    #[test]
    fn test_parse_ron_partial() {
        let config: SceneConfig = ConfigFormat::Ron.parse("(width: Some(640))").unwrap();
        assert_eq!(config.width, Some(640));
        assert_eq!(config.height, None);
        assert_eq!(config.animate, None);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConfigFormat::from_path(Path::new("scene.json")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("tiny_scene_config_{}.toml", std::process::id()));
        let config = SceneConfig::new().with_size(64, 48).with_animate(false);

        config.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
