//! Session configuration
//!
//! Replaces process-wide window hint calls with one explicit structure
//! handed to the session at construction. Every field has a default that
//! reproduces the classic "Hello, GLFW!" demo window, so a config file only
//! needs to name the values it changes.
//!
//! Files are TOML or RON, picked by extension:
//!
//! ```toml
//! title = "Demo"
//! width = 800
//! height = 600
//!
//! [hints]
//! decorated = true
//!
//! [aspect_ratio]
//! numerator = 4
//! denominator = 3
//! ```

use crate::geometry::{AspectRatio, Size, SizeLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration trait for types loadable from TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
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

/// Window creation hints applied once before the window exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowHints {
    /// User may resize the window
    pub resizable: bool,
    /// Window has borders and a title bar
    pub decorated: bool,
    /// Window stays above other windows
    pub floating: bool,
    /// Window starts maximized
    pub maximized: bool,
    /// Window is shown on creation
    pub visible: bool,
    /// Window takes input focus on creation
    pub focused: bool,
    /// Cursor is warped to the window center on creation
    pub center_cursor: bool,
    /// Framebuffer alpha is composited with the desktop
    pub transparent_framebuffer: bool,
}

impl Default for WindowHints {
    fn default() -> Self {
        Self {
            resizable: false,
            decorated: false,
            floating: true,
            maximized: true,
            visible: true,
            focused: true,
            center_cursor: true,
            transparent_framebuffer: true,
        }
    }
}

/// OpenGL context settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested context version (major, minor)
    pub version: (u32, u32),
    /// Request a core profile context
    pub core_profile: bool,
    /// Swap interval of one frame when true, immediate swaps otherwise
    pub vsync: bool,
    /// RGBA color the framebuffer is cleared to every frame
    pub clear_color: [f32; 4],
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            version: (3, 3),
            core_profile: true,
            vsync: true,
            clear_color: [0.3, 0.2, 0.45, 0.5],
        }
    }
}

/// Input reaction settings used by the default controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Size applied by the resize key
    pub resize_target: Size,
    /// Log cursor samples landing on multiples of this step
    pub cursor_log_step: u32,
    /// Enable cursor sample logging
    pub log_cursor: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            resize_target: Size::new(1280, 720),
            cursor_log_step: 10,
            log_cursor: true,
        }
    }
}

/// Everything a window session needs at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Base window title; fps readouts are appended to it
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Creation hints
    pub hints: WindowHints,
    /// Size limits enforced on every resize
    pub size_limits: SizeLimits,
    /// Optional fixed aspect ratio
    pub aspect_ratio: Option<AspectRatio>,
    /// Frames between fps title refreshes
    pub title_refresh_interval: u64,
    /// Rendering context settings
    pub context: ContextConfig,
    /// Default controller settings
    pub input: InputConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: "Hello, GLFW!".to_string(),
            width: 640,
            height: 480,
            hints: WindowHints::default(),
            size_limits: SizeLimits::default(),
            aspect_ratio: Some(AspectRatio::new(16, 9)),
            title_refresh_interval: 5,
            context: ContextConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Config for SessionConfig {}

impl SessionConfig {
    /// Create a config with the given title and initial size, defaults elsewhere
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Builder-style override of the aspect ratio
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<AspectRatio>) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Builder-style override of the size limits
    #[must_use]
    pub fn with_size_limits(mut self, size_limits: SizeLimits) -> Self {
        self.size_limits = size_limits;
        self
    }

    /// Builder-style override of the creation hints
    #[must_use]
    pub fn with_hints(mut self, hints: WindowHints) -> Self {
        self.hints = hints;
        self
    }

    /// Initial size as requested, before limits apply
    pub const fn initial_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Window size must be non-zero, got {}x{}", self.width, self.height));
        }
        if let Some(max) = self.size_limits.max {
            let min = self.size_limits.min;
            if min.width > max.width || min.height > max.height {
                return Err(format!(
                    "Minimum size {}x{} exceeds maximum {}x{}",
                    min.width, min.height, max.width, max.height
                ));
            }
        }
        if let Some(ratio) = self.aspect_ratio {
            if ratio.numerator == 0 || ratio.denominator == 0 {
                return Err(format!(
                    "Aspect ratio terms must be non-zero, got {}:{}",
                    ratio.numerator, ratio.denominator
                ));
            }
        }
        if self.title_refresh_interval == 0 {
            return Err("Title refresh interval must be at least 1 frame".to_string());
        }
        if self.input.cursor_log_step == 0 {
            return Err("Cursor log step must be non-zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("window_session_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_demo_window() {
        let config = SessionConfig::default();
        assert_eq!(config.title, "Hello, GLFW!");
        assert_eq!(config.initial_size(), Size::new(640, 480));
        assert!(!config.hints.resizable);
        assert!(!config.hints.decorated);
        assert!(config.hints.floating);
        assert!(config.hints.maximized);
        assert_eq!(config.size_limits.min, Size::new(200, 200));
        assert_eq!(config.aspect_ratio, Some(AspectRatio::new(16, 9)));
        assert_eq!(config.title_refresh_interval, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SessionConfig::new("t", 0, 480).validate().is_err());

        let inverted = SessionConfig::default().with_size_limits(SizeLimits {
            min: Size::new(800, 800),
            max: Some(Size::new(400, 400)),
        });
        assert!(inverted.validate().is_err());

        let zero_ratio = SessionConfig::default().with_aspect_ratio(Some(AspectRatio::new(16, 0)));
        assert!(zero_ratio.validate().is_err());

        let mut zero_interval = SessionConfig::default();
        zero_interval.title_refresh_interval = 0;
        assert!(zero_interval.validate().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SessionConfig = toml::from_str(
            r#"
            title = "Partial"

            [hints]
            decorated = true
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Partial");
        assert_eq!(config.width, 640);
        assert!(config.hints.decorated);
        assert!(config.hints.floating);
        assert_eq!(config.aspect_ratio, Some(AspectRatio::new(16, 9)));
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("session.toml");
        let config = SessionConfig::new("Saved", 800, 600).with_aspect_ratio(Some(AspectRatio::new(4, 3)));

        config.save_to_file(&path).unwrap();
        let loaded = SessionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = temp_path("session.ron");
        let config = SessionConfig::new("Ron", 1024, 576);

        config.save_to_file(&path).unwrap();
        let loaded = SessionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.title, "Ron");
        assert_eq!(loaded.initial_size(), Size::new(1024, 576));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_path("session.yaml");
        std::fs::write(&path, "title: nope").unwrap();
        let result = SessionConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
