//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PSPIN_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Initial viewer state
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            viewer: ViewerConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PSPIN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PSPIN_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PSPIN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Polyspin".to_string(),
            width: 900,
            height: 900,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Initial viewer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Starting solid (0 = cube, 1 = pyramid, 2 = tetrahedron, 3 = octahedron)
    pub shape_index: usize,
    /// Rotation speeds per axis [x, y, z]
    pub speeds: [i32; 3],
    /// Start with animation running
    pub animate: bool,
    /// Surface color as 8-bit RGBA
    pub surface_color: [u8; 4],
    /// Edge color as 8-bit RGBA
    pub edge_color: [u8; 4],
    /// Start in rainbow mode
    pub rainbow_mode: bool,
    /// Rainbow speed (1-50)
    pub rainbow_speed: i32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            shape_index: 0,
            speeds: [0, 0, 0],
            animate: true,
            surface_color: [255, 255, 0, 255],
            edge_color: [0, 0, 255, 255],
            rainbow_mode: false,
            rainbow_speed: 30,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Half-extent of the frustum at the near plane (symmetric)
    pub frustum_extent: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance from the camera to the solid along -Z
    pub camera_distance: f32,
    /// Animation tick interval in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            frustum_extent: 1.2,
            near: 6.0,
            far: 70.0,
            camera_distance: 30.0,
            tick_interval_ms: 10,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
