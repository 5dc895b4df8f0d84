use egui::{Pos2, Vec2};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::VitrineError;
use crate::contact::MailConfig;
use crate::cursor::TrailConfig;
use crate::preloader::PreloaderConfig;

const CONFIG_DIR_NAME: &str = "vitrine";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_ASSETS_ROOT: &str = "public";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.,
            height: 800.,
        }
    }
}

impl From<WindowSize> for Vec2 {
    fn from(value: WindowSize) -> Self {
        Vec2::new(value.width, value.height)
    }
}

impl From<Vec2> for WindowSize {
    fn from(value: Vec2) -> Self {
        Self {
            width: value.x,
            height: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_position: Option<WindowPosition>,
    pub window_size: WindowSize,
    pub preloader: PreloaderConfig,
    pub trail: TrailConfig,
    pub mail: MailConfig,
    /// Directory or URL the project image paths are resolved against
    pub assets_root: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_position: None,
            window_size: WindowSize::default(),
            preloader: PreloaderConfig::default(),
            trail: TrailConfig::default(),
            mail: MailConfig::default(),
            assets_root: DEFAULT_ASSETS_ROOT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, VitrineError> {
        Ok(dirs::config_dir()
            .ok_or(VitrineError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Reads the config from the user config directory. `None` when there is
    /// no config file yet or it cannot be used.
    pub fn from_local_file() -> Option<Self> {
        let config_path = Self::default_path().ok()?;
        if !config_path.exists() {
            return None;
        }
        Self::load(&config_path)
            .map_err(|e| warn!("Ignoring config file {:?}: {}", config_path, e))
            .ok()
    }

    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let file =
            std::fs::File::open(path).map_err(|e| VitrineError::ConfigIOError { source: e })?;
        serde_json::from_reader(file).map_err(|e| VitrineError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), VitrineError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), VitrineError> {
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| VitrineError::ConfigIOError { source: e })?;
            }
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| VitrineError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| VitrineError::ConfigSerializeError { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitrine").join("config.json");

        let mut config = AppConfig::default();
        config.window_position = Some(WindowPosition { x: 10., y: 20. });
        config.preloader.min_display_ms = 2500;
        config.trail.segments = 8;
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "preloader": { "tick_ms": 40 } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.preloader.tick_ms, 40);
        assert_eq!(config.preloader.min_display_ms, 1000);
        assert_eq!(config.trail, TrailConfig::default());
        assert_eq!(config.mail, MailConfig::default());
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ oops").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(VitrineError::ConfigSerializeError { .. })
        ));
        assert!(matches!(
            AppConfig::load(&dir.path().join("missing.json")),
            Err(VitrineError::ConfigIOError { .. })
        ));
    }
}
