use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::avatar;
use crate::input::InputConfig;

/// Settings loading error
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "Could not read settings: {}", err),
            SettingsError::Json(err) => write!(f, "Could not parse settings: {}", err),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}

/// Gymnast motion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarSettings {
    /// Walking speed in units per second
    pub speed: f32,
    /// Turning speed in degrees per second
    pub rotate_speed: f32,
    /// Backflip duration in seconds
    pub flip_duration: f32,
    pub jump_height: f32,
    /// Giant swing speed in degrees per second
    pub swing_speed: f32,
    /// Maximal horizontal distance to the bar allowing to mount
    pub mount_distance: f32,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            speed: avatar::SPEED,
            rotate_speed: avatar::ROTATE_SPEED,
            flip_duration: avatar::FLIP_DURATION,
            jump_height: avatar::JUMP_HEIGHT,
            swing_speed: avatar::SWING_SPEED,
            mount_distance: avatar::MOUNT_DISTANCE,
        }
    }
}

/// Gymnasia Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application name
    pub application_name: String,
    /// Directory with OBJ/MTL pairs
    pub models_path: PathBuf,
    /// Number of frames to run
    pub frames: u32,
    /// Fixed time step in seconds, or None for the monotonic clock
    pub fixed_delta: Option<f32>,
    /// Log FPS once per second
    pub log_fps: bool,
    /// Enable or disable debug outputs
    pub debug: bool,
    pub avatar: AvatarSettings,
    pub input: InputConfig,
}

impl Settings {
    /// Reads settings from a JSON file, missing fields take default values
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.validate();
        Ok(settings)
    }

    /// Sets application name
    pub fn application_name(mut self, value: impl Into<String>) -> Self {
        self.application_name = value.into();
        self
    }

    /// Sets models directory
    pub fn models_path(mut self, value: impl Into<PathBuf>) -> Self {
        self.models_path = value.into();
        self
    }

    /// Sets number of frames
    pub fn frames(mut self, value: u32) -> Self {
        self.frames = value;
        self
    }

    /// Sets fixed time step
    pub fn fixed_delta(mut self, value: Option<f32>) -> Self {
        self.fixed_delta = value;
        self
    }

    /// Sets FPS logging
    pub fn log_fps(mut self, value: bool) -> Self {
        self.log_fps = value;
        self
    }

    /// Sets debug mode
    pub fn debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Fixed time step as a duration, None if it does not fit one
    pub fn fixed_duration(&self) -> Option<Duration> {
        self.fixed_delta
            .and_then(|delta| Duration::try_from_secs_f32(delta).ok())
    }

    /// Validates and corrects settings values
    pub fn validate(&mut self) {
        if self.frames < 1 {
            self.frames = 1;
        }
        if let Some(delta) = self.fixed_delta {
            if !(delta > 0.0 && Duration::try_from_secs_f32(delta).is_ok()) {
                self.fixed_delta = None;
            }
        }

        let defaults = AvatarSettings::default();
        let avatar = &mut self.avatar;
        for (value, default) in [
            (&mut avatar.speed, defaults.speed),
            (&mut avatar.rotate_speed, defaults.rotate_speed),
            (&mut avatar.flip_duration, defaults.flip_duration),
            (&mut avatar.jump_height, defaults.jump_height),
            (&mut avatar.swing_speed, defaults.swing_speed),
            (&mut avatar.mount_distance, defaults.mount_distance),
        ] {
            if !(*value > 0.0 && value.is_finite()) {
                *value = default;
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application_name: String::from("Gymnasia"),
            models_path: PathBuf::from("models"),
            frames: 600,
            fixed_delta: Some(1.0 / 60.0),
            log_fps: false,
            debug: false,
            avatar: AvatarSettings::default(),
            input: InputConfig::default(),
        }
    }
}
