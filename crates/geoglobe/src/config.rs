use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub globe: GlobeSection,
    pub markers: MarkerConfig,
    pub labels: LabelConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSection {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    /// Radians added to the globe's yaw every frame
    pub rotation_per_frame: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub radius: f32,
    /// Distance above the globe surface
    pub height: f32,
    pub color: [f32; 3],
    /// Parent markers to the globe so they spin with the texture
    pub follow_globe_rotation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    Always,
    Hover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub mode: LabelMode,
    pub distance_factor: f32,
    pub font_size: f32,
    /// World-space distance from the cursor ray that still counts as a hit
    pub hover_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub directional_illuminance: f32,
    pub directional_position: [f32; 3],
}

impl Default for GlobeSection {
    fn default() -> Self {
        Self {
            radius: GLOBE_RADIUS,
            sectors: GLOBE_SEGMENTS,
            stacks: GLOBE_SEGMENTS,
            rotation_per_frame: ROTATION_PER_FRAME,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: MARKER_RADIUS,
            height: MARKER_HEIGHT,
            color: MARKER_COLOR,
            follow_globe_rotation: false,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            mode: LabelMode::Always,
            distance_factor: LABEL_DISTANCE_FACTOR,
            font_size: 14.0,
            hover_radius: 0.1,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION,
            fov_degrees: CAMERA_FOV_DEGREES,
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            enable_zoom: true,
            enable_pan: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: 400.0,
            directional_illuminance: 4_000.0,
            directional_position: DIRECTIONAL_LIGHT_POSITION,
        }
    }
}

impl GlobeConfig {
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GlobeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.globe.radius <= 0.0 || self.markers.radius <= 0.0 {
            return Err(ConfigError::Invalid("radii must be positive".into()));
        }
        if self.globe.sectors < 3 || self.globe.stacks < 2 {
            return Err(ConfigError::Invalid(format!(
                "globe needs at least 3 sectors and 2 stacks, got {}x{}",
                self.globe.sectors, self.globe.stacks
            )));
        }
        if self.markers.height < 0.0 {
            return Err(ConfigError::Invalid("marker height must not be negative".into()));
        }
        let camera = &self.camera;
        if camera.min_distance <= 0.0 || camera.min_distance > camera.max_distance {
            return Err(ConfigError::Invalid(format!(
                "camera distance range [{}, {}] is empty",
                camera.min_distance, camera.max_distance
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov must be within (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        Ok(())
    }
}
