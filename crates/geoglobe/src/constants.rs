pub const CONFIG_PATH: &str = "globe_config.toml";
pub const DATA_PATH: &str = "Marine protected areas.csv";

pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_SEGMENTS: u32 = 32;
pub const ROTATION_PER_FRAME: f32 = 0.001;

pub const MARKER_RADIUS: f32 = 0.05;
pub const MARKER_HEIGHT: f32 = 0.1;
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

pub const LABEL_DISTANCE_FACTOR: f32 = 10.0;

pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 15.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_MIN_DISTANCE: f32 = 5.2;
pub const CAMERA_MAX_DISTANCE: f32 = 10.0;

pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 5.0];
