pub mod config;
pub mod constants;
pub mod picking;
pub mod projection;
pub mod record;

pub use config::{ConfigError, GlobeConfig, LabelMode};
pub use projection::{lat_long_to_vec3, project_records};
pub use record::{DataPoint, GeoRecord, RecordError, parse_records};
