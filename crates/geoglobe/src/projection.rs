use crate::record::{DataPoint, GeoRecord};
use glam::Vec3;
use std::f32::consts::PI;

/// Map a geographic coordinate onto the sphere of radius `radius + height`.
///
/// Latitude 0 / longitude 0 lands on +X, the north pole on +Y and longitude
/// 180 on -X. Inputs are not validated: out of range or `NaN` coordinates
/// simply produce a point somewhere else (or a non-finite one).
pub fn lat_long_to_vec3(lat: f32, lon: f32, radius: f32, height: f32) -> Vec3 {
    let phi = lat * PI / 180.0;
    let theta = (lon - 180.0) * PI / 180.0;
    let r = radius + height;

    let x = -r * phi.cos() * theta.cos();
    let y = r * phi.sin();
    let z = r * phi.cos() * theta.sin();

    Vec3::new(x, y, z)
}

/// Project every record, keeping the input order
pub fn project_records(records: &[GeoRecord], radius: f32, height: f32) -> Vec<DataPoint> {
    records
        .iter()
        .map(|record| DataPoint {
            position: lat_long_to_vec3(record.latitude, record.longitude, radius, height),
            record: record.clone(),
        })
        .collect()
}
