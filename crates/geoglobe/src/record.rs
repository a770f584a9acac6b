use glam::Vec3;
use std::collections::BTreeMap;
use std::io::Read;
use thiserror::Error;

pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One CSV row. `fields` keeps every column as read, coordinates included.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub latitude: f32,
    pub longitude: f32,
    pub fields: BTreeMap<String, String>,
}

impl GeoRecord {
    #[cfg(test)]
    pub fn new(latitude: f32, longitude: f32) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(LATITUDE_FIELD.to_string(), latitude.to_string());
        fields.insert(LONGITUDE_FIELD.to_string(), longitude.to_string());
        Self {
            latitude,
            longitude,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A record together with where it sits in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub record: GeoRecord,
    pub position: Vec3,
}

impl DataPoint {
    /// Tooltip text, built from the raw CSV values
    pub fn label(&self) -> String {
        let lat = self
            .record
            .field(LATITUDE_FIELD)
            .map(str::to_string)
            .unwrap_or_else(|| self.record.latitude.to_string());
        let lon = self
            .record
            .field(LONGITUDE_FIELD)
            .map(str::to_string)
            .unwrap_or_else(|| self.record.longitude.to_string());
        format!("Latitude: {} Longitude: {}", lat, lon)
    }
}

/// Parse CSV with a header row into records, preserving row order.
///
/// Header names are matched case-insensitively and stored lowercased.
/// A missing or non-numeric coordinate becomes `NaN`; it is the caller's
/// choice what to do with such records.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<GeoRecord>, RecordError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();

        records.push(GeoRecord {
            latitude: parse_coordinate(fields.get(LATITUDE_FIELD)),
            longitude: parse_coordinate(fields.get(LONGITUDE_FIELD)),
            fields,
        });
    }

    Ok(records)
}

fn parse_coordinate(value: Option<&String>) -> f32 {
    value
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(f32::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_keeps_order_and_columns() {
        let csv = "name,latitude,longitude,area_km2\n\
                   Galapagos,-0.95,-90.97,133000\n\
                   Papahanaumokuakea,25.7,-171.73,1510000\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("name"), Some("Galapagos"));
        assert!((records[0].latitude - -0.95).abs() < 1e-6);
        assert!((records[0].longitude - -90.97).abs() < 1e-6);
        assert_eq!(records[1].field("area_km2"), Some("1510000"));
        assert_eq!(records[1].fields.len(), 4);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let csv = "Name, Latitude ,LONGITUDE\nA,10.5,20.25\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].latitude, 10.5);
        assert_eq!(records[0].longitude, 20.25);
        assert_eq!(records[0].field("name"), Some("A"));
    }

    #[rstest]
    #[case("name,latitude,longitude\nA,north,20\n")] // non-numeric
    #[case("name,latitude,longitude\nA,,20\n")] // empty
    #[case("name,longitude\nA,20\n")] // missing column
    fn test_bad_latitude_is_nan(#[case] csv: &str) {
        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].latitude.is_nan());
        assert_eq!(records[0].longitude, 20.0);
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let records = parse_records("latitude,longitude\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "latitude,longitude,name\n1,2\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].latitude, 1.0);
        assert_eq!(records[0].field("name"), None);
    }

    #[test]
    fn test_label_uses_raw_values() {
        let csv = "latitude,longitude\n-12.50,130.0\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        let point = DataPoint {
            record: records[0].clone(),
            position: Vec3::ZERO,
        };

        assert_eq!(point.label(), "Latitude: -12.50 Longitude: 130.0");
    }
}
