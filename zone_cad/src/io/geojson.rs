//! GeoJSON export of a zone boundary.

use std::io;

use geojson::{Feature, GeoJson, Geometry, JsonObject, JsonValue, Value};

use crate::geometry::{polygon_area, Point3};

/// Writes `boundary` as a single closed Polygon feature.
///
/// The ring is closed by repeating the first vertex and every position keeps
/// its elevation as a third ordinate.
pub fn write_boundary_geojson(path: &str, boundary: &[Point3]) -> io::Result<()> {
    if boundary.len() < 3 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("boundary has {} vertices, need at least 3", boundary.len()),
        ));
    }
    let mut ring: Vec<Vec<f64>> = boundary.iter().map(|p| vec![p.x, p.y, p.z]).collect();
    ring.push(ring[0].clone());

    let mut properties = JsonObject::new();
    properties.insert(String::from("vertices"), JsonValue::from(boundary.len()));
    properties.insert(String::from("area"), JsonValue::from(polygon_area(boundary)));

    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    };
    std::fs::write(path, GeoJson::from(feature).to_string())
}
