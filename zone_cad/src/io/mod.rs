//! File input and output helpers for samples and boundaries.

mod geojson;

pub use self::geojson::write_boundary_geojson;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use crate::geometry::Point3;

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing its contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Reads all lines of a file.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

fn parse_coord(value: &str, line: usize) -> io::Result<f64> {
    value.trim().parse::<f64>().map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line, e))
    })
}

/// Reads `x,y[,z]` samples from a CSV file. Missing `z` defaults to zero and
/// blank lines are skipped.
pub fn read_points_csv_3d(path: &str) -> io::Result<Vec<Point3>> {
    let lines = read_lines(path)?;
    let mut pts = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected two or three comma-separated values", idx + 1),
            ));
        }
        let x = parse_coord(parts[0], idx + 1)?;
        let y = parse_coord(parts[1], idx + 1)?;
        let z = match parts.get(2) {
            Some(v) => parse_coord(v, idx + 1)?,
            None => 0.0,
        };
        pts.push(Point3::new(x, y, z));
    }
    Ok(pts)
}

/// Writes points as `x,y,z` lines.
pub fn write_points_csv_3d(path: &str, points: &[Point3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for p in points {
        writeln!(file, "{},{},{}", p.x, p.y, p.z)?;
    }
    Ok(())
}
