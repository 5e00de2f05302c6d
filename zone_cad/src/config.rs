//! Tunable parameters for zone editing.

/// Radius used by the `*_default` editing calls.
pub const DEFAULT_RADIUS: f64 = 100.0;
/// How aggressively the convex hull is pulled inward. Zero keeps it convex.
pub const DEFAULT_CONCAVITY: f64 = 2.0;
/// Hull edges shorter than this are never refined.
pub const DEFAULT_MIN_EDGE_LENGTH: f64 = 0.0;
/// Horizontal match distance when recovering elevations.
pub const DEFAULT_ELEVATION_TOLERANCE: f64 = 0.01;
/// Points generated on each add/remove circle.
pub const CIRCLE_SAMPLES: usize = 32;
/// Perimeter points checked when testing circle containment.
pub const PERIMETER_SAMPLES: usize = 8;

/// Parameters controlling concave hull refinement.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConcavityParams {
    pub concavity: f64,
    pub min_edge_length: f64,
}

impl ConcavityParams {
    /// Creates new parameters. Negative values are clamped to zero.
    pub fn new(concavity: f64, min_edge_length: f64) -> Self {
        Self {
            concavity: concavity.max(0.0),
            min_edge_length: min_edge_length.max(0.0),
        }
    }

    /// Parameters that leave the convex hull untouched.
    pub fn convex() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Default for ConcavityParams {
    fn default() -> Self {
        Self::new(DEFAULT_CONCAVITY, DEFAULT_MIN_EDGE_LENGTH)
    }
}

/// Editor configuration.
///
/// Every field falls back to its default when missing from a JSON file, so a
/// partial file such as `{"concavity": 3.0}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Radius for add/remove calls that do not specify one.
    pub default_radius: f64,
    /// Concavity passed to the hull refiner.
    pub concavity: f64,
    /// Minimum edge length passed to the hull refiner.
    pub min_edge_length: f64,
    /// Tolerance used when matching refined points back to samples.
    pub elevation_tolerance: f64,
    /// Number of points placed on an add/remove circle.
    pub circle_samples: usize,
    /// Number of perimeter points used by the circle containment check.
    pub perimeter_samples: usize,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            concavity: DEFAULT_CONCAVITY,
            min_edge_length: DEFAULT_MIN_EDGE_LENGTH,
            elevation_tolerance: DEFAULT_ELEVATION_TOLERANCE,
            circle_samples: CIRCLE_SAMPLES,
            perimeter_samples: PERIMETER_SAMPLES,
        }
    }
}

impl ZoneConfig {
    /// Refinement parameters derived from this configuration.
    pub fn concavity_params(&self) -> ConcavityParams {
        ConcavityParams::new(self.concavity, self.min_edge_length)
    }

    /// Saves this configuration to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: ZoneConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
