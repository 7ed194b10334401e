//! Query configuration for proximity searches.

/// Default proximity threshold in meters.
///
/// Matches the distance within which a logged visit counts as "at the
/// beach" in the app.
pub const DEFAULT_THRESHOLD_METERS: f64 = 500.0;

/// How distance to the coastline boundary is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    /// Distance to the nearest boundary vertex.
    ///
    /// The historical behavior of the coast check. Understates proximity
    /// near long, sparsely sampled edges, but is stable across dataset
    /// revisions that only re-segment edges.
    #[default]
    Vertex,
    /// Distance to the nearest point on a boundary segment.
    ///
    /// Stricter than [`DistanceMode::Vertex`]: never reports a larger
    /// distance, and accurate along sparse edges. Opt-in.
    Segment,
}

/// Configuration for a proximity query.
///
/// # Example
///
/// ```
/// use shoreline::config::{DistanceMode, ProximityConfig};
///
/// // Using defaults (500 m threshold, vertex distance, sequential scan)
/// let config = ProximityConfig::default();
/// assert_eq!(config.threshold_meters(), 500.0);
///
/// // Custom configuration
/// let config = ProximityConfig::new(100.0)
///     .with_mode(DistanceMode::Segment)
///     .with_parallel_scan(true);
/// assert_eq!(config.threshold_meters(), 100.0);
/// assert_eq!(config.mode(), DistanceMode::Segment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    /// Maximum distance in meters still considered "near"
    threshold_meters: f64,
    /// Distance measurement mode
    mode: DistanceMode,
    /// Scan boundary rings on the rayon thread pool
    parallel: bool,
}

impl ProximityConfig {
    /// Create a configuration with the given threshold and default mode.
    pub fn new(threshold_meters: f64) -> Self {
        Self {
            threshold_meters,
            ..Self::default()
        }
    }

    /// Set the proximity threshold in meters.
    pub fn with_threshold_meters(mut self, threshold_meters: f64) -> Self {
        self.threshold_meters = threshold_meters;
        self
    }

    /// Set the distance measurement mode.
    pub fn with_mode(mut self, mode: DistanceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable the parallel ring scan.
    ///
    /// A performance option for large datasets; the result is identical to
    /// the sequential scan.
    pub fn with_parallel_scan(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Get the proximity threshold in meters.
    pub fn threshold_meters(&self) -> f64 {
        self.threshold_meters
    }

    /// Get the distance measurement mode.
    pub fn mode(&self) -> DistanceMode {
        self.mode
    }

    /// Whether the parallel ring scan is enabled.
    pub fn parallel_scan(&self) -> bool {
        self.parallel
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            threshold_meters: DEFAULT_THRESHOLD_METERS,
            mode: DistanceMode::Vertex,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProximityConfig::default();
        assert_eq!(config.threshold_meters(), DEFAULT_THRESHOLD_METERS);
        assert_eq!(config.mode(), DistanceMode::Vertex);
        assert!(!config.parallel_scan());
    }

    #[test]
    fn test_builder_methods() {
        let config = ProximityConfig::new(250.0)
            .with_mode(DistanceMode::Segment)
            .with_parallel_scan(true);

        assert_eq!(config.threshold_meters(), 250.0);
        assert_eq!(config.mode(), DistanceMode::Segment);
        assert!(config.parallel_scan());
    }

    #[test]
    fn test_with_threshold_meters() {
        let config = ProximityConfig::default().with_threshold_meters(50.0);
        assert_eq!(config.threshold_meters(), 50.0);
        assert_eq!(config.mode(), DistanceMode::Vertex);
    }

    #[test]
    fn test_default_mode_is_vertex() {
        assert_eq!(DistanceMode::default(), DistanceMode::Vertex);
    }
}
