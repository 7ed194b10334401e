//! Min-distance scan over coastline boundary rings.

use std::sync::OnceLock;

use crate::config::{DistanceMode, ProximityConfig};
use crate::coord::{self, CoordError, Position};
use crate::dataset::{CoastlineDataset, DatasetError};
use crate::distance::{haversine_meters, point_to_segment_meters};

use super::parallel;

/// Error type for proximity queries.
#[derive(Debug, thiserror::Error)]
pub enum ProximityError {
    /// The query point is outside the valid coordinate ranges.
    #[error("invalid query point: {0}")]
    InvalidCoordinate(#[from] CoordError),
    /// The threshold is not a positive finite number of meters.
    #[error("invalid threshold: {0} (must be a positive finite number of meters)")]
    InvalidThreshold(f64),
    /// The dataset survived loading but its geometries carry no vertices.
    ///
    /// Distinct from being far from the coast: absence of data never
    /// produces a distance.
    #[error("coastline dataset yielded no boundary vertices")]
    NoBoundaryVertices,
}

/// Result of a proximity query. A fresh value per query, owned by the caller.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProximityResult {
    /// True when the minimum distance is within the configured threshold
    pub is_near: bool,
    /// Great-circle distance to the closest coastline point, in meters
    pub min_distance_meters: f64,
    /// The closest coastline point (longitude, latitude)
    pub closest_point: Position,
}

/// The closest candidate found while scanning rings.
///
/// `ring` and `offset` record where the candidate sits in iteration order
/// (rings in dataset order, vertices/edges in ring order) so exact distance
/// ties resolve identically however the scan is scheduled.
#[derive(Debug, Clone, Copy)]
pub(super) struct ScanHit {
    pub(super) ring: usize,
    pub(super) offset: usize,
    pub(super) distance_meters: f64,
    pub(super) position: Position,
}

impl ScanHit {
    /// Stable total order: strictly closer wins; exact ties resolve to the
    /// earliest (ring, offset).
    pub(super) fn closer(self, other: ScanHit) -> ScanHit {
        if other.distance_meters < self.distance_meters {
            return other;
        }
        if other.distance_meters == self.distance_meters
            && (other.ring, other.offset) < (self.ring, self.offset)
        {
            return other;
        }
        self
    }
}

/// Scan one ring's vertices for the closest one to `query`.
pub(super) fn scan_ring_vertices(
    ring_idx: usize,
    ring: &[Position],
    query: Position,
) -> Option<ScanHit> {
    let mut best: Option<ScanHit> = None;
    for (offset, &vertex) in ring.iter().enumerate() {
        let hit = ScanHit {
            ring: ring_idx,
            offset,
            distance_meters: haversine_meters(query, vertex),
            position: vertex,
        };
        best = Some(match best {
            None => hit,
            Some(current) => current.closer(hit),
        });
    }
    best
}

/// Scan one ring's edges for the closest segment point to `query`.
///
/// A ring with a single vertex has no edges and falls back to vertex
/// distance, so segment mode never reports less data than vertex mode.
pub(super) fn scan_ring_segments(
    ring_idx: usize,
    ring: &[Position],
    query: Position,
) -> Option<ScanHit> {
    if ring.len() < 2 {
        return scan_ring_vertices(ring_idx, ring, query);
    }

    let mut best: Option<ScanHit> = None;
    for (offset, edge) in ring.windows(2).enumerate() {
        let (distance_meters, position) = point_to_segment_meters(query, edge[0], edge[1]);
        let hit = ScanHit {
            ring: ring_idx,
            offset,
            distance_meters,
            position,
        };
        best = Some(match best {
            None => hit,
            Some(current) => current.closer(hit),
        });
    }
    best
}

/// Answers nearest-coastline-point queries over an immutable dataset.
///
/// Construction flattens every boundary ring of the dataset's Polygon and
/// MultiPolygon geometries (geometries in dataset order, rings in geometry
/// order, vertices in ring order); queries never re-parse or re-extract.
#[derive(Debug)]
pub struct CoastProximityEngine {
    rings: Vec<Vec<Position>>,
    vertex_count: usize,
}

/// Process-wide engine over the bundled dataset, initialized at most once.
static BUNDLED: OnceLock<Result<CoastProximityEngine, DatasetError>> = OnceLock::new();

impl CoastProximityEngine {
    /// Build an engine from a loaded dataset.
    pub fn new(dataset: CoastlineDataset) -> Self {
        let rings: Vec<Vec<Position>> = dataset
            .iter()
            .flat_map(|geometry| geometry.rings().cloned())
            .collect();
        let vertex_count = rings.iter().map(|ring| ring.len()).sum();

        tracing::debug!(
            rings = rings.len(),
            vertices = vertex_count,
            "Built coast proximity engine"
        );

        Self {
            rings,
            vertex_count,
        }
    }

    /// The process-wide engine over the bundled coastline dataset.
    ///
    /// Lazily parses the embedded asset on first call; concurrent first
    /// callers block until the single initialization completes.
    pub fn bundled() -> Result<&'static Self, &'static DatasetError> {
        BUNDLED
            .get_or_init(|| CoastlineDataset::bundled().map(Self::new))
            .as_ref()
    }

    /// Number of boundary rings held by the engine.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Number of boundary vertices held by the engine.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Find the closest coastline point with the default configuration
    /// (500 m threshold, vertex distance, sequential scan).
    ///
    /// # Arguments
    ///
    /// * `lat` - Query latitude in degrees (-90.0 to 90.0)
    /// * `lon` - Query longitude in degrees (-180.0 to 180.0)
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range or non-finite coordinates, or when
    /// the dataset yields no boundary vertices. Never fabricates a distance.
    pub fn find_closest_coast_point(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<ProximityResult, ProximityError> {
        self.find_closest_coast_point_with(lat, lon, &ProximityConfig::default())
    }

    /// Find the closest coastline point with an explicit configuration.
    ///
    /// Deterministic for a fixed dataset, point, and configuration: repeat
    /// calls return bit-identical results, whether or not the parallel scan
    /// is enabled.
    pub fn find_closest_coast_point_with(
        &self,
        lat: f64,
        lon: f64,
        config: &ProximityConfig,
    ) -> Result<ProximityResult, ProximityError> {
        coord::validate_query_point(lat, lon)?;

        let threshold = config.threshold_meters();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ProximityError::InvalidThreshold(threshold));
        }

        let query = Position::new(lon, lat);
        let hit = match (config.mode(), config.parallel_scan()) {
            (DistanceMode::Vertex, false) => self.scan_vertices(query),
            (DistanceMode::Vertex, true) => parallel::vertex_scan(&self.rings, query),
            (DistanceMode::Segment, false) => self.scan_segments(query),
            (DistanceMode::Segment, true) => parallel::segment_scan(&self.rings, query),
        };
        let hit = hit.ok_or(ProximityError::NoBoundaryVertices)?;

        tracing::debug!(
            distance_meters = hit.distance_meters,
            closest = %hit.position,
            "Closest coastline point"
        );

        Ok(ProximityResult {
            is_near: hit.distance_meters <= threshold,
            min_distance_meters: hit.distance_meters,
            closest_point: hit.position,
        })
    }

    fn scan_vertices(&self, query: Position) -> Option<ScanHit> {
        self.rings
            .iter()
            .enumerate()
            .filter_map(|(ring_idx, ring)| scan_ring_vertices(ring_idx, ring, query))
            .reduce(ScanHit::closer)
    }

    fn scan_segments(&self, query: Position) -> Option<ScanHit> {
        self.rings
            .iter()
            .enumerate()
            .filter_map(|(ring_idx, ring)| scan_ring_segments(ring_idx, ring, query))
            .reduce(ScanHit::closer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_dataset() -> CoastlineDataset {
        CoastlineDataset::from_geojson_str(
            r#"{
                "type": "GeometryCollection",
                "geometries": [{
                    "type": "Polygon",
                    "coordinates": [[
                        [2.79, 41.70], [2.80, 41.70], [2.80, 41.71],
                        [2.79, 41.71], [2.79, 41.70]
                    ]]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_engine_counts() {
        let engine = CoastProximityEngine::new(square_dataset());
        assert_eq!(engine.ring_count(), 1);
        assert_eq!(engine.vertex_count(), 5);
    }

    #[test]
    fn test_query_on_vertex_is_zero() {
        let engine = CoastProximityEngine::new(square_dataset());
        let result = engine.find_closest_coast_point(41.70, 2.79).unwrap();

        assert_eq!(result.min_distance_meters, 0.0);
        assert!(result.is_near);
        assert_eq!(result.closest_point, Position::new(2.79, 41.70));
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let engine = CoastProximityEngine::new(square_dataset());
        let result = engine.find_closest_coast_point(200.0, 2.79);

        assert!(matches!(
            result,
            Err(ProximityError::InvalidCoordinate(
                CoordError::InvalidLatitude(_)
            ))
        ));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let engine = CoastProximityEngine::new(square_dataset());

        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ProximityConfig::new(threshold);
            let result = engine.find_closest_coast_point_with(41.70, 2.79, &config);
            assert!(
                matches!(result, Err(ProximityError::InvalidThreshold(_))),
                "threshold {} should be rejected",
                threshold
            );
        }
    }

    #[test]
    fn test_tie_break_prefers_first_vertex() {
        // Two identical rings: the hit must come from ring 0, vertex 0
        let dataset = CoastlineDataset::from_geojson_str(
            r#"{
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "coordinates": [[[2.79, 41.70], [2.79, 41.70]]]},
                    {"type": "Polygon", "coordinates": [[[2.79, 41.70], [2.79, 41.70]]]}
                ]
            }"#,
        )
        .unwrap();
        let engine = CoastProximityEngine::new(dataset);

        let sequential = engine.scan_vertices(Position::new(2.9411, 41.7253)).unwrap();
        assert_eq!((sequential.ring, sequential.offset), (0, 0));

        let parallel = parallel::vertex_scan(&engine.rings, Position::new(2.9411, 41.7253)).unwrap();
        assert_eq!((parallel.ring, parallel.offset), (0, 0));
    }

    #[test]
    fn test_empty_rings_yield_no_data() {
        // A polygon with an empty ring list survives loading but has no vertices
        let dataset = CoastlineDataset::from_geojson_str(
            r#"{
                "type": "GeometryCollection",
                "geometries": [{"type": "Polygon", "coordinates": []}]
            }"#,
        )
        .unwrap();
        let engine = CoastProximityEngine::new(dataset);

        let result = engine.find_closest_coast_point(41.70, 2.79);
        assert!(matches!(result, Err(ProximityError::NoBoundaryVertices)));
    }

    #[test]
    fn test_segment_mode_not_larger_than_vertex_mode() {
        let engine = CoastProximityEngine::new(square_dataset());

        let vertex = engine
            .find_closest_coast_point_with(41.7253, 2.9411, &ProximityConfig::default())
            .unwrap();
        let segment = engine
            .find_closest_coast_point_with(
                41.7253,
                2.9411,
                &ProximityConfig::default().with_mode(DistanceMode::Segment),
            )
            .unwrap();

        assert!(segment.min_distance_meters <= vertex.min_distance_meters);
    }

    #[test]
    fn test_scan_hit_closer_ordering() {
        let near = ScanHit {
            ring: 3,
            offset: 7,
            distance_meters: 10.0,
            position: Position::new(0.0, 0.0),
        };
        let far = ScanHit {
            ring: 0,
            offset: 0,
            distance_meters: 20.0,
            position: Position::new(1.0, 1.0),
        };
        let tied_earlier = ScanHit {
            ring: 1,
            offset: 2,
            distance_meters: 10.0,
            position: Position::new(2.0, 2.0),
        };

        assert_eq!(near.closer(far).ring, 3);
        assert_eq!(far.closer(near).ring, 3);
        assert_eq!(near.closer(tied_earlier).ring, 1);
        assert_eq!(tied_earlier.closer(near).ring, 1);
    }
}
