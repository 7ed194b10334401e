//! GeoJSON geometry model for coastline boundaries.

use serde::Deserialize;

use crate::coord::Position;

/// A linear ring: an ordered sequence of positions.
///
/// Closed rings repeat the first position as the last one. Ring extraction
/// does not require closure; every listed vertex participates in the scan.
pub type Ring = Vec<Position>;

/// A single geometry from the coastline collection.
///
/// Only Polygon and MultiPolygon carry coastline boundaries. Every other
/// GeoJSON geometry type deserializes into [`Geometry::Unsupported`] so a
/// mixed collection still loads; unsupported entries yield no rings.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A polygon: exterior ring first, then any interior rings (holes).
    Polygon {
        coordinates: Vec<Ring>,
    },
    /// An ordered sequence of polygons.
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
    /// Any non-polygonal geometry type (Point, LineString, ...).
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Returns true if this geometry contributes coastline boundaries.
    #[inline]
    pub fn is_coastal(&self) -> bool {
        !matches!(self, Geometry::Unsupported)
    }

    /// Iterates every linear ring of this geometry in storage order.
    ///
    /// For a Polygon: exterior ring, then holes. For a MultiPolygon: the
    /// rings of each member polygon in sequence. Unsupported geometries
    /// yield nothing.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter()),
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flat_map(|polygon| polygon.iter()))
            }
            Geometry::Unsupported => Box::new(std::iter::empty()),
        }
    }

    /// Total number of boundary vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings().map(|ring| ring.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_polygon() {
        let json = r#"{
            "type": "Polygon",
            "coordinates": [[[2.79, 41.70], [2.80, 41.70], [2.80, 41.71], [2.79, 41.70]]]
        }"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        assert!(geometry.is_coastal());
        assert_eq!(geometry.rings().count(), 1);
        assert_eq!(geometry.vertex_count(), 4);
    }

    #[test]
    fn test_deserialize_polygon_with_hole() {
        let json = r#"{
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0]]
            ]
        }"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        let rings: Vec<&Ring> = geometry.rings().collect();
        assert_eq!(rings.len(), 2);
        // Exterior ring comes first
        assert_eq!(rings[0][1], Position::new(4.0, 0.0));
        assert_eq!(rings[1][0], Position::new(1.0, 1.0));
    }

    #[test]
    fn test_deserialize_multipolygon() {
        let json = r#"{
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
            ]
        }"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        assert!(geometry.is_coastal());
        assert_eq!(geometry.rings().count(), 2);
        assert_eq!(geometry.vertex_count(), 8);
    }

    #[test]
    fn test_ring_order_across_multipolygon() {
        let json = r#"{
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [5.0, 5.0]]]
            ]
        }"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        let rings: Vec<&Ring> = geometry.rings().collect();
        assert_eq!(rings[0][0], Position::new(0.0, 0.0));
        assert_eq!(rings[1][0], Position::new(5.0, 5.0));
    }

    #[test]
    fn test_deserialize_point_is_unsupported() {
        let json = r#"{"type": "Point", "coordinates": [2.79, 41.70]}"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        assert!(!geometry.is_coastal());
        assert_eq!(geometry.rings().count(), 0);
        assert_eq!(geometry.vertex_count(), 0);
    }

    #[test]
    fn test_deserialize_linestring_is_unsupported() {
        let json = r#"{"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        assert!(!geometry.is_coastal());
    }

    #[test]
    fn test_positions_with_elevation_accepted() {
        let json = r#"{
            "type": "Polygon",
            "coordinates": [[[2.79, 41.70, 3.0], [2.80, 41.70, 3.0], [2.79, 41.70, 3.0]]]
        }"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();

        let first = geometry.rings().next().unwrap()[0];
        assert_eq!(first, Position::new(2.79, 41.70));
    }
}
