//! Coastline dataset loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::geometry::Geometry;

/// Bundled coastline extract (Costa Brava), embedded at compile time.
const BUNDLED_COASTLINES: &str = include_str!("../../assets/coastlines.json");

/// Error type for dataset loading.
///
/// All variants are configuration errors: they occur before any query runs
/// and are not recoverable by retrying.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("coastline dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse coastline GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("coastline dataset contains no geometries")]
    Empty,
    #[error("coastline dataset contains no Polygon or MultiPolygon geometries")]
    NoCoastGeometries,
}

/// Top-level GeoJSON envelope: a `GeometryCollection` document.
#[derive(Debug, Deserialize)]
struct GeometryCollection {
    geometries: Vec<Geometry>,
}

/// An immutable collection of coastline geometries.
///
/// Loaded once and never mutated; construction fails fast when the
/// collection is empty or carries no polygonal geometry at all, so a
/// misconfigured dataset is caught before the first query.
#[derive(Debug, Clone)]
pub struct CoastlineDataset {
    geometries: Vec<Geometry>,
}

impl CoastlineDataset {
    /// Parse a dataset from a GeoJSON `GeometryCollection` string.
    pub fn from_geojson_str(geojson: &str) -> Result<Self, DatasetError> {
        let collection: GeometryCollection = serde_json::from_str(geojson)?;
        Self::from_geometries(collection.geometries)
    }

    /// Parse a dataset from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let collection: GeometryCollection = serde_json::from_reader(reader)?;
        Self::from_geometries(collection.geometries)
    }

    /// Load a dataset from a GeoJSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "Loading coastline dataset");
        Self::from_reader(BufReader::new(file))
    }

    /// Parse the dataset bundled with the library.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_geojson_str(BUNDLED_COASTLINES)
    }

    fn from_geometries(geometries: Vec<Geometry>) -> Result<Self, DatasetError> {
        if geometries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let coastal = geometries.iter().filter(|g| g.is_coastal()).count();
        if coastal == 0 {
            return Err(DatasetError::NoCoastGeometries);
        }

        tracing::info!(
            geometries = geometries.len(),
            coastal,
            "Loaded coastline dataset"
        );

        Ok(Self { geometries })
    }

    /// Returns an iterator over all geometries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Geometry> {
        self.geometries.iter()
    }

    /// Returns the number of geometries in the dataset.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true if the dataset holds no geometries.
    ///
    /// Always false for a constructed dataset; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}
