//! Coastline dataset loading and geometry model
//!
//! The coastline is shipped as a GeoJSON `GeometryCollection` of Polygon and
//! MultiPolygon geometries approximating landmass boundaries. This module
//! deserializes that document into an immutable [`CoastlineDataset`] and
//! exposes boundary-ring extraction for the proximity scan.
//!
//! # Data Source
//!
//! A bundled Costa Brava extract is embedded in the library and used when no
//! explicit dataset path is supplied. Alternative datasets can be loaded from
//! any reader or file path as long as they deserialize into the same
//! geometry model.
//!
//! # Example
//!
//! ```ignore
//! use shoreline::dataset::CoastlineDataset;
//!
//! let dataset = CoastlineDataset::from_path("coastlines.json")?;
//! println!("{} geometries", dataset.len());
//! ```

mod geometry;
mod loader;

pub use geometry::{Geometry, Ring};
pub use loader::{CoastlineDataset, DatasetError};
