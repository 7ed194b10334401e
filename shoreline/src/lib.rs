//! Shoreline - coastline proximity for beach-visit logging
//!
//! This library answers whether a geographic point lies within a distance
//! threshold of the coastline, using a static Polygon/MultiPolygon geometry
//! dataset held in memory for the life of the process.
//!
//! # High-Level API
//!
//! Most callers want the process-wide engine over the bundled dataset:
//!
//! ```ignore
//! use shoreline::proximity::CoastProximityEngine;
//!
//! let engine = CoastProximityEngine::bundled()?;
//! let result = engine.find_closest_coast_point(41.7190, 2.9309)?;
//!
//! if result.is_near {
//!     println!(
//!         "{}m from the coast, nearest point {}",
//!         result.min_distance_meters, result.closest_point
//!     );
//! }
//! ```
//!
//! Alternative datasets load through [`dataset::CoastlineDataset`] and an
//! engine constructed with [`proximity::CoastProximityEngine::new`].

pub mod config;
pub mod coord;
pub mod dataset;
pub mod distance;
pub mod logging;
pub mod proximity;

/// Version of the Shoreline library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
