//! Coastline proximity engine
//!
//! The [`CoastProximityEngine`] answers "how close is this point to the
//! coastline, and where is the nearest coastal point" over an immutable
//! in-memory dataset. Boundary rings are extracted once at construction;
//! every query is a pure, deterministic min-distance scan with no I/O.
//!
//! # Thread Safety
//!
//! The engine is read-only after construction and safe for unlimited
//! concurrent callers without locking. The process-wide engine returned by
//! [`CoastProximityEngine::bundled`] is initialized at most once, even
//! under concurrent first access.
//!
//! # Example
//!
//! ```ignore
//! use shoreline::proximity::CoastProximityEngine;
//!
//! let engine = CoastProximityEngine::bundled()?;
//! let result = engine.find_closest_coast_point(41.7190, 2.9309)?;
//! if result.is_near {
//!     println!("within {} m of the coast", result.min_distance_meters);
//! }
//! ```

mod engine;
mod parallel;

pub use engine::{CoastProximityEngine, ProximityError, ProximityResult};
