//! Parallel ring scanning.
//!
//! Rings are scanned independently on the rayon thread pool and merged with
//! the stable [`ScanHit::closer`] order, so the winner is identical to the
//! sequential scan regardless of how rayon schedules the reduction.

use rayon::prelude::*;

use crate::coord::Position;

use super::engine::{scan_ring_segments, scan_ring_vertices, ScanHit};

/// Parallel vertex-distance scan across all rings.
pub(super) fn vertex_scan(rings: &[Vec<Position>], query: Position) -> Option<ScanHit> {
    rings
        .par_iter()
        .enumerate()
        .filter_map(|(ring_idx, ring)| scan_ring_vertices(ring_idx, ring, query))
        .reduce_with(ScanHit::closer)
}

/// Parallel segment-distance scan across all rings.
pub(super) fn segment_scan(rings: &[Vec<Position>], query: Position) -> Option<ScanHit> {
    rings
        .par_iter()
        .enumerate()
        .filter_map(|(ring_idx, ring)| scan_ring_segments(ring_idx, ring, query))
        .reduce_with(ScanHit::closer)
}
