use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::{LayoutStats, PackBoards};
use crate::geometry::{BoardConfig, BoardPiece, Rect};
use crate::math::Point2;

/// A packed layout together with its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pieces: Vec<BoardPiece>,
    pub stats: LayoutStats,
}

impl Layout {
    /// Packs `polygon` from scratch.
    #[must_use]
    pub fn compute(polygon: &[Point2], bounds: Rect, config: &BoardConfig) -> Self {
        let pieces = PackBoards::new(polygon, bounds, config).execute();
        let stats = LayoutStats::from_pieces(&pieces);
        Self { pieces, stats }
    }
}

/// Remembers the most recent layout, keyed by a structural hash of its inputs.
///
/// A lookup with different inputs replaces the stored layout.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(u64, Layout)>,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached layout for these inputs, packing it on a miss.
    pub fn get_or_compute(
        &mut self,
        polygon: &[Point2],
        bounds: Rect,
        config: &BoardConfig,
    ) -> &Layout {
        let key = input_key(polygon, &bounds, config);
        if self.entry.as_ref().is_some_and(|(k, _)| *k == key) {
            self.hits += 1;
            debug!(key, "layout cache hit");
        } else {
            self.misses += 1;
            debug!(key, "layout cache miss");
            self.entry = None;
        }
        let (_, layout) = self
            .entry
            .get_or_insert_with(|| (key, Layout::compute(polygon, bounds, config)));
        layout
    }

    /// Drops the stored layout.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }
}

fn input_key(polygon: &[Point2], bounds: &Rect, config: &BoardConfig) -> u64 {
    let mut h = DefaultHasher::new();
    polygon.len().hash(&mut h);
    for p in polygon {
        p.x.to_bits().hash(&mut h);
        p.y.to_bits().hash(&mut h);
    }
    for v in [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y] {
        v.to_bits().hash(&mut h);
    }
    for v in [
        config.board_length,
        config.board_width,
        config.expansion_gap,
        config.row_joint_offset,
    ] {
        v.to_bits().hash(&mut h);
    }
    config.min_cut_length.map(f64::to_bits).hash(&mut h);
    config.max_cut_length.map(f64::to_bits).hash(&mut h);
    config.installation_direction.hash(&mut h);
    h.finish()
}
