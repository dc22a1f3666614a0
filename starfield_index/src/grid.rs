// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend over point entries. Sparse: only occupied cells are stored.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Cell edge length used when a non‑positive or non‑finite size is requested.
pub const DEFAULT_CELL_SIZE: f64 = 512.0;

type Cell = (i64, i64);

/// Sparse uniform grid mapping world positions to keys.
#[derive(Clone)]
pub struct GridIndex<K> {
    cell_size: f64,
    cells: HashMap<Cell, SmallVec<[(K, Point); 8]>>,
    len: usize,
}

impl<K> Debug for GridIndex<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridIndex")
            .field("cell_size", &self.cell_size)
            .field("cells", &self.cells.len())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<K> Default for GridIndex<K> {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl<K> GridIndex<K> {
    /// Creates an empty grid with square cells of `cell_size` world units.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            len: 0,
        }
    }

    /// Cell edge length in world units.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.len = 0;
    }

    /// Indexes `key` at `pos`. Non‑finite positions are rejected.
    pub fn insert(&mut self, key: K, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let cell = self.cell_of(pos);
        self.cells.entry(cell).or_default().push((key, pos));
        self.len += 1;
        true
    }

    /// Visits every entry whose position lies in `rect`, edges inclusive.
    ///
    /// Visit order is unspecified.
    pub fn visit_rect<F: FnMut(&K, Point)>(&self, rect: Rect, mut f: F) {
        if self.cells.is_empty() || !(rect.x0 <= rect.x1 && rect.y0 <= rect.y1) {
            return;
        }
        let (cx0, cy0) = self.cell_of(Point::new(rect.x0, rect.y0));
        let (cx1, cy1) = self.cell_of(Point::new(rect.x1, rect.y1));
        let cols = i128::from(cx1) - i128::from(cx0) + 1;
        let rows = i128::from(cy1) - i128::from(cy0) + 1;
        let span = cols.saturating_mul(rows);

        let mut visit_cell = |entries: &SmallVec<[(K, Point); 8]>| {
            for (key, pos) in entries {
                if pos.x >= rect.x0 && pos.x <= rect.x1 && pos.y >= rect.y0 && pos.y <= rect.y1 {
                    f(key, *pos);
                }
            }
        };

        // Zoomed far out, the rect can cover more cells than exist; walk the
        // occupied cells instead of the covered ones.
        if span > self.cells.len() as i128 {
            for (&(cx, cy), entries) in &self.cells {
                if cx >= cx0 && cx <= cx1 && cy >= cy0 && cy <= cy1 {
                    visit_cell(entries);
                }
            }
        } else {
            for cy in cy0..=cy1 {
                for cx in cx0..=cx1 {
                    if let Some(entries) = self.cells.get(&(cx, cy)) {
                        visit_cell(entries);
                    }
                }
            }
        }
    }

    /// Visits every entry in unspecified order.
    pub fn visit_all<F: FnMut(&K, Point)>(&self, mut f: F) {
        for entries in self.cells.values() {
            for (key, pos) in entries {
                f(key, *pos);
            }
        }
    }

    fn cell_of(&self, pos: Point) -> Cell {
        (floor_div(pos.x, self.cell_size), floor_div(pos.y, self.cell_size))
    }
}

impl<K: Clone> GridIndex<K> {
    /// Collects the keys whose position lies in `rect`.
    #[must_use]
    pub fn query_rect(&self, rect: Rect) -> Vec<K> {
        let mut out = Vec::new();
        self.visit_rect(rect, |k, _| out.push(k.clone()));
        out
    }
}

impl<K: PartialEq> GridIndex<K> {
    /// Removes `key`, which must have been inserted at `pos`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, key: &K, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let cell = self.cell_of(pos);
        let Some(entries) = self.cells.get_mut(&cell) else {
            return false;
        };
        let Some(at) = entries.iter().position(|(k, _)| k == key) else {
            return false;
        };
        entries.swap_remove(at);
        if entries.is_empty() {
            self.cells.remove(&cell);
        }
        self.len -= 1;
        true
    }
}

/// `floor(v / size)` without relying on `std` float intrinsics.
fn floor_div(v: f64, size: f64) -> i64 {
    let q = v / size;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating cast; positions far beyond i64 cells collapse into the edge cell"
    )]
    let t = q as i64;
    if t != i64::MIN && (t as f64) > q { t - 1 } else { t }
}
