// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World state: every generated star, in append order, behind a grid index.

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use starfield_index::GridIndex;

use crate::star::{ClusterKey, Star, StarId};

/// What the world does with content far from the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Retention {
    /// Never drop anything. The world only grows.
    #[default]
    KeepAll,
    /// After each expansion pass, drop whole clusters whose anchor is farther
    /// than `distance` world units from the camera center.
    EvictBeyond {
        /// Eviction radius in world units.
        distance: f64,
    },
}

/// The accumulated stars of one session.
///
/// Stars are stored in append order and indexed by a uniform grid so that
/// visibility queries do not scan the whole world. Under
/// [`Retention::KeepAll`] the world is append‑only: [`World::len`] and
/// [`World::bounds`] never shrink.
#[derive(Clone, Debug)]
pub struct World {
    stars: Vec<Star>,
    by_id: HashMap<StarId, usize>,
    index: GridIndex<StarId>,
    bounds: Option<Rect>,
    revision: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(starfield_index::DEFAULT_CELL_SIZE)
    }
}

impl World {
    /// Creates an empty world whose index uses `cell_size` world units per cell.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            stars: Vec::new(),
            by_id: HashMap::new(),
            index: GridIndex::new(cell_size),
            bounds: None,
            revision: 0,
        }
    }

    /// Number of stars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Returns `true` if no star has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Counter bumped by every mutation; useful as a cache key.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stars in append order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Star> + '_ {
        self.stars.iter()
    }

    /// Stars as a slice, in append order.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Star with the given id.
    #[must_use]
    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.by_id.get(&id).map(|&i| &self.stars[i])
    }

    /// Returns `true` if a star with this id exists.
    #[must_use]
    pub fn contains(&self, id: StarId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Appends one generated batch. Returns how many stars were added.
    ///
    /// Stars whose id is already present, or whose position is not finite, are
    /// skipped.
    pub fn append(&mut self, stars: impl IntoIterator<Item = Star>) -> usize {
        let before = self.stars.len();
        for star in stars {
            if self.by_id.contains_key(&star.id) || !self.index.insert(star.id, star.position) {
                tracing::trace!(id = ?star.id, "skipping duplicate or non-finite star");
                continue;
            }
            self.bounds = Some(match self.bounds {
                Some(b) => b.union_pt(star.position),
                None => Rect::from_points(star.position, star.position),
            });
            self.by_id.insert(star.id, self.stars.len());
            self.stars.push(star);
        }
        let added = self.stars.len() - before;
        if added > 0 {
            self.revision += 1;
        }
        added
    }

    /// Running bounds of all star positions, or `None` for an empty world.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Recomputes bounds with a linear scan over every star.
    #[must_use]
    pub fn compute_bounds(&self) -> Option<Rect> {
        let mut iter = self.stars.iter().map(|s| s.position);
        let first = iter.next()?;
        Some(iter.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
    }

    /// Stars inside `rect` (edges inclusive), in append order.
    #[must_use]
    pub fn visible(&self, rect: Rect) -> Vec<&Star> {
        self.visible_slots(rect)
            .into_iter()
            .map(|i| &self.stars[i])
            .collect()
    }

    /// Positions in [`World::stars`] of the stars inside `rect`, ascending.
    ///
    /// Slots stay valid until the next mutation; compare [`World::revision`].
    #[must_use]
    pub fn visible_slots(&self, rect: Rect) -> Vec<usize> {
        let mut slots = Vec::new();
        self.index.visit_rect(rect, |id, _| {
            if let Some(&i) = self.by_id.get(id) {
                slots.push(i);
            }
        });
        slots.sort_unstable();
        slots
    }

    /// Distinct clusters currently in the world.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        let mut keys: Vec<ClusterKey> = self.stars.iter().map(|s| s.id.cluster).collect();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
    }

    /// Removes every cluster for which `evict` returns `true`.
    ///
    /// Returns the number of stars removed. Clusters are removed whole so no
    /// surviving star keeps a connection to a missing one.
    pub fn evict_clusters_where<F>(&mut self, mut evict: F) -> usize
    where
        F: FnMut(ClusterKey) -> bool,
    {
        let before = self.stars.len();
        let index = &mut self.index;
        self.stars.retain(|s| {
            if evict(s.id.cluster) {
                index.remove(&s.id, s.position);
                false
            } else {
                true
            }
        });
        let removed = before - self.stars.len();
        if removed > 0 {
            self.by_id = self
                .stars
                .iter()
                .enumerate()
                .map(|(i, s)| (s.id, i))
                .collect();
            self.bounds = self.compute_bounds();
            self.revision += 1;
        }
        removed
    }

    /// Removes clusters anchored farther than `distance` from `center`.
    pub fn evict_beyond(&mut self, center: Point, distance: f64) -> usize {
        if !distance.is_finite() || distance < 0.0 {
            return 0;
        }
        self.evict_clusters_where(|key| key.anchor().distance(center) > distance)
    }

    /// Drops everything, as if freshly created.
    pub fn clear(&mut self) {
        self.stars.clear();
        self.by_id.clear();
        self.index.clear();
        self.bounds = None;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use smallvec::SmallVec;
    use starfield_view::filter;

    use super::World;
    use crate::star::{ClusterKey, Star, StarId};

    fn star(anchor: Point, slot: u16, position: Point) -> Star {
        Star {
            id: StarId {
                cluster: ClusterKey::from_anchor(anchor),
                slot,
            },
            media: 0,
            position,
            z: 0.0,
            size: 1.0,
            brightness: 1.0,
            connections: SmallVec::new(),
        }
    }

    fn sample() -> World {
        let mut world = World::new(100.0);
        let a = Point::new(0.0, 0.0);
        let b = Point::new(5000.0, 0.0);
        world.append([
            star(a, 0, Point::new(-10.0, -10.0)),
            star(a, 1, Point::new(10.0, 10.0)),
            star(a, 2, Point::new(250.0, 40.0)),
        ]);
        world.append([
            star(b, 0, Point::new(5000.0, 0.0)),
            star(b, 1, Point::new(5100.0, 50.0)),
        ]);
        world
    }

    #[test]
    fn empty_world_has_no_bounds() {
        let world = World::default();
        assert!(world.is_empty());
        assert_eq!(world.bounds(), None);
        assert_eq!(world.compute_bounds(), None);
        assert!(world.visible(Rect::new(-1e9, -1e9, 1e9, 1e9)).is_empty());
    }

    #[test]
    fn running_bounds_match_linear_scan() {
        let world = sample();
        assert_eq!(world.len(), 5);
        assert_eq!(world.bounds(), Some(Rect::new(-10.0, -10.0, 5100.0, 50.0)));
        assert_eq!(world.bounds(), world.compute_bounds());
        assert_eq!(world.cluster_count(), 2);
    }

    #[test]
    fn duplicate_ids_are_skipped() {
        let mut world = sample();
        let rev = world.revision();
        let added = world.append([star(Point::ORIGIN, 0, Point::new(99.0, 99.0))]);
        assert_eq!(added, 0);
        assert_eq!(world.len(), 5);
        assert_eq!(world.revision(), rev);
    }

    #[test]
    fn visible_matches_linear_filter_in_append_order() {
        let world = sample();
        for rect in [
            Rect::new(-10.0, -10.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 5000.0, 0.0),
            Rect::new(-1000.0, -1000.0, 6000.0, 1000.0),
            Rect::new(300.0, 300.0, 400.0, 400.0),
        ] {
            let fast: Vec<_> = world.visible(rect).iter().map(|s| s.id).collect();
            let slow: Vec<_> = filter(world.stars(), rect).iter().map(|s| s.id).collect();
            assert_eq!(fast, slow, "rect {rect:?}");
        }
    }

    #[test]
    fn eviction_removes_whole_clusters() {
        let mut world = sample();
        let removed = world.evict_beyond(Point::new(0.0, 0.0), 1000.0);
        assert_eq!(removed, 2);
        assert_eq!(world.len(), 3);
        assert_eq!(world.bounds(), Some(Rect::new(-10.0, -10.0, 250.0, 40.0)));
        assert!(world.visible(Rect::new(4000.0, -100.0, 6000.0, 100.0)).is_empty());
        let id = StarId {
            cluster: ClusterKey::from_anchor(Point::ORIGIN),
            slot: 2,
        };
        assert_eq!(world.get(id).map(|s| s.position), Some(Point::new(250.0, 40.0)));
    }

    #[test]
    fn eviction_ignores_bad_distance() {
        let mut world = sample();
        assert_eq!(world.evict_beyond(Point::ORIGIN, f64::NAN), 0);
        assert_eq!(world.evict_beyond(Point::ORIGIN, -1.0), 0);
        assert_eq!(world.len(), 5);
    }
}
