// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;
use starfield_view::Positioned;

use crate::source::MediaRef;

/// Identifies one cluster by the exact anchor it was generated around.
///
/// The key stores the anchor's bit patterns, so it round‑trips to the same
/// point and is `Eq + Hash` without float comparison caveats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterKey {
    x: u64,
    y: u64,
}

impl ClusterKey {
    /// Key for a cluster anchored at `anchor`.
    #[must_use]
    pub fn from_anchor(anchor: Point) -> Self {
        Self {
            x: anchor.x.to_bits(),
            y: anchor.y.to_bits(),
        }
    }

    /// The anchor this key was derived from.
    #[must_use]
    pub fn anchor(self) -> Point {
        Point::new(f64::from_bits(self.x), f64::from_bits(self.y))
    }
}

/// Identifies a star: its cluster plus its slot in the cluster's template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarId {
    /// Cluster the star was generated in.
    pub cluster: ClusterKey,
    /// Offset index within the cluster's template.
    pub slot: u16,
}

/// A positioned, renderable unit bound to a media item.
///
/// Stars are created in batches by the cluster generator and never change
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Stable identity.
    pub id: StarId,
    /// Index into the content source; always `< len` of the source it was
    /// generated from.
    pub media: MediaRef,
    /// World‑space position.
    pub position: Point,
    /// Stacking hint; larger draws on top.
    pub z: f64,
    /// Cosmetic scale factor.
    pub size: f64,
    /// Cosmetic opacity/brightness.
    pub brightness: f64,
    /// Stars of the same cluster this one is joined to.
    pub connections: SmallVec<[StarId; 4]>,
}

impl Positioned for Star {
    fn position(&self) -> Point {
        self.position
    }
}
