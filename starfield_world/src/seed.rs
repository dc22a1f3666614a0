// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial layout: concentric rings of clusters around the origin.

use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use rand::Rng;

use crate::cluster::{ClusterParams, generate_cluster};
use crate::error::GenerateError;
use crate::pattern::PatternLibrary;
use crate::source::ContentSource;
use crate::world::World;

/// Ring layout used to seed an empty world.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedRings {
    /// Radius step between rings; the first ring has radius zero.
    pub ring_step: f64,
    /// Rings are generated while the radius stays below this value.
    pub max_radius: f64,
    /// Approximate arc length between clusters on a ring.
    pub spacing: f64,
    /// Full width of the uniform jitter applied to each anchor, per axis.
    pub jitter: f64,
}

impl Default for SeedRings {
    fn default() -> Self {
        Self {
            ring_step: 800.0,
            max_radius: 3000.0,
            spacing: 600.0,
            jitter: 200.0,
        }
    }
}

impl SeedRings {
    /// Number of clusters placed on the ring of radius `r`; at least one.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ring counts are small and non-negative after the max"
    )]
    pub fn clusters_on_ring(&self, r: f64) -> usize {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return 1;
        }
        (TAU * r / self.spacing).floor().max(1.0) as usize
    }

    /// Radii of every ring, innermost first.
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        let step = if self.ring_step.is_finite() && self.ring_step > 0.0 {
            Some(self.ring_step)
        } else {
            None
        };
        let mut next = Some(0.0);
        core::iter::from_fn(move || {
            let r = next?;
            let inside = r < self.max_radius;
            if r > 0.0 && !inside {
                return None;
            }
            next = step.map(|s| r + s);
            Some(r)
        })
    }
}

/// Fills `world` with the ring layout and returns the number of stars added.
///
/// Media indices are handed out consecutively: each cluster starts where the
/// previous one stopped, wrapping around the source.
pub fn seed_rings<S, R>(
    world: &mut World,
    library: &PatternLibrary,
    params: &ClusterParams,
    rings: &SeedRings,
    source: &S,
    rng: &mut R,
) -> Result<usize, GenerateError>
where
    S: ContentSource + ?Sized,
    R: Rng + ?Sized,
{
    let count = source.len();
    if count == 0 {
        tracing::warn!("cannot seed the world from an empty content source");
        return Err(GenerateError::EmptySource);
    }

    let mut batch = Vec::new();
    let mut start = 0;
    let mut clusters = 0_usize;
    for r in rings.radii() {
        let n = rings.clusters_on_ring(r);
        for i in 0..n {
            let angle = TAU * i as f64 / n as f64;
            let jitter = Vec2::new(
                (rng.random::<f64>() - 0.5) * rings.jitter,
                (rng.random::<f64>() - 0.5) * rings.jitter,
            );
            let anchor = Point::new(r * angle.cos(), r * angle.sin()) + jitter;
            let stars = generate_cluster(library, params, anchor, source, start, rng)?;
            start = (start + stars.len()) % count;
            clusters += 1;
            batch.extend(stars);
        }
    }

    let added = world.append(batch);
    tracing::info!(clusters, stars = added, "seeded initial rings");
    Ok(added)
}
