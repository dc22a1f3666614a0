// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cluster generation: stamp a template around an anchor and bind its slots to media.
//!
//! ```
//! use kurbo::Point;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use starfield_world::{ClusterParams, MediaItem, PatternLibrary, generate_cluster};
//!
//! let items: Vec<MediaItem> = (0..6)
//!     .map(|i| MediaItem::new(format!("v{i}"), format!("thumb/{i}.jpg"), format!("Video {i}")))
//!     .collect();
//! let mut rng = StdRng::seed_from_u64(7);
//! let stars = generate_cluster(
//!     &PatternLibrary::builtin(),
//!     &ClusterParams::default(),
//!     Point::new(0.0, 0.0),
//!     &items,
//!     4,
//!     &mut rng,
//! )
//! .unwrap();
//!
//! assert!(!stars.is_empty() && stars.len() <= 6);
//! assert_eq!(stars[0].media, 4);
//! assert!(stars.iter().all(|s| s.media < items.len()));
//! ```

use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use rand::Rng;
use smallvec::SmallVec;

use crate::error::GenerateError;
use crate::pattern::{PatternLibrary, PatternTemplate};
use crate::source::{ContentSource, MediaRef};
use crate::star::{ClusterKey, Star, StarId};

/// Half‑open sampling range `[lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Inclusive lower bound.
    pub lo: f64,
    /// Exclusive upper bound.
    pub hi: f64,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Returns `true` if both ends are finite and `lo <= hi`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    /// Draws a value; a degenerate span always yields `lo`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.lo + rng.random::<f64>() * (self.hi - self.lo)
    }
}

/// Random ranges used when stamping a cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterParams {
    /// Uniform scale applied to template offsets.
    pub scale: Span,
    /// Rotation in radians.
    pub rotation: Span,
    /// Stacking hint.
    pub z: Span,
    /// Cosmetic size jitter.
    pub size: Span,
    /// Cosmetic brightness jitter.
    pub brightness: Span,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            scale: Span::new(2.0, 4.0),
            rotation: Span::new(0.0, TAU),
            z: Span::new(0.0, 100.0),
            size: Span::new(0.8, 1.2),
            brightness: Span::new(0.7, 1.0),
        }
    }
}

/// Generates one cluster around `anchor` with a randomly chosen template.
///
/// Slot `i` of the template is bound to media `start + i`. Slots that would run
/// past the end of the source are skipped, so a start near the end of the
/// source gives a shorter cluster and no cluster shows the same item twice.
/// The result is not appended anywhere; the caller owns it.
pub fn generate_cluster<S, R>(
    library: &PatternLibrary,
    params: &ClusterParams,
    anchor: Point,
    source: &S,
    start: MediaRef,
    rng: &mut R,
) -> Result<Vec<Star>, GenerateError>
where
    S: ContentSource + ?Sized,
    R: Rng + ?Sized,
{
    let template = library.choose(rng);
    stamp(template, params, anchor, source, start, rng)
}

/// Generates one cluster from a specific template.
pub fn stamp<S, R>(
    template: &PatternTemplate,
    params: &ClusterParams,
    anchor: Point,
    source: &S,
    start: MediaRef,
    rng: &mut R,
) -> Result<Vec<Star>, GenerateError>
where
    S: ContentSource + ?Sized,
    R: Rng + ?Sized,
{
    let count = source.len();
    if count == 0 {
        tracing::warn!(?anchor, "cluster requested with an empty content source");
        return Err(GenerateError::EmptySource);
    }

    let scale = params.scale.sample(rng);
    let (sin, cos) = params.rotation.sample(rng).sin_cos();
    let cluster = ClusterKey::from_anchor(anchor);
    let first = start % count;
    let slots = template
        .offsets
        .len()
        .min(count - first)
        .min(usize::from(u16::MAX));

    let mut stars: Vec<Star> = template.offsets[..slots]
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let rotated = Vec2::new(
                offset.x * cos - offset.y * sin,
                offset.x * sin + offset.y * cos,
            );
            Star {
                id: StarId {
                    cluster,
                    slot: slot_u16(i),
                },
                media: (first + i) % count,
                position: anchor + rotated * scale,
                z: params.z.sample(rng),
                size: params.size.sample(rng),
                brightness: params.brightness.sample(rng),
                connections: SmallVec::new(),
            }
        })
        .collect();

    for &(from, to) in template.edges {
        if from < stars.len() && to < stars.len() {
            let target = stars[to].id;
            stars[from].connections.push(target);
        }
    }

    Ok(stars)
}

fn slot_u16(i: usize) -> u16 {
    u16::try_from(i).unwrap_or(u16::MAX)
}
