// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative background dots, fixed to the screen rather than the world.

use rand::Rng;

/// Default number of background dots.
pub const DEFAULT_BACKDROP_POINTS: usize = 200;

/// One background dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropPoint {
    /// Horizontal position as a fraction of the view width, in `[0, 1)`.
    pub left: f64,
    /// Vertical position as a fraction of the view height, in `[0, 1)`.
    pub top: f64,
    /// Diameter in pixels, in `[0, 2)`.
    pub size: f64,
    /// Opacity in `[0, 0.8)`.
    pub opacity: f64,
}

/// A fixed set of background dots, generated once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Backdrop {
    points: Vec<BackdropPoint>,
}

impl Backdrop {
    /// Generates `count` dots.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let points = (0..count)
            .map(|_| BackdropPoint {
                left: rng.random::<f64>(),
                top: rng.random::<f64>(),
                size: rng.random::<f64>() * 2.0,
                opacity: rng.random::<f64>() * 0.8,
            })
            .collect();
        Self { points }
    }

    /// The dots.
    #[must_use]
    pub fn points(&self) -> &[BackdropPoint] {
        &self.points
    }
}
