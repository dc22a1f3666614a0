// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overview map of a fixed window around the origin.

use kurbo::{Point, Rect, Size};
use starfield_view::Camera;

use crate::world::World;

/// Sampling and extent of the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimapConfig {
    /// Every `stride`‑th star (in append order) is drawn. Zero is treated as one.
    pub stride: usize,
    /// Edge of the square world window, centered on the origin.
    pub extent: f64,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            stride: 20,
            extent: 10_000.0,
        }
    }
}

/// Minimap contents in normalized coordinates.
///
/// `(0, 0)` is the top‑left corner of the window and `(1, 1)` the bottom‑right.
/// Values outside `[0, 1]` lie outside the window; hosts usually clip them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Minimap {
    /// Sampled star positions.
    pub points: Vec<Point>,
    /// The camera's unbuffered viewport.
    pub viewport: Rect,
}

/// Builds the minimap for the current world and camera.
#[must_use]
pub fn minimap(world: &World, camera: &Camera, view_size: Size, config: MinimapConfig) -> Minimap {
    let extent = if config.extent.is_finite() && config.extent > 0.0 {
        config.extent
    } else {
        MinimapConfig::default().extent
    };
    let half = extent / 2.0;
    let normalize = |p: Point| Point::new((p.x + half) / extent, (p.y + half) / extent);

    let points = world
        .iter()
        .step_by(config.stride.max(1))
        .map(|s| normalize(s.position))
        .collect();
    let view = camera.visible_rect(view_size, 0.0);
    Minimap {
        points,
        viewport: Rect::from_points(normalize(view.origin()), normalize(Point::new(view.x1, view.y1))),
    }
}
