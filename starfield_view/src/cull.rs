// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible‑rect culling.
//!
//! [`ViewCuller`] derives the buffered world rectangle from a [`Camera`] and a
//! view size, recomputing only when one of its inputs changed. [`filter`] is the
//! reference membership test: a linear scan keeping every item whose position
//! lies inside the rectangle, edges included.
//!
//! ```
//! use kurbo::{Point, Size};
//! use starfield_view::{Camera, ViewCuller, filter};
//!
//! let camera = Camera::new();
//! let mut culler = ViewCuller::new(0.0);
//! assert!(culler.update(&camera, Size::new(200.0, 200.0)));
//! // Same inputs: nothing to do.
//! assert!(!culler.update(&camera, Size::new(200.0, 200.0)));
//!
//! let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(101.0, 0.0)];
//! let visible = filter(&points, culler.rect());
//! assert_eq!(visible.len(), 2);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::Camera;

/// Anything that occupies a single world‑space position.
pub trait Positioned {
    /// World‑space position used for culling.
    fn position(&self) -> Point;
}

impl Positioned for Point {
    fn position(&self) -> Point {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Point {
        (**self).position()
    }
}

/// Returns `true` if `point` lies in `rect`, all four edges inclusive.
#[must_use]
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Keeps the items whose position lies in `rect`, preserving input order.
pub fn filter<'a, T, I>(items: I, rect: Rect) -> Vec<&'a T>
where
    T: Positioned + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| contains_inclusive(rect, item.position()))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CullKey {
    center: Point,
    zoom: f64,
    view_size: Size,
    buffer: f64,
}

/// Memoized visible‑rect derivation.
#[derive(Clone, Debug)]
pub struct ViewCuller {
    buffer: f64,
    key: Option<CullKey>,
    rect: Rect,
}

impl ViewCuller {
    /// Creates a culler that grows the view by `buffer` world units per side.
    ///
    /// Negative or `NaN` buffers are treated as zero.
    #[must_use]
    pub fn new(buffer: f64) -> Self {
        Self {
            buffer: buffer.max(0.0),
            key: None,
            rect: Rect::ZERO,
        }
    }

    /// Buffer margin in world units.
    #[must_use]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Changes the buffer margin. The next [`ViewCuller::update`] recomputes.
    pub fn set_buffer(&mut self, buffer: f64) {
        self.buffer = buffer.max(0.0);
    }

    /// Recomputes the rect if the camera, view size or buffer changed.
    ///
    /// Returns `true` when the rect was recomputed and differs from the
    /// previous one.
    pub fn update(&mut self, camera: &Camera, view_size: Size) -> bool {
        let key = CullKey {
            center: camera.center(),
            zoom: camera.zoom(),
            view_size,
            buffer: self.buffer,
        };
        if self.key == Some(key) {
            return false;
        }
        self.key = Some(key);
        let rect = camera.visible_rect(view_size, self.buffer);
        let changed = rect != self.rect;
        self.rect = rect;
        changed
    }

    /// Last computed world rectangle. [`Rect::ZERO`] before the first update.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Forgets the memoized inputs so the next update always recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
