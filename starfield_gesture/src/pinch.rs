// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: two‑finger zoom measured against the initial finger distance.
//!
//! ```
//! use kurbo::Point;
//! use starfield_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! assert!(pinch.start(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.5));
//!
//! // Fingers spread to twice the distance.
//! let zoom = pinch.target_zoom(Point::new(-50.0, 0.0), Point::new(150.0, 0.0));
//! assert_eq!(zoom, Some(3.0));
//! ```

use kurbo::Point;

/// Tracks an active pinch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchState {
    /// Distance between the two contacts when the pinch started.
    pub start_distance: Option<f64>,
    /// Camera zoom when the pinch started.
    pub start_zoom: f64,
}

impl PinchState {
    /// Begins a pinch. Returns `false` (and leaves state untouched) when the
    /// contacts coincide or the distance is not finite.
    pub fn start(&mut self, first: Point, second: Point, zoom: f64) -> bool {
        let distance = first.distance(second);
        if !(distance.is_finite() && distance > 0.0) {
            return false;
        }
        self.start_distance = Some(distance);
        self.start_zoom = zoom;
        true
    }

    /// Scale factor relative to the starting distance.
    pub fn scale(&self, first: Point, second: Point) -> Option<f64> {
        let start = self.start_distance?;
        let scale = first.distance(second) / start;
        scale.is_finite().then_some(scale)
    }

    /// Zoom the camera should take for the current contact positions.
    pub fn target_zoom(&self, first: Point, second: Point) -> Option<f64> {
        self.scale(first, second).map(|s| self.start_zoom * s)
    }

    /// End the pinch.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a pinch is active.
    pub fn is_pinching(&self) -> bool {
        self.start_distance.is_some()
    }
}
