// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: derive a camera center from the pointer offset since drag start.
//!
//! Offsets are always measured against the position recorded at
//! [`DragState::start`], never accumulated frame to frame, so rounding in
//! intermediate moves cannot drift the camera.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and
//!    the camera center at that moment.
//! 2) On each move, call [`DragState::target_center`] with the current pointer
//!    position and zoom to get the new camera center.
//! 3) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use starfield_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 100.0), Point::new(0.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Pointer moved 40px right at zoom 2: the world slides 20 units right,
//! // so the camera center moves 20 units left.
//! let center = drag.target_center(Point::new(140.0, 100.0), 2.0).unwrap();
//! assert_eq!(center, Point::new(-20.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single‑pointer drag of the camera.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position when the drag started.
    pub start_pos: Option<Point>,
    /// Camera center when the drag started.
    pub start_center: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from `pos`, with the camera at `center`.
    pub fn start(&mut self, pos: Point, center: Point) {
        self.start_pos = Some(pos);
        self.start_center = Some(center);
    }

    /// Screen‑space offset from the drag start position.
    pub fn offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Camera center that keeps the grabbed world point under the pointer.
    ///
    /// Returns `None` when no drag is active or `zoom` is not a usable
    /// positive value.
    pub fn target_center(&self, pos: Point, zoom: f64) -> Option<Point> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return None;
        }
        let offset = self.offset(pos)?;
        let center = self.start_center?;
        Some(center - offset / zoom)
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.start_center = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
