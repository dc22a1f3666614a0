// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starfield_view --heading-base-level=0

//! Starfield View: camera and viewport‑culling primitives.
//!
//! This crate provides a small, headless model of a camera looking at an
//! unbounded world plane, with view extents expressed in screen pixels. It
//! focuses on:
//! - Camera state (world‑space center + uniform zoom) that can never hold an
//!   invalid value.
//! - Coordinate conversion between world and screen space.
//! - The buffered visible world rectangle, memoized per input change.
//! - A linear reference culling predicate.
//!
//! It does **not** own any content or rendering backend. Callers are
//! expected to:
//! - Keep their own world content and spatial acceleration.
//! - Use [`Camera`] / [`ViewCuller`] to derive visible‑region bounds.
//! - Wire pointer and touch input into pan/zoom at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use starfield_view::Camera;
//!
//! let view = Size::new(800.0, 600.0);
//! let mut camera = Camera::new();
//!
//! // Drag 100px to the left at zoom 2: the camera moves 50 world units right.
//! camera.set_zoom(2.0);
//! camera.pan(Vec2::new(100.0, 0.0) / camera.zoom());
//! assert_eq!(camera.center(), Point::new(50.0, 0.0));
//!
//! // The center of the screen shows the camera center.
//! assert_eq!(camera.world_to_screen(camera.center(), view), Point::new(400.0, 300.0));
//!
//! // Zoom is clamped, even for nonsense input.
//! camera.zoom_by(-1.0);
//! assert_eq!(camera.zoom(), camera.min_zoom());
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and always anchored at the view center.
//! - Rotation is not modelled.
//! - Rect membership in [`filter`] is inclusive on all edges.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod camera;
pub mod cull;

pub use camera::{Camera, CameraDebugInfo, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
pub use cull::{Positioned, ViewCuller, contains_inclusive, filter};
