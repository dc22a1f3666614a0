// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starfield_gesture --heading-base-level=0

//! Starfield Gesture: state machines for canvas pan, zoom and long‑press input.
//!
//! This crate turns already‑classified pointer and touch input into camera
//! changes. Each module handles one interaction pattern:
//!
//! - [`drag`]: single‑pointer camera drags measured from the gesture start.
//! - [`pinch`]: two‑finger zoom measured from the initial finger distance.
//! - [`long_press`]: press‑and‑hold activation with an explicit deadline.
//! - [`handler`]: the [`InteractionHandler`] state machine combining the above
//!   over a tagged [`GestureEvent`] union.
//!
//! ## Design Philosophy
//!
//! - **No ambient timers**: time is a `u64` passed in by the host, and
//!   deadlines live in a [`starfield_timing::TimerQueue`]. Tests advance a
//!   number instead of sleeping.
//! - **No drift**: drags and pinches are computed against the state captured
//!   when the gesture began, never accumulated from frame deltas.
//! - **Camera‑agnostic**: the handler reads a [`CameraSnapshot`] and answers
//!   with a [`CameraCommand`]; it does not depend on any camera type.
//! - **Forgiving**: end events without a matching start are ignored.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use starfield_gesture::{CameraSnapshot, GestureEvent, InteractionHandler};
//!
//! let mut handler = InteractionHandler::default();
//! let camera = CameraSnapshot { center: Point::ORIGIN, zoom: 1.0 };
//!
//! handler.handle(GestureEvent::PressStart { position: Point::ORIGIN, target: "star" }, 0, camera);
//! assert_eq!(handler.tick(400), None);
//! assert_eq!(handler.tick(800), Some("star"));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo for float math.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

pub mod drag;
pub mod handler;
pub mod long_press;
pub mod pinch;

pub use handler::{
    CameraCommand, CameraSnapshot, GestureConfig, GestureEvent, GesturePhase, InteractionHandler,
};
