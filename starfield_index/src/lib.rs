// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starfield_index --heading-base-level=0

//! Starfield Index: a sparse uniform grid over point entries.
//!
//! Streaming worlds grow without bound, so visibility queries that scan every
//! entry get slower the longer a session runs. [`GridIndex`] buckets entries
//! into square cells keyed by integer cell coordinates and answers rectangle
//! queries by visiting only the cells the rectangle covers.
//!
//! - Only occupied cells are stored, so far‑apart content costs nothing in between.
//! - Rect queries are inclusive on every edge and match a plain linear scan exactly.
//! - When a query rect covers more cells than are occupied (far zoom‑out), the
//!   occupied cells are walked instead.
//! - Entries can be removed, which is what makes eviction of far‑away content
//!   possible.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use starfield_index::GridIndex;
//!
//! let mut grid = GridIndex::new(100.0);
//! grid.insert("near", Point::new(10.0, 10.0));
//! grid.insert("far", Point::new(5_000.0, 0.0));
//!
//! let hits = grid.query_rect(Rect::new(-50.0, -50.0, 50.0, 50.0));
//! assert_eq!(hits, ["near"]);
//!
//! assert!(grid.remove(&"far", Point::new(5_000.0, 0.0)));
//! assert_eq!(grid.len(), 1);
//! ```
//!
//! Float inputs are expected to be finite; non‑finite positions are rejected on insert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;

pub use grid::{DEFAULT_CELL_SIZE, GridIndex};
