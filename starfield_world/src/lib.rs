// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starfield_world --heading-base-level=0

//! Starfield World: an unbounded, procedurally grown constellation canvas.
//!
//! The world is a plane populated on demand with clusters of "stars", each
//! bound to one item of a media archive. Clusters are stamped from named
//! constellation templates. As the viewport approaches the edge of generated
//! space, new clusters are generated just beyond it.
//!
//! The pieces, leaf to root:
//!
//! - [`ContentSource`]: read‑only, cyclically indexed media items supplied by the host.
//! - [`PatternLibrary`]: the catalog of [`PatternTemplate`]s.
//! - [`generate_cluster`]: stamps one template around an anchor.
//! - [`World`]: every generated [`Star`], indexed by a uniform grid.
//! - [`ExpansionScheduler`]: debounced, cooled‑down, per‑direction growth.
//! - [`Engine`]: camera, culling, gestures, seeding and expansion in one facade.
//!
//! Randomness is always injected as a [`rand::Rng`], and time is always a
//! `u64` millisecond value passed in by the host. A seeded generator and a
//! hand‑advanced clock make every behavior reproducible in tests.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use starfield_gesture::GestureEvent;
//! use starfield_world::{Engine, MediaItem, WorldConfig};
//!
//! let items: Vec<MediaItem> = (0..6)
//!     .map(|i| MediaItem::new(format!("v{i}"), format!("thumbs/{i}.jpg"), format!("Video {i}")))
//!     .collect();
//! let mut engine = Engine::new(WorldConfig::default(), items, StdRng::seed_from_u64(1)).unwrap();
//! engine.set_view_size(Size::new(1280.0, 720.0), 0);
//!
//! // The world is seeded with rings of clusters around the origin.
//! assert!(!engine.world().is_empty());
//!
//! // Drag the camera a long way to the right.
//! engine.handle_gesture(GestureEvent::PanStart { position: Point::new(1000.0, 300.0) }, 10);
//! engine.handle_gesture(GestureEvent::PanMove { position: Point::new(-9000.0, 300.0) }, 20);
//! engine.handle_gesture(GestureEvent::PanEnd, 30);
//!
//! // After the debounce the world grows toward the camera.
//! let report = engine.tick(230);
//! assert!(report.expansion.is_some_and(|e| !e.is_empty()));
//!
//! let frame = engine.frame();
//! assert!(frame.stars.iter().all(|s| s.media < 6));
//! ```
//!
//! ## Logging
//!
//! Seeding, expansion and eviction are reported through [`tracing`]. The crate
//! installs no subscriber.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`WorldConfig`] and [`MediaItem`].

mod backdrop;
mod cluster;
mod config;
mod engine;
mod error;
mod expansion;
mod minimap;
pub mod pattern;
mod seed;
mod source;
mod star;
mod world;

pub use backdrop::{Backdrop, BackdropPoint, DEFAULT_BACKDROP_POINTS};
pub use cluster::{ClusterParams, Span, generate_cluster, stamp};
pub use config::WorldConfig;
pub use engine::{ActivateFn, Engine, RenderEdge, RenderFrame, RenderStar, TickReport};
pub use error::{ConfigError, GenerateError, PatternError};
pub use expansion::{
    Direction, DirectionBatch, ExpansionConfig, ExpansionInput, ExpansionReport,
    ExpansionScheduler,
};
pub use minimap::{Minimap, MinimapConfig, minimap};
pub use pattern::{PatternLibrary, PatternTemplate};
pub use seed::{SeedRings, seed_rings};
pub use source::{ContentSource, MediaItem, MediaRef};
pub use star::{ClusterKey, Star, StarId};
pub use world::{Retention, World};
