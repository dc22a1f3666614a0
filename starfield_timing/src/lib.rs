// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starfield_timing --heading-base-level=0

//! Starfield Timing: host-agnostic timer queue primitives.
//!
//! Interactive canvases are full of small timers: a debounce before streaming
//! new content in, a cooldown between expansions, a hold window that keeps a
//! request from being issued twice, a long-press deadline. This crate models
//! them as explicit, inspectable entries in a [`TimerQueue`] instead of
//! ambient callbacks scheduled on some runtime.
//!
//! The queue never reads a clock. Callers pass a monotonically increasing
//! `now` (milliseconds in practice, but any `u64` unit works) when they
//! schedule and when they poll:
//!
//! ```rust
//! use starfield_timing::TimerQueue;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Task {
//!     Debounce,
//!     Release(u8),
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Task::Release(0), 1_000);
//! timers.reschedule(Task::Debounce, 200);
//! // A newer notification pushes the debounce out again.
//! timers.reschedule(Task::Debounce, 350);
//!
//! assert_eq!(timers.next_deadline(), Some(350));
//! assert!(timers.pop_due(300).is_none());
//!
//! let (_, task) = timers.pop_due(400).unwrap();
//! assert_eq!(task, Task::Debounce);
//! assert!(timers.is_pending(&Task::Release(0)));
//! ```
//!
//! Because deadlines are plain numbers, state machines built on top of the
//! queue can be unit-tested by advancing `now` instead of sleeping.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
