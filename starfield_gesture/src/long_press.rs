// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long‑press recognition on top of an explicit timer.
//!
//! A press arms a deadline; any cancellation before the deadline disarms it.
//! [`LongPress::tick`] reports the target once the deadline passes, and only once.
//!
//! ```
//! use starfield_gesture::long_press::LongPress;
//!
//! let mut press = LongPress::new(800);
//! press.arm("star-7", 1_000);
//! assert_eq!(press.tick(1_799), None);
//! assert_eq!(press.tick(1_800), Some("star-7"));
//! assert_eq!(press.tick(5_000), None);
//! ```

use starfield_timing::TimerQueue;

/// Default hold duration before a press activates, in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 800;

/// Single‑slot long‑press recognizer.
#[derive(Clone, Debug)]
pub struct LongPress<T> {
    hold: u64,
    timers: TimerQueue<T>,
}

impl<T> LongPress<T> {
    /// Creates a recognizer that fires `hold` time units after a press.
    #[must_use]
    pub fn new(hold: u64) -> Self {
        Self {
            hold,
            timers: TimerQueue::new(),
        }
    }

    /// Hold duration.
    #[must_use]
    pub fn hold(&self) -> u64 {
        self.hold
    }

    /// Arms the recognizer for `target`, replacing any armed press.
    pub fn arm(&mut self, target: T, now: u64) {
        self.timers.clear();
        self.timers.schedule(target, now.saturating_add(self.hold));
    }

    /// Disarms the recognizer. Returns `true` if a press was armed.
    pub fn cancel(&mut self) -> bool {
        let armed = !self.timers.is_empty();
        self.timers.clear();
        armed
    }

    /// Fires the armed target if its deadline has passed.
    pub fn tick(&mut self, now: u64) -> Option<T> {
        self.timers.pop_due(now).map(|(_, target)| target)
    }

    /// Target of the armed press, if any.
    #[must_use]
    pub fn armed(&self) -> Option<&T> {
        self.timers.iter().next().map(|(_, _, target)| target)
    }

    /// Deadline of the armed press, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }
}

impl<T> Default for LongPress<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS_MS)
    }
}
