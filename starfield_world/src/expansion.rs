// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion scheduler: grow the world toward wherever the viewport is heading.
//!
//! View changes are debounced; when the debounce expires, one expansion pass
//! checks each side of the visible rect against the world bounds and generates
//! new clusters just past every side the viewport is approaching. A global
//! cooldown spaces passes apart, and a per‑direction in‑flight flag keeps a
//! side from being expanded again until its hold timer releases it. Requests
//! that hit either guard are dropped, not queued.
//!
//! All timers live in a [`TimerQueue`] owned by the scheduler and are driven by
//! the caller's clock through [`ExpansionScheduler::tick`].

use core::fmt;

use kurbo::{Point, Rect, Vec2};
use rand::Rng;
use smallvec::SmallVec;
use starfield_timing::TimerQueue;

use crate::cluster::{ClusterParams, generate_cluster};
use crate::pattern::PatternLibrary;
use crate::source::ContentSource;
use crate::world::World;

/// A side of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Negative x.
    Left,
    /// Positive x.
    Right,
    /// Negative y.
    Top,
    /// Positive y.
    Bottom,
}

impl Direction {
    /// Every direction, in the order an expansion pass visits them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Stable index in `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Bottom => 3,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Returns `true` if `visible` reaches within `margin` of `bounds` on this side.
    ///
    /// An empty world (`bounds == None`) is near on every side.
    #[must_use]
    pub fn is_near(self, visible: Rect, bounds: Option<Rect>, margin: f64) -> bool {
        let Some(b) = bounds else {
            return true;
        };
        match self {
            Self::Left => visible.x0 < b.x0 + margin,
            Self::Right => visible.x1 > b.x1 - margin,
            Self::Top => visible.y0 < b.y0 + margin,
            Self::Bottom => visible.y1 > b.y1 - margin,
        }
    }

    /// Point `offset` units beyond the visible rect's edge on this side,
    /// aligned with `center` on the other axis.
    ///
    /// New content lands just past what the viewport can see, wherever the
    /// world's generated edge currently is.
    #[must_use]
    pub fn anchor(self, visible: Rect, center: Point, offset: f64) -> Point {
        match self {
            Self::Left => Point::new(visible.x0 - offset, center.y),
            Self::Right => Point::new(visible.x1 + offset, center.y),
            Self::Top => Point::new(center.x, visible.y0 - offset),
            Self::Bottom => Point::new(center.x, visible.y1 + offset),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing and placement knobs for [`ExpansionScheduler`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionConfig {
    /// Delay after the last view change before a pass runs, in milliseconds.
    pub debounce_ms: u64,
    /// Minimum time between two productive passes, in milliseconds.
    pub cooldown_ms: u64,
    /// How long a direction stays in flight after it expanded, in milliseconds.
    pub hold_ms: u64,
    /// Distance from the world bound at which a side counts as near.
    pub margin: f64,
    /// How far beyond the bound new anchors are placed.
    pub offset: f64,
    /// Full width of the uniform jitter applied to each anchor, per axis.
    pub jitter: f64,
    /// Clusters generated per expanded direction.
    pub clusters_per_direction: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            cooldown_ms: 500,
            hold_ms: 1000,
            margin: 500.0,
            offset: 500.0,
            jitter: 800.0,
            clusters_per_direction: 3,
        }
    }
}

/// What one direction contributed to a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionBatch {
    /// Side that was expanded.
    pub direction: Direction,
    /// Clusters generated.
    pub clusters: usize,
    /// Stars generated.
    pub stars: usize,
}

/// Outcome of one expansion pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Directions that were expanded, in pass order.
    pub batches: SmallVec<[DirectionBatch; 4]>,
    /// Near directions skipped because they were still in flight.
    pub skipped_in_flight: SmallVec<[Direction; 4]>,
    /// The whole pass was dropped because the cooldown had not elapsed.
    pub dropped_for_cooldown: bool,
    /// Stars actually appended to the world.
    pub appended: usize,
}

impl ExpansionReport {
    /// Returns `true` if nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Batch for `direction`, if it was expanded.
    #[must_use]
    pub fn batch(&self, direction: Direction) -> Option<&DirectionBatch> {
        self.batches.iter().find(|b| b.direction == direction)
    }
}

/// Everything a pass reads besides the world and the random source.
#[derive(Debug)]
pub struct ExpansionInput<'a, S: ?Sized> {
    /// Current buffered visible rect.
    pub visible: Rect,
    /// Current camera center.
    pub center: Point,
    /// Templates to stamp.
    pub library: &'a PatternLibrary,
    /// Random ranges for each cluster.
    pub params: &'a ClusterParams,
    /// Media to bind new stars to.
    pub source: &'a S,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchedulerTimer {
    Debounce,
    Release(Direction),
}

/// Debounced, cooled‑down, per‑direction deduplicated world growth.
#[derive(Clone, Debug)]
pub struct ExpansionScheduler {
    config: ExpansionConfig,
    timers: TimerQueue<SchedulerTimer>,
    in_flight: [bool; 4],
    last_expansion: Option<u64>,
}

impl Default for ExpansionScheduler {
    fn default() -> Self {
        Self::new(ExpansionConfig::default())
    }
}

impl ExpansionScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new(config: ExpansionConfig) -> Self {
        Self {
            config,
            timers: TimerQueue::new(),
            in_flight: [false; 4],
            last_expansion: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Returns `true` while `direction` is held after an expansion.
    #[must_use]
    pub fn is_in_flight(&self, direction: Direction) -> bool {
        self.in_flight[direction.index()]
    }

    /// Time of the last productive pass.
    #[must_use]
    pub fn last_expansion(&self) -> Option<u64> {
        self.last_expansion
    }

    /// When the pending debounced pass will run, if one is pending.
    #[must_use]
    pub fn debounce_deadline(&self) -> Option<u64> {
        self.timers.deadline_of(&SchedulerTimer::Debounce)
    }

    /// When `direction` will be released, if it is held.
    #[must_use]
    pub fn release_deadline(&self, direction: Direction) -> Option<u64> {
        self.timers.deadline_of(&SchedulerTimer::Release(direction))
    }

    /// Earliest pending timer of any kind.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Records a visible‑rect change; the pass runs `debounce_ms` after the
    /// latest notification.
    pub fn notify_view_changed(&mut self, now: u64) {
        let deadline = now.saturating_add(self.config.debounce_ms);
        self.timers.reschedule(SchedulerTimer::Debounce, deadline);
    }

    /// Fires every timer due at `now`, running a pass if the debounce expired.
    ///
    /// Returns the report of that pass, if one ran.
    pub fn tick<S, R>(
        &mut self,
        now: u64,
        input: &ExpansionInput<'_, S>,
        world: &mut World,
        rng: &mut R,
    ) -> Option<ExpansionReport>
    where
        S: ContentSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut report = None;
        while let Some((_, timer)) = self.timers.pop_due(now) {
            match timer {
                SchedulerTimer::Release(direction) => {
                    self.in_flight[direction.index()] = false;
                    tracing::trace!(%direction, "expansion hold released");
                }
                SchedulerTimer::Debounce => {
                    report = Some(self.expand(now, input, world, rng));
                }
            }
        }
        report
    }

    /// Runs one expansion pass immediately.
    pub fn expand<S, R>(
        &mut self,
        now: u64,
        input: &ExpansionInput<'_, S>,
        world: &mut World,
        rng: &mut R,
    ) -> ExpansionReport
    where
        S: ContentSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut report = ExpansionReport::default();
        let count = input.source.len();
        if count == 0 {
            tracing::trace!("expansion skipped: content source is empty");
            return report;
        }
        if self
            .last_expansion
            .is_some_and(|last| now.saturating_sub(last) < self.config.cooldown_ms)
        {
            tracing::trace!(now, last = ?self.last_expansion, "expansion dropped: cooling down");
            report.dropped_for_cooldown = true;
            return report;
        }

        let bounds = world.bounds();
        let mut batch = Vec::new();
        for direction in Direction::ALL {
            if !direction.is_near(input.visible, bounds, self.config.margin) {
                continue;
            }
            if self.in_flight[direction.index()] {
                tracing::trace!(%direction, "expansion dropped: direction in flight");
                report.skipped_in_flight.push(direction);
                continue;
            }
            self.in_flight[direction.index()] = true;
            self.timers.schedule(
                SchedulerTimer::Release(direction),
                now.saturating_add(self.config.hold_ms),
            );

            let base = direction.anchor(input.visible, input.center, self.config.offset);
            let mut clusters = 0;
            let mut stars = 0;
            for _ in 0..self.config.clusters_per_direction {
                let jitter = Vec2::new(
                    (rng.random::<f64>() - 0.5) * self.config.jitter,
                    (rng.random::<f64>() - 0.5) * self.config.jitter,
                );
                let start = rng.random_range(0..count);
                match generate_cluster(
                    input.library,
                    input.params,
                    base + jitter,
                    input.source,
                    start,
                    rng,
                ) {
                    Ok(generated) => {
                        clusters += 1;
                        stars += generated.len();
                        batch.extend(generated);
                    }
                    Err(err) => tracing::warn!(%direction, %err, "cluster generation failed"),
                }
            }
            tracing::debug!(%direction, clusters, stars, "expanding world");
            report.batches.push(DirectionBatch {
                direction,
                clusters,
                stars,
            });
        }

        report.appended = world.append(batch);
        if report.appended > 0 {
            self.last_expansion = Some(now);
        }
        report
    }

    /// Cancels every timer and clears all guards.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.in_flight = [false; 4];
        self.last_expansion = None;
    }
}
