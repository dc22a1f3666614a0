// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Handle for a single scheduled timer.
///
/// Ids are unique for the lifetime of the queue that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<K> {
    deadline: u64,
    id: TimerId,
    key: K,
}

/// Ordered set of pending timers, each carrying a caller-defined key.
///
/// Entries are kept sorted by `(deadline, id)`, so timers sharing a deadline
/// fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire once `now >= deadline`.
    pub fn schedule(&mut self, key: K, deadline: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(at, Entry { deadline, id, key });
        id
    }

    /// Cancels a timer by id. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, K)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.key))
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates pending timers in firing order.
    pub fn iter(&self) -> impl Iterator<Item = (TimerId, u64, &K)> + '_ {
        self.entries.iter().map(|e| (e.id, e.deadline, &e.key))
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Cancels every timer carrying `key`, returning how many were removed.
    pub fn cancel_key(&mut self, key: &K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        before - self.entries.len()
    }

    /// Cancels any timer carrying `key` and schedules a fresh one.
    ///
    /// This is the debounce primitive: the most recent call wins.
    pub fn reschedule(&mut self, key: K, deadline: u64) -> TimerId {
        self.cancel_key(&key);
        self.schedule(key, deadline)
    }

    /// Returns `true` if a timer carrying `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Earliest deadline among timers carrying `key`.
    #[must_use]
    pub fn deadline_of(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.deadline)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TimerQueue;

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule('c', 30);
        q.schedule('a', 10);
        q.schedule('b', 10);

        let mut fired = Vec::new();
        while let Some((_, k)) = q.pop_due(100) {
            fired.push(k);
        }
        assert_eq!(fired, ['a', 'b', 'c']);
        assert!(q.is_empty());
    }

    #[test]
    fn pop_due_respects_now() {
        let mut q = TimerQueue::new();
        q.schedule(1_u8, 500);
        assert!(q.pop_due(499).is_none());
        assert_eq!(q.pop_due(500).map(|(_, k)| k), Some(1));
    }

    #[test]
    fn cancel_by_id_only_removes_that_timer() {
        let mut q = TimerQueue::new();
        let a = q.schedule("x", 10);
        let _b = q.schedule("x", 20);
        assert!(q.cancel(a));
        assert!(!q.cancel(a));
        assert_eq!(q.len(), 1);
        assert_eq!(q.deadline_of(&"x"), Some(20));
    }

    #[test]
    fn reschedule_replaces_previous_deadline() {
        let mut q = TimerQueue::new();
        q.reschedule("debounce", 200);
        q.reschedule("debounce", 260);
        assert_eq!(q.len(), 1);
        assert_eq!(q.deadline_of(&"debounce"), Some(260));
        assert!(q.pop_due(250).is_none());
    }

    #[test]
    fn cancel_key_reports_removed_count() {
        let mut q = TimerQueue::new();
        q.schedule(7_u32, 1);
        q.schedule(7, 2);
        q.schedule(8, 3);
        assert_eq!(q.cancel_key(&7), 2);
        assert_eq!(q.cancel_key(&7), 0);
        assert!(q.is_pending(&8));
    }
}
