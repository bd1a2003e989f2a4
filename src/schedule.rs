/*
 * Schedule Module
 *
 * One-shot timers on a logical clock. The application feeds the elapsed time
 * since startup into `poll`, which hands back every event whose deadline has
 * passed together with that deadline, so follow-up timers can be measured
 * from when an event was due rather than when it was noticed. Tests drive the
 * same clock by hand.
 *
 * Debouncing is explicit: cancel the pending handle, then schedule again.
 */

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub struct Scheduler<E> {
    // Keyed by deadline, then insertion order
    timers: BTreeMap<(Duration, u64), E>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            timers: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert((now + delay, id), event);
        TimerHandle(id)
    }

    /// Drop a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.timers.keys().find(|(_, id)| *id == handle.0).copied();
        match key {
            Some(key) => self.timers.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.keys().any(|(_, id)| *id == handle.0)
    }

    /// Remove and return every event due at or before `now`, earliest first,
    /// each paired with the deadline it was scheduled for.
    pub fn poll(&mut self, now: Duration) -> Vec<(Duration, E)> {
        // Ids never reach u64::MAX, so this splits just past `now`
        let later = self.timers.split_off(&(now, u64::MAX));
        let due = std::mem::replace(&mut self.timers, later);
        due.into_iter()
            .map(|((deadline, _), event)| (deadline, event))
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
