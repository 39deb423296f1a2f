//! Virtual-time job queue behind every timed effect on the page.
//!
//! Nothing here touches a real clock: time only moves when the owner calls
//! [`Timeline::pop_due`] or [`Timeline::advance_clock`]. In the browser a
//! single `setTimeout` is kept armed for [`Timeline::next_due`]; in tests the
//! clock is moved by hand.

use std::collections::BTreeMap;

pub type Millis = u64;

#[derive(Debug)]
pub struct Timeline<J> {
    now: Millis,
    next_seq: u64,
    queue: BTreeMap<(Millis, u64), J>,
}

impl<J> Default for Timeline<J> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<J: PartialEq> Timeline<J> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queues `job` to run no earlier than `delay` after the current time.
    /// Jobs due at the same instant run in the order they were scheduled.
    pub fn schedule(&mut self, job: J, delay: Millis) {
        let due = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((due, seq), job);
    }

    /// Like [`Timeline::schedule`], but drops any pending copy of `job` first
    /// so the effect never has more than one callback outstanding.
    pub fn rearm(&mut self, job: J, delay: Millis) {
        self.queue.retain(|_, pending| *pending != job);
        self.schedule(job, delay);
    }

    pub fn cancel_matching(&mut self, predicate: impl Fn(&J) -> bool) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, pending| !predicate(pending));
        before - self.queue.len()
    }

    pub fn is_pending(&self, job: &J) -> bool {
        self.queue.values().any(|pending| pending == job)
    }

    pub fn due_of(&self, job: &J) -> Option<Millis> {
        self.queue
            .iter()
            .find(|(_, pending)| *pending == job)
            .map(|((due, _), _)| *due)
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Removes the earliest job due at or before `until` and moves the clock
    /// to its due time, so anything it schedules is relative to that instant.
    pub fn pop_due(&mut self, until: Millis) -> Option<J> {
        let key = *self.queue.keys().next()?;

        if key.0 > until {
            return None;
        }

        let job = self.queue.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(job)
    }

    /// Moves the clock forward without running anything. Never moves back.
    pub fn advance_clock(&mut self, to: Millis) {
        self.now = self.now.max(to);
    }
}
