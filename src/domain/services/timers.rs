//! Virtual-time timer queue
//!
//! Every timer in folio (progress ticks, stage delays, star spawns) is an entry
//! in a `TimerQueue` owned by the component that needs it. Time is a
//! `Duration` since the session was mounted and only moves when the owner
//! calls [`TimerQueue::pop_due`] / [`TimerQueue::advance_to`], so tests can drive
//! it exactly and a real event loop can sleep until [`TimerQueue::next_due`].

use std::time::Duration;

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

/// Single-threaded timer scheduler over a virtual clock
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` after the current time.
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TimerId {
        self.push(delay, None, task)
    }

    /// Run `task` every `period`, first firing one period from now.
    ///
    /// A zero period is raised to one millisecond.
    pub fn schedule_repeating(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), task)
    }

    /// Cancel a timer. Cancelling an unknown or already-fired timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deadline of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            period,
            task,
        });
        id
    }

    fn earliest_due_index(&self, until: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so anything the caller
    /// schedules while handling it is relative to the moment it fired.
    /// Repeating timers are re-armed one period later under the same id.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let index = self.earliest_due_index(until)?;
        let due = self.entries[index].due;
        self.advance_to(due);

        match self.entries[index].period {
            Some(period) => {
                let entry = &mut self.entries[index];
                entry.due += period;
                Some((entry.id, entry.task.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(index);
                Some((entry.id, entry.task))
            }
        }
    }
}
