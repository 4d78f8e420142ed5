//! Cancellable timers driven by the event-loop tick

use std::time::{Duration, Instant};

/// Identity of a scheduled timer; scheduling an id again replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    /// Recurring start of a cosmetic sync pulse
    SyncCycle,
    /// One-shot end of the current sync pulse
    SyncPulseEnd,
    /// One-shot end of the celebration overlay
    CelebrationEnd,
}

#[derive(Debug, Clone)]
struct ScheduledTimer {
    id: TimerId,
    deadline: Instant,
    period: Option<Duration>,
}

/// Every timer owned by one view, in one place.
///
/// The queue holds plain deadlines; nothing fires until [`TimerQueue::poll`]
/// is called from the tick handler, so every state transition happens on the
/// event loop. Clearing the queue cancels everything at once, which is what
/// unmounting does.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<ScheduledTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer, replacing any existing timer with this id
    pub fn schedule_once(&mut self, id: TimerId, deadline: Instant) {
        self.cancel(id);
        self.timers.push(ScheduledTimer { id, deadline, period: None });
    }

    /// Schedule a repeating timer, replacing any existing timer with this id
    pub fn schedule_repeating(&mut self, id: TimerId, first: Instant, period: Duration) {
        self.cancel(id);
        self.timers.push(ScheduledTimer {
            id,
            deadline: first,
            // a zero period would spin forever in poll
            period: Some(period.max(Duration::from_millis(1))),
        });
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|timer| timer.id != id);
    }

    /// Cancel every timer; the owning view calls this on unmount
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Return the ids due at `now`, each at most once.
    ///
    /// A repeating timer that missed several periods (stalled loop,
    /// suspended machine) fires once and skips ahead to the next future
    /// deadline, so pulses never queue up behind each other.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        self.timers.retain_mut(|timer| {
            if timer.deadline > now {
                return true;
            }

            fired.push(timer.id);
            match timer.period {
                Some(period) => {
                    while timer.deadline <= now {
                        timer.deadline += period;
                    }
                    true
                }
                None => false,
            }
        });

        fired
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
