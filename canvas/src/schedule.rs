//! Debounce bookkeeping for the boundary clamp.
//!
//! The engine never owns a timer. Each re-arm hands out a ticket with a fresh
//! generation number; the host sleeps for `delay_ms` and reports the ticket
//! back. Only the newest armed generation is honoured, so re-arming or
//! cancelling invalidates every earlier ticket without touching the host's
//! timer.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// A pending clamp request handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampTicket {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Cancel-and-reschedule state for the boundary clamp.
#[derive(Debug, Clone)]
pub struct ClampSchedule {
    delay_ms: u32,
    generation: u64,
    pending: Option<u64>,
}

impl ClampSchedule {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, generation: 0, pending: None }
    }

    /// Arm (or re-arm) the clamp, superseding any earlier ticket.
    pub fn arm(&mut self) -> ClampTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        ClampTicket { generation: self.generation, delay_ms: self.delay_ms }
    }

    /// Drop any pending ticket. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume the pending ticket if `generation` is the current one.
    ///
    /// Returns `false` for stale or already-consumed tickets.
    pub fn take(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    #[cfg(test)]
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}
