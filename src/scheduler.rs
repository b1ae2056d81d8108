//! Two-clock tick scheduler
//!
//! Drives a coarse clock (growth, lightning, firefighter) and a fine clock
//! (fire spread) from one monotonic time source. The clocks have independent
//! phases; each firing is handed back to the caller, which runs it to
//! completion before the next, so no two ticks ever overlap.

use std::time::Duration;

use crate::consts::{COARSE_PERIOD, FINE_PERIOD, MAX_CATCHUP_FIRINGS};

/// Which clock fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockKind {
    Coarse,
    Fine,
}

/// A periodic clock armed relative to the scheduler's time
#[derive(Debug, Clone, Copy)]
struct Clock {
    period: Duration,
    next_due: Duration,
}

impl Clock {
    fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: period,
        }
    }

    fn arm(&mut self, now: Duration) {
        self.next_due = now + self.period;
    }
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    running: bool,
    /// Time elapsed while running
    now: Duration,
    coarse: Clock,
    fine: Clock,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(COARSE_PERIOD, FINE_PERIOD)
    }
}

impl TickScheduler {
    pub fn new(coarse_period: Duration, fine_period: Duration) -> Self {
        debug_assert!(!coarse_period.is_zero() && !fine_period.is_zero());
        Self {
            running: false,
            now: Duration::ZERO,
            coarse: Clock::new(coarse_period),
            fine: Clock::new(fine_period),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm both clocks; first firings land one full period from now.
    /// Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.coarse.arm(self.now);
        self.fine.arm(self.now);
        true
    }

    /// Cancel both clocks. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Stop and rewind to time zero
    pub fn reset(&mut self) {
        self.running = false;
        self.now = Duration::ZERO;
        self.coarse.arm(Duration::ZERO);
        self.fine.arm(Duration::ZERO);
    }

    /// Change clock periods; takes effect from the next firing
    pub fn set_periods(&mut self, coarse: Duration, fine: Duration) {
        debug_assert!(!coarse.is_zero() && !fine.is_zero());
        self.coarse.period = coarse;
        self.fine.period = fine;
    }

    /// Let `elapsed` pass and return the firings now due, in time order.
    ///
    /// When both clocks fall due at the same instant the coarse clock fires
    /// first. Backlog beyond `MAX_CATCHUP_FIRINGS` is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ClockKind> {
        let mut fired = Vec::new();
        if !self.running {
            return fired;
        }
        self.now += elapsed;

        loop {
            let (kind, clock) = if self.coarse.next_due <= self.fine.next_due {
                (ClockKind::Coarse, &mut self.coarse)
            } else {
                (ClockKind::Fine, &mut self.fine)
            };
            if clock.next_due > self.now {
                break;
            }
            if fired.len() == MAX_CATCHUP_FIRINGS {
                log::warn!(
                    "Scheduler fell behind by {:?}, dropping backlog",
                    self.now - clock.next_due
                );
                self.coarse.arm(self.now);
                self.fine.arm(self.now);
                break;
            }
            clock.next_due += clock.period;
            fired.push(kind);
        }

        fired
    }
}
