//! Auto-advance timer bookkeeping.
//!
//! The timer itself lives in whatever runtime hosts the carousel. This module
//! only decides whether a timer should exist, which generation it belongs to,
//! and whether a tick that just arrived is still current. Bumping the
//! generation is how a timer gets cancelled and recreated: the host keys its
//! timer on the generation, so a new value replaces the old timer.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Armed { generation: u64 },
    Cancelled,
}

/// What the host should currently have running for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerSchedule {
    pub interval: Duration,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    state: TimerState,
    next_generation: u64,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: TimerState::Idle,
            next_generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Idle → Armed. Returns false if the timer was already armed or has been
    /// cancelled; an armed timer is never armed twice.
    pub fn arm(&mut self) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        self.state = TimerState::Armed {
            generation: self.bump(),
        };
        true
    }

    /// Replace the running timer with a fresh one. No effect unless armed.
    pub fn restart(&mut self) {
        if let TimerState::Armed { .. } = self.state {
            self.state = TimerState::Armed {
                generation: self.bump(),
            };
        }
    }

    pub fn cancel(&mut self) {
        self.state = TimerState::Cancelled;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == TimerState::Cancelled
    }

    pub fn generation(&self) -> Option<u64> {
        match self.state {
            TimerState::Armed { generation } => Some(generation),
            _ => None,
        }
    }

    /// True only for ticks from the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.generation() == Some(generation)
    }

    pub fn schedule(&self) -> Option<TimerSchedule> {
        self.generation().map(|generation| TimerSchedule {
            interval: self.interval,
            generation,
        })
    }

    fn bump(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        generation
    }
}
