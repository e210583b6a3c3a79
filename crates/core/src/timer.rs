//! Countdown state behind the quiz timer.
//!
//! The value moves by exactly one second per `tick`. Expiry is reported once,
//! on the tick that lands on zero (or the first tick of a countdown that
//! starts at zero); the counter never goes below zero.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    Expired,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    stopped: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            stopped: false,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.stopped {
            return TickOutcome::Stopped;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stopped = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Freezes the countdown without reporting expiry (explicit submit).
    pub fn halt(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_seconds_expire_on_fifth_tick_exactly_once() {
        let mut countdown = Countdown::new(5);
        let outcomes: Vec<_> = (0..8).map(|_| countdown.tick()).collect();

        assert_eq!(
            &outcomes[..5],
            &[
                TickOutcome::Running { remaining: 4 },
                TickOutcome::Running { remaining: 3 },
                TickOutcome::Running { remaining: 2 },
                TickOutcome::Running { remaining: 1 },
                TickOutcome::Expired,
            ]
        );
        assert!(outcomes[5..].iter().all(|o| *o == TickOutcome::Stopped));
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn zero_start_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Stopped);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn halted_countdown_keeps_its_value() {
        let mut countdown = Countdown::new(30);
        countdown.tick();
        countdown.halt();
        assert_eq!(countdown.tick(), TickOutcome::Stopped);
        assert_eq!(countdown.remaining(), 29);
    }
}
