//! Counter behind the simulated processing bar.
//!
//! The web crate drives one of these from an interval timer; keeping the
//! stepping rules here makes the exactly-once completion guarantee
//! testable without a browser.

/// Percentage step applied on every tick.
pub const STEP: u8 = 10;

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// New percentage, still short of 100.
    Running(u8),
    /// Reached 100 on this tick. Reported at most once per run.
    Complete,
    /// The run already completed; the caller should have cancelled its
    /// timer, so this indicates a stray tick.
    Finished,
}

/// Monotonically non-decreasing percentage in [0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressTicker {
    percent: u8,
    done: bool,
}

impl ProgressTicker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            percent: 0,
            done: false,
        }
    }

    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one step. Saturates at 100 and reports `Complete`
    /// exactly once; any tick after that is `Finished` and changes
    /// nothing.
    pub fn advance(&mut self) -> Tick {
        if self.done {
            return Tick::Finished;
        }
        self.percent = self.percent.saturating_add(STEP).min(100);
        if self.percent >= 100 {
            self.done = true;
            Tick::Complete
        } else {
            Tick::Running(self.percent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_completes_exactly_once_at_100() {
        let mut ticker = ProgressTicker::new();
        let mut completions = 0;
        for _ in 0..20 {
            match ticker.advance() {
                Tick::Complete => completions += 1,
                Tick::Running(_) | Tick::Finished => {}
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(ticker.percent(), 100);
        assert!(ticker.is_done());
    }

    #[test]
    fn progress_is_monotonic() {
        let mut ticker = ProgressTicker::new();
        let mut last = 0;
        while !ticker.is_done() {
            let _ = ticker.advance();
            assert!(ticker.percent() >= last);
            last = ticker.percent();
        }
    }

    #[test]
    fn completes_on_tenth_tick() {
        let mut ticker = ProgressTicker::new();
        for tick in 1..=9 {
            assert_eq!(ticker.advance(), Tick::Running(tick * STEP));
        }
        assert_eq!(ticker.advance(), Tick::Complete);
        assert_eq!(ticker.advance(), Tick::Finished);
        assert_eq!(ticker.percent(), 100);
    }
}
