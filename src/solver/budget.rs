//! Wall-clock budgets for long-running evaluation
//!
//! A budget is checked by extrapolating the elapsed time over the fraction of work
//! done. Once the projection exceeds the limit the computation is abandoned and
//! reported as [`Infeasible`] instead of returning partial results.

use std::fmt;
use std::time::{Duration, Instant};

/// Time allowance for one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Hard ceiling on the projected running time
    pub limit: Duration,
    /// Elapsed time before projections are trusted
    pub warmup: Duration,
}

impl Budget {
    /// Budget with the default warmup of a tenth of the limit, capped at five seconds
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            warmup: (limit / 10).min(Duration::from_secs(5)),
        }
    }

    /// Budget that never aborts
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            limit: Duration::MAX,
            warmup: Duration::MAX,
        }
    }

    /// Start the clock
    #[must_use]
    pub fn start(self) -> Deadline {
        Deadline {
            budget: self,
            started: Instant::now(),
        }
    }
}

impl Default for Budget {
    /// Two minutes, the same allowance the exhaustive opening analysis gets
    fn default() -> Self {
        Self::new(Duration::from_secs(120))
    }
}

/// A running budget
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    budget: Budget,
    started: Instant,
}

impl Deadline {
    /// Time since the clock started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Projected total running time after completing `done` of `total` units
    ///
    /// Returns `None` before any unit is complete.
    #[must_use]
    pub fn projected(&self, done: usize, total: usize) -> Option<Duration> {
        if done == 0 {
            return None;
        }
        let elapsed = self.elapsed().as_secs_f64();
        Some(
            Duration::try_from_secs_f64(elapsed * total as f64 / done as f64)
                .unwrap_or(Duration::MAX),
        )
    }

    /// Check whether the work should be abandoned
    ///
    /// True once the elapsed time reaches the limit, or once the warmup has passed and
    /// the projection for finishing `total` units exceeds the limit.
    #[must_use]
    pub fn exceeded(&self, done: usize, total: usize) -> bool {
        let elapsed = self.elapsed();
        if elapsed >= self.budget.limit {
            return true;
        }
        if elapsed < self.budget.warmup {
            return false;
        }
        self.projected(done, total)
            .is_some_and(|projected| projected > self.budget.limit)
    }

    /// Build the error describing why the work was abandoned
    #[must_use]
    pub fn infeasible(&self, done: usize, total: usize) -> Infeasible {
        Infeasible {
            elapsed: self.elapsed(),
            projected: self.projected(done, total),
            limit: self.budget.limit,
        }
    }
}

/// An evaluation that would not finish within its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infeasible {
    pub elapsed: Duration,
    pub projected: Option<Duration>,
    pub limit: Duration,
}

impl fmt::Display for Infeasible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.projected {
            Some(projected) => write!(
                f,
                "projected {:.1}s exceeds the {:.1}s budget",
                projected.as_secs_f64(),
                self.limit.as_secs_f64()
            ),
            None => write!(
                f,
                "no progress within the {:.1}s budget",
                self.limit.as_secs_f64()
            ),
        }
    }
}

impl std::error::Error for Infeasible {}
