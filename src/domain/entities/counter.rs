//! Named running counters kept in the key-value store.

use std::fmt;

/// A running total stored as a decimal string under a well-known key.
///
/// Counters are created on first increment (an absent key reads as zero) and
/// never deleted. Increments are read-then-write without isolation, so
/// concurrent writers can lose updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunningCounter {
    TotalClicks,
    TotalVisitors,
}

impl RunningCounter {
    /// Store key holding the counter value.
    pub const fn key(self) -> &'static str {
        match self {
            RunningCounter::TotalClicks => "total_clicks",
            RunningCounter::TotalVisitors => "total_visitors",
        }
    }
}

impl fmt::Display for RunningCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
