//! Simulated-time instants and durations with femtosecond precision.
//!
//! [`SimTime`] is the discrete, explicitly-advanced time axis owned by the
//! external simulator; it only moves forward, and only through an explicit
//! wait. [`SimDuration`] is the (amount, unit) quantum passed to a wait
//! request, parseable from strings like `"2ns"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Femtoseconds per picosecond.
pub const FS_PER_PS: u64 = 1_000;
/// Femtoseconds per nanosecond.
pub const FS_PER_NS: u64 = 1_000_000;
/// Femtoseconds per microsecond.
pub const FS_PER_US: u64 = 1_000_000_000;
/// Femtoseconds per millisecond.
pub const FS_PER_MS: u64 = 1_000_000_000_000;

/// A simulated-time unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Femtoseconds.
    Fs,
    /// Picoseconds.
    Ps,
    /// Nanoseconds.
    Ns,
    /// Microseconds.
    Us,
    /// Milliseconds.
    Ms,
}

impl TimeUnit {
    /// Returns the number of femtoseconds in one of this unit.
    pub fn fs_per(self) -> u64 {
        match self {
            TimeUnit::Fs => 1,
            TimeUnit::Ps => FS_PER_PS,
            TimeUnit::Ns => FS_PER_NS,
            TimeUnit::Us => FS_PER_US,
            TimeUnit::Ms => FS_PER_MS,
        }
    }

    /// Returns the unit's conventional suffix (`"ns"`, `"ps"`, ...).
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Fs => "fs",
            TimeUnit::Ps => "ps",
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error type for parsing duration strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDurationError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid duration: '{}'", self.input)
    }
}

impl std::error::Error for ParseDurationError {}

/// A simulated-time quantum: an amount of a [`TimeUnit`].
///
/// This is the argument to a wait request. The amount is kept alongside its
/// unit (rather than pre-flattened to femtoseconds) so the runner can pass
/// the original quantum through to backend tools verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimDuration {
    /// The number of units.
    pub amount: u64,
    /// The unit of the amount.
    pub unit: TimeUnit,
}

impl SimDuration {
    /// Creates a duration from an amount and unit.
    pub fn new(amount: u64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    /// Creates a nanosecond duration.
    pub fn from_ns(ns: u64) -> Self {
        Self::new(ns, TimeUnit::Ns)
    }

    /// Returns the duration in femtoseconds.
    pub fn as_fs(self) -> u64 {
        self.amount * self.unit.fs_per()
    }
}

impl fmt::Display for SimDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

impl FromStr for SimDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseDurationError {
            input: s.to_string(),
        };

        let lower = s.to_ascii_lowercase();
        for unit in [
            TimeUnit::Ms,
            TimeUnit::Us,
            TimeUnit::Ns,
            TimeUnit::Ps,
            TimeUnit::Fs,
        ] {
            if let Some(num) = lower.strip_suffix(unit.suffix()) {
                let amount: u64 = num.trim().parse().map_err(|_| err())?;
                return Ok(SimDuration::new(amount, unit));
            }
        }

        // Bare number — interpreted as nanoseconds, the example's convention
        let amount: u64 = s.parse().map_err(|_| err())?;
        Ok(SimDuration::from_ns(amount))
    }
}

/// A simulated-time instant with femtosecond resolution.
///
/// Instants are produced only by the DUT boundary's advance operation;
/// nothing in the harness observes time without waiting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTime {
    /// Simulated time in femtoseconds.
    pub fs: u64,
}

impl SimTime {
    /// Creates the time-zero instant.
    pub fn zero() -> Self {
        Self { fs: 0 }
    }

    /// Creates an instant from a femtosecond value.
    pub fn from_fs(fs: u64) -> Self {
        Self { fs }
    }

    /// Returns the instant reached after waiting `d` from this one.
    pub fn after(self, d: SimDuration) -> Self {
        Self {
            fs: self.fs + d.as_fs(),
        }
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fs = self.fs;
        if fs == 0 {
            write!(f, "0 fs")
        } else if fs >= FS_PER_MS && fs % FS_PER_MS == 0 {
            write!(f, "{} ms", fs / FS_PER_MS)
        } else if fs >= FS_PER_US && fs % FS_PER_US == 0 {
            write!(f, "{} us", fs / FS_PER_US)
        } else if fs >= FS_PER_NS && fs % FS_PER_NS == 0 {
            write!(f, "{} ns", fs / FS_PER_NS)
        } else if fs >= FS_PER_PS && fs % FS_PER_PS == 0 {
            write!(f, "{} ps", fs / FS_PER_PS)
        } else {
            write!(f, "{fs} fs")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_fs_per() {
        assert_eq!(TimeUnit::Fs.fs_per(), 1);
        assert_eq!(TimeUnit::Ps.fs_per(), 1_000);
        assert_eq!(TimeUnit::Ns.fs_per(), 1_000_000);
        assert_eq!(TimeUnit::Us.fs_per(), 1_000_000_000);
        assert_eq!(TimeUnit::Ms.fs_per(), 1_000_000_000_000);
    }

    #[test]
    fn duration_as_fs() {
        assert_eq!(SimDuration::from_ns(2).as_fs(), 2_000_000);
        assert_eq!(SimDuration::new(5, TimeUnit::Ps).as_fs(), 5_000);
    }

    #[test]
    fn parse_ns() {
        let d: SimDuration = "2ns".parse().unwrap();
        assert_eq!(d, SimDuration::from_ns(2));
    }

    #[test]
    fn parse_with_space() {
        let d: SimDuration = "100 us".parse().unwrap();
        assert_eq!(d, SimDuration::new(100, TimeUnit::Us));
    }

    #[test]
    fn parse_case_insensitive() {
        let d: SimDuration = "3NS".parse().unwrap();
        assert_eq!(d, SimDuration::from_ns(3));
    }

    #[test]
    fn parse_bare_number_is_ns() {
        let d: SimDuration = "7".parse().unwrap();
        assert_eq!(d, SimDuration::from_ns(7));
    }

    #[test]
    fn parse_fs() {
        let d: SimDuration = "500fs".parse().unwrap();
        assert_eq!(d, SimDuration::new(500, TimeUnit::Fs));
    }

    #[test]
    fn parse_invalid() {
        assert!("fast".parse::<SimDuration>().is_err());
        assert!("".parse::<SimDuration>().is_err());
        assert!("2 lightyears".parse::<SimDuration>().is_err());
    }

    #[test]
    fn parse_error_display() {
        let err = "bogus".parse::<SimDuration>().unwrap_err();
        assert_eq!(err.to_string(), "invalid duration: 'bogus'");
    }

    #[test]
    fn duration_display() {
        assert_eq!(SimDuration::from_ns(2).to_string(), "2ns");
        assert_eq!(SimDuration::new(10, TimeUnit::Us).to_string(), "10us");
    }

    #[test]
    fn time_zero() {
        assert_eq!(SimTime::zero().fs, 0);
        assert_eq!(SimTime::default(), SimTime::zero());
    }

    #[test]
    fn time_after_accumulates() {
        let t = SimTime::zero()
            .after(SimDuration::from_ns(2))
            .after(SimDuration::from_ns(2));
        assert_eq!(t.fs, 4_000_000);
    }

    #[test]
    fn time_ordering() {
        assert!(SimTime::from_fs(100) < SimTime::from_fs(200));
    }

    #[test]
    fn time_display_units() {
        assert_eq!(SimTime::zero().to_string(), "0 fs");
        assert_eq!(SimTime::from_fs(2 * FS_PER_NS).to_string(), "2 ns");
        assert_eq!(SimTime::from_fs(5 * FS_PER_US).to_string(), "5 us");
        assert_eq!(SimTime::from_fs(3 * FS_PER_MS).to_string(), "3 ms");
        assert_eq!(SimTime::from_fs(1_500).to_string(), "1500 fs");
        assert_eq!(SimTime::from_fs(500_000).to_string(), "500 ps");
    }

    #[test]
    fn serde_roundtrip() {
        let d = SimDuration::from_ns(2);
        let json = serde_json::to_string(&d).unwrap();
        let back: SimDuration = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);

        let t = SimTime::from_fs(42);
        let json = serde_json::to_string(&t).unwrap();
        let back: SimTime = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
