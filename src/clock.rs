//! # Clock
//!
//! Converts between cycle counts and wall-clock time for a target clock
//! frequency. The processor itself never sleeps: a driver that wants
//! real-time pacing asks the clock how long a batch of cycles should take
//! and waits on its own.
//!
//! ```
//! use std::time::Duration;
//! use sim6502::Clock;
//!
//! let clock = Clock::default();
//! assert_eq!(clock.frequency_hz(), 1_000_000);
//! assert_eq!(clock.duration_for(2), Duration::from_micros(2));
//! assert_eq!(clock.cycles_per(Duration::from_millis(20)), 20_000);
//! ```

use std::time::Duration;

/// Address programs are loaded to when a driver has no better idea.
pub const DEFAULT_LOAD_ADDRESS: u16 = 0x4000;

/// Default target frequency: 1 MHz.
pub const DEFAULT_FREQUENCY_HZ: u64 = 1_000_000;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Target clock frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clock {
    frequency_hz: u64,
}

impl Clock {
    /// Creates a clock running at `frequency_hz`. A frequency of zero is
    /// clamped to 1 Hz.
    pub const fn new(frequency_hz: u64) -> Self {
        Self {
            frequency_hz: if frequency_hz == 0 { 1 } else { frequency_hz },
        }
    }

    pub const fn frequency_hz(&self) -> u64 {
        self.frequency_hz
    }

    /// Wall-clock time `cycles` should take at this frequency.
    pub fn duration_for(&self, cycles: u64) -> Duration {
        let nanos = cycles as u128 * NANOS_PER_SECOND / self.frequency_hz as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Whole cycles that fit into `duration` at this frequency.
    pub fn cycles_per(&self, duration: Duration) -> u64 {
        let cycles = duration.as_nanos() * self.frequency_hz as u128 / NANOS_PER_SECOND;
        u64::try_from(cycles).unwrap_or(u64::MAX)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_megahertz() {
        assert_eq!(Clock::default().frequency_hz(), 1_000_000);
    }

    #[test]
    fn test_duration_for_cycles() {
        let clock = Clock::new(2_000_000);
        assert_eq!(clock.duration_for(0), Duration::ZERO);
        assert_eq!(clock.duration_for(2), Duration::from_nanos(1_000));
        assert_eq!(clock.duration_for(2_000_000), Duration::from_secs(1));
    }

    #[test]
    fn test_cycles_per_duration_truncates() {
        let clock = Clock::new(1_022_727); // NTSC Apple II
        assert_eq!(clock.cycles_per(Duration::from_secs(1)), 1_022_727);
        assert_eq!(clock.cycles_per(Duration::from_nanos(999)), 1);
    }

    #[test]
    fn test_zero_frequency_clamped() {
        let clock = Clock::new(0);
        assert_eq!(clock.frequency_hz(), 1);
        assert_eq!(clock.duration_for(3), Duration::from_secs(3));
    }
}
