//! Pulse-width timing configuration for the WS2812/WS2813 protocol.
//!
//! Each bit on the wire is one fixed-period PWM cycle whose high time
//! encodes the bit value. The compare values written by DMA are timer
//! ticks, so the usable constants depend on the timer clock. This module
//! names those values and validates them instead of scattering magic
//! numbers tied to one clock tree.

/// Nominal high time of a "0" bit in nanoseconds.
pub const T0H_NS: u32 = 400;

/// Nominal high time of a "1" bit in nanoseconds.
pub const T1H_NS: u32 = 800;

/// Nominal duration of one bit period in nanoseconds.
pub const BIT_PERIOD_NS: u32 = 1250;

/// Minimum low time after a frame that latches the LED chain, in nanoseconds.
pub const RESET_MIN_NS: u32 = 50_000;

/// Converts a duration in nanoseconds to timer ticks, rounding to nearest.
const fn ns_to_ticks(ns: u32, timer_hz: u32) -> u16 {
    ((ns as u64 * timer_hz as u64 + 500_000_000) / 1_000_000_000) as u16
}

/// Fewest whole bit periods covering the minimum latch time.
///
/// Uses the achieved (tick-rounded) period, not the nominal one: at clocks
/// where the period rounds down, the nominal count would fall short of
/// [`RESET_MIN_NS`].
const fn min_reset_periods(period: u16, timer_hz: u32) -> usize {
    if period == 0 || timer_hz == 0 {
        return 0;
    }
    (RESET_MIN_NS as u64 * timer_hz as u64).div_ceil(period as u64 * 1_000_000_000) as usize
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Timer clock or bit period is zero.
    ZeroClock,

    /// The "0" pulse is not strictly narrower than the "1" pulse.
    PulseOrder,

    /// The "1" pulse does not fit within one bit period.
    PulseTooWide,

    /// The reset gap is shorter than the protocol's minimum low time.
    ResetTooShort,

    /// The pulse buffer cannot hold the data bits plus the reset gap.
    BufferTooSmall {
        /// Entries required: `leds * 24 + reset_periods`.
        needed: usize,
        /// Entries the buffer can hold.
        capacity: usize,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroClock => {
                write!(f, "timer clock and bit period must be non-zero")
            }
            TimingError::PulseOrder => {
                write!(f, "T0H must be strictly narrower than T1H")
            }
            TimingError::PulseTooWide => {
                write!(f, "T1H must be strictly shorter than the bit period")
            }
            TimingError::ResetTooShort => {
                write!(f, "reset gap is shorter than the protocol minimum low time")
            }
            TimingError::BufferTooSmall { needed, capacity } => {
                write!(
                    f,
                    "pulse buffer too small: needs {} entries, holds {}",
                    needed, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Pulse-width configuration in timer ticks.
///
/// Invariants enforced by [`PulseTimings::validate`]:
/// `0 < t0h < t1h < period`, and the reset gap spans at least
/// [`RESET_MIN_NS`] of low time at the configured timer clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimings {
    /// Timer counting frequency in Hz.
    pub timer_hz: u32,

    /// Ticks per bit period (the timer's auto-reload value plus one).
    pub period: u16,

    /// Compare value encoding a "0" bit.
    pub t0h: u16,

    /// Compare value encoding a "1" bit.
    pub t1h: u16,

    /// Number of zero-width bit periods forming the inter-frame reset gap.
    pub reset_periods: usize,
}

impl PulseTimings {
    /// Creates timings from explicit tick values.
    ///
    /// Call [`validate`](Self::validate) (done by the driver constructor)
    /// before streaming with these values.
    pub const fn new(
        timer_hz: u32,
        period: u16,
        t0h: u16,
        t1h: u16,
        reset_periods: usize,
    ) -> Self {
        Self {
            timer_hz,
            period,
            t0h,
            t1h,
            reset_periods,
        }
    }

    /// Derives WS2812/WS2813 timings from a timer clock.
    ///
    /// Ticks are computed from the protocol's nominal durations
    /// ([`T0H_NS`], [`T1H_NS`], [`BIT_PERIOD_NS`]); the reset gap is the
    /// fewest whole bit periods covering the minimum latch time at the
    /// achieved, tick-rounded period. The timer must run fast enough to
    /// resolve the pulse widths; 8 MHz and above works well.
    pub const fn ws2812(timer_hz: u32) -> Self {
        let period = ns_to_ticks(BIT_PERIOD_NS, timer_hz);
        Self {
            timer_hz,
            period,
            t0h: ns_to_ticks(T0H_NS, timer_hz),
            t1h: ns_to_ticks(T1H_NS, timer_hz),
            reset_periods: min_reset_periods(period, timer_hz),
        }
    }

    /// Replaces the reset gap length, e.g. to add margin above the minimum.
    pub const fn with_reset_periods(mut self, reset_periods: usize) -> Self {
        self.reset_periods = reset_periods;
        self
    }

    /// Duration of the reset gap in nanoseconds at the configured clock.
    ///
    /// Returns 0 for a zero timer clock; [`validate`](Self::validate)
    /// rejects such a configuration before the gap is ever relied on.
    pub const fn reset_gap_ns(&self) -> u64 {
        if self.timer_hz == 0 {
            return 0;
        }
        self.reset_periods as u64 * self.period as u64 * 1_000_000_000 / self.timer_hz as u64
    }

    /// Checks the protocol invariants.
    ///
    /// # Errors
    /// * `ZeroClock` - zero timer frequency or bit period
    /// * `PulseOrder` - `t0h` is zero or not below `t1h`
    /// * `PulseTooWide` - `t1h` does not fit within the bit period
    /// * `ResetTooShort` - reset gap below [`RESET_MIN_NS`]
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.timer_hz == 0 || self.period == 0 {
            return Err(TimingError::ZeroClock);
        }
        if self.t0h == 0 || self.t0h >= self.t1h {
            return Err(TimingError::PulseOrder);
        }
        if self.t1h >= self.period {
            return Err(TimingError::PulseTooWide);
        }
        if self.reset_gap_ns() < RESET_MIN_NS as u64 {
            return Err(TimingError::ResetTooShort);
        }
        Ok(())
    }
}
