//! Pulse encoding and asynchronous transmission.
//!
//! Provides [`Ws2812Driver`] which owns a color buffer and a pulse buffer,
//! serializes colors into PWM compare values on demand, and hands the
//! finished buffer to a timer-driven DMA output. Also defines the
//! [`PulseOutput`] trait for hardware abstraction.

use heapless::Vec;
use smart_leds::RGB8;

use crate::strip::LedStrip;
use crate::timing::{PulseTimings, TimingError};

/// Bits transmitted per LED: 3 channels of 8 bits each.
pub const BITS_PER_LED: usize = 24;

/// Total pulse-buffer length for a strip: data bits plus reset gap.
///
/// Use this to size the `BUF` parameter of [`Ws2812Driver`]:
///
/// ```
/// use ws2812_pwm_dma::buffer_len;
///
/// const LEDS: usize = 16;
/// const RESET: usize = 50;
/// assert_eq!(buffer_len(LEDS, RESET), 16 * 24 + 50);
/// ```
pub const fn buffer_len(leds: usize, reset_periods: usize) -> usize {
    leds * BITS_PER_LED + reset_periods
}

/// Trait for abstracting the timer/DMA transmission peripheral.
///
/// Implement this on top of your HAL's "start repeated DMA-fed PWM
/// transfer" primitive: one buffer entry is written to the timer's compare
/// register per PWM period, with no CPU involvement until completion.
pub trait PulseOutput {
    /// Error reported when a transfer cannot be started.
    type Error;

    /// Begins streaming the pulse buffer and returns immediately.
    ///
    /// The transfer continues in hardware after this call returns. The
    /// slice must remain valid and unmutated until [`is_busy`](Self::is_busy)
    /// reports false; [`Ws2812Driver`] upholds this by refusing to rebuild
    /// the buffer while a transfer is in flight.
    fn start(&mut self, pulses: &[u16]) -> Result<(), Self::Error>;

    /// True while a previously started transfer is still in flight.
    fn is_busy(&self) -> bool;
}

/// Errors that can occur when refreshing the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// The previous transfer has not completed yet.
    ///
    /// The pulse buffer is shared with the in-progress transfer, so it was
    /// left untouched. Retry once the output is no longer busy.
    TransferInFlight,

    /// The output peripheral refused to start the transfer.
    Output(E),
}

impl<E: core::fmt::Display> core::fmt::Display for DriverError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DriverError::TransferInFlight => {
                write!(f, "previous transfer still in flight")
            }
            DriverError::Output(e) => {
                write!(f, "output error: {}", e)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug + core::fmt::Display> std::error::Error for DriverError<E> {}

/// Drives one WS2812/WS2813 strip through a PWM/DMA output.
///
/// The driver owns the color buffer, the pulse buffer and the output
/// peripheral. Colors set via [`set_color`](Self::set_color) are gamma
/// corrected and stored in GRB order; [`refresh`](Self::refresh) rebuilds
/// the pulse buffer from the current colors and starts an asynchronous
/// transfer.
///
/// # Type Parameters
/// * `O` - Output peripheral implementation
/// * `LEDS` - Number of LEDs on the strip
/// * `BUF` - Pulse buffer length; use [`buffer_len`] to compute it
pub struct Ws2812Driver<O: PulseOutput, const LEDS: usize, const BUF: usize> {
    strip: LedStrip<LEDS>,
    pulses: Vec<u16, BUF>,
    timings: PulseTimings,
    output: O,
}

impl<O: PulseOutput, const LEDS: usize, const BUF: usize> Ws2812Driver<O, LEDS, BUF> {
    /// Creates a driver with all LEDs off.
    ///
    /// Validates the timings and checks that `BUF` can hold the strip's
    /// data bits plus the configured reset gap.
    ///
    /// # Errors
    /// * Any [`TimingError`] from [`PulseTimings::validate`]
    /// * `BufferTooSmall` - `BUF < LEDS * 24 + timings.reset_periods`
    pub fn new(output: O, timings: PulseTimings) -> Result<Self, TimingError> {
        timings.validate()?;

        let needed = buffer_len(LEDS, timings.reset_periods);
        if BUF < needed {
            return Err(TimingError::BufferTooSmall {
                needed,
                capacity: BUF,
            });
        }

        Ok(Self {
            strip: LedStrip::new(),
            pulses: Vec::new(),
            timings,
            output,
        })
    }

    /// Sets one LED's color.
    ///
    /// Channels are gamma corrected and stored in GRB order. An
    /// out-of-range index is silently ignored. The wire is not touched
    /// until the next [`refresh`](Self::refresh).
    pub fn set_color(&mut self, index: usize, color: RGB8) {
        self.strip.set_color(index, color);
    }

    /// Serializes the current colors and starts an asynchronous transfer.
    ///
    /// The pulse buffer is rebuilt in full: for each LED, each stored byte
    /// (GRB order) is emitted MSB-first as one compare value per bit - the
    /// wide `t1h` pulse for a set bit, the narrow `t0h` pulse otherwise.
    /// Remaining positions up to `BUF` are filled with zero-width pulses
    /// forming the reset gap that latches the frame. The buffer is then
    /// handed to the output and this call returns without waiting for
    /// completion.
    ///
    /// # Errors
    /// * `TransferInFlight` - the previous transfer has not completed;
    ///   the buffer is left untouched
    /// * `Output` - the peripheral refused to start the transfer
    pub fn refresh(&mut self) -> Result<(), DriverError<O::Error>> {
        if self.output.is_busy() {
            return Err(DriverError::TransferInFlight);
        }

        self.encode();
        self.output.start(&self.pulses).map_err(DriverError::Output)
    }

    /// Rebuilds the pulse buffer from the current strip contents.
    fn encode(&mut self) {
        self.pulses.clear();

        for led in self.strip.iter() {
            for byte in led.as_bytes() {
                for bit in (0..8).rev() {
                    let width = if byte & (1 << bit) != 0 {
                        self.timings.t1h
                    } else {
                        self.timings.t0h
                    };
                    // Capacity was checked in new(); data bits always fit.
                    let _ = self.pulses.push(width);
                }
            }
        }

        // Reset gap: zero-width pulses up to the fixed buffer length.
        while self.pulses.push(0).is_ok() {}
    }

    /// Returns the stored color buffer.
    pub fn strip(&self) -> &LedStrip<LEDS> {
        &self.strip
    }

    /// Returns the pulse buffer as built by the last refresh.
    ///
    /// Empty until the first [`refresh`](Self::refresh).
    pub fn pulses(&self) -> &[u16] {
        &self.pulses
    }

    /// Returns the validated timing configuration.
    pub fn timings(&self) -> &PulseTimings {
        &self.timings
    }

    /// Returns a reference to the output peripheral.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a mutable reference to the output peripheral.
    ///
    /// Useful for acknowledging transfer completion from a DMA interrupt
    /// handler or for polling peripheral state.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Number of LEDs on the strip.
    pub const fn len(&self) -> usize {
        LEDS
    }

    /// True for a zero-length strip.
    pub const fn is_empty(&self) -> bool {
        LEDS == 0
    }
}
