//! Gamma-corrected color storage in GRB wire order.

use crate::gamma::gamma_correct;
use smart_leds::RGB8;

/// One LED's stored channel values, post gamma correction.
///
/// Channels are kept in the order the WS2812/WS2813 family transmits them:
/// green, red, blue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grb {
    /// Green channel (transmitted first).
    pub g: u8,
    /// Red channel.
    pub r: u8,
    /// Blue channel.
    pub b: u8,
}

impl Grb {
    /// Channel bytes in transmission order.
    #[inline]
    pub const fn as_bytes(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }
}

impl From<RGB8> for Grb {
    /// Gamma-corrects each channel and reorders into wire order.
    fn from(color: RGB8) -> Self {
        Self {
            g: gamma_correct(color.g),
            r: gamma_correct(color.r),
            b: gamma_correct(color.b),
        }
    }
}

/// Fixed-length buffer of gamma-corrected LED colors.
///
/// Index 0 is the LED closest to the controller; order maps to physical
/// wiring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedStrip<const N: usize> {
    leds: [Grb; N],
}

impl<const N: usize> LedStrip<N> {
    /// Creates a strip with all LEDs off.
    pub const fn new() -> Self {
        Self {
            leds: [Grb { g: 0, r: 0, b: 0 }; N],
        }
    }

    /// Sets one LED's color, applying gamma correction to each channel.
    ///
    /// An out-of-range index is silently ignored: nothing is mutated and
    /// no error is signaled. Calling twice with the same arguments stores
    /// the same bytes.
    pub fn set_color(&mut self, index: usize, color: RGB8) {
        let Some(led) = self.leds.get_mut(index) else {
            return;
        };
        *led = Grb::from(color);
    }

    /// Returns the stored (post-gamma) channel values for one LED.
    pub fn led(&self, index: usize) -> Option<Grb> {
        self.leds.get(index).copied()
    }

    /// Iterates over stored LED values in wiring order.
    pub fn iter(&self) -> impl Iterator<Item = &Grb> {
        self.leds.iter()
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.leds = [Grb::default(); N];
    }

    /// Number of LEDs in the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-length strip.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for LedStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}
