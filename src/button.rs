//! Tick-based button debouncing.
//!
//! Mechanical buttons bounce for a few milliseconds on every press and
//! release. [`Debouncer`] accepts raw level samples together with a
//! millisecond tick and reports an edge only once the level has held
//! beyond the debounce window since the last accepted change.

/// Debounced edge events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button settled into the pressed state.
    Pressed,
    /// The button settled into the released state.
    Released,
}

/// Debounces a single button sampled in a polling loop.
///
/// Feed it the raw pressed/released level and the current millisecond tick
/// on every loop iteration; it emits at most one event per accepted edge.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    stable_pressed: bool,
    last_change_ms: u32,
}

impl Debouncer {
    /// Creates a debouncer in the released state.
    ///
    /// `delay_ms` is the window a level change must survive; 50 ms works
    /// well for typical tactile switches.
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            stable_pressed: false,
            last_change_ms: 0,
        }
    }

    /// Processes one raw sample.
    ///
    /// Returns an event when the raw level differs from the stable state
    /// and the debounce window since the last accepted change has elapsed.
    /// Ticks may wrap; comparison uses wrapping arithmetic.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        if pressed == self.stable_pressed {
            return None;
        }
        if now_ms.wrapping_sub(self.last_change_ms) <= self.delay_ms {
            return None;
        }

        self.stable_pressed = pressed;
        self.last_change_ms = now_ms;

        Some(if pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        })
    }

    /// Returns the debounced button state.
    pub const fn is_pressed(&self) -> bool {
        self.stable_pressed
    }
}
