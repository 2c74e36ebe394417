#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Ws2812Driver`**: Owns the color buffer and pulse buffer for one strip;
//!   `refresh()` serializes colors into pulse widths and starts a DMA transfer
//! - **`PulseOutput`**: Trait to implement for your timer/DMA peripheral
//! - **`PulseTimings`**: Named, validated pulse-width constants in timer ticks
//! - **`LedStrip` / `Grb`**: Gamma-corrected color storage in GRB wire order
//! - **`Debouncer` / `ButtonEvent`**: Tick-based button debouncing
//! - **`StepAnimation`**: Cyclic animation with per-step delays
//!
//! Colors enter the library as `RGB8` (8-bit red, green, blue). Each channel
//! is gamma corrected on store, and the driver emits them in the GRB order
//! and MSB-first bit order the WS2812/WS2813 wire protocol requires.

// Re-export RGB8 from smart-leds for user convenience
pub use smart_leds::RGB8;

pub mod animation;
pub mod button;
pub mod driver;
pub mod gamma;
pub mod strip;
pub mod timing;

pub use animation::StepAnimation;
pub use button::{ButtonEvent, Debouncer};
pub use driver::{BITS_PER_LED, DriverError, PulseOutput, Ws2812Driver, buffer_len};
pub use gamma::{GAMMA, gamma_correct};
pub use strip::{Grb, LedStrip};
pub use timing::{PulseTimings, TimingError};
