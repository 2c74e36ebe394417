//! Perceptual gamma correction for LED channel intensities.
//!
//! Linear PWM duty cycle does not match human perceived brightness, so raw
//! intensities are remapped through a fixed power curve before they are
//! stored. This is a brightness pre-pass only, not a colorimetric model.

use libm::{powf, roundf};

/// Fixed gamma exponent applied to every channel.
pub const GAMMA: f32 = 2.2;

/// Applies gamma correction to a raw 8-bit intensity.
///
/// Computes `round(255 * (value / 255)^2.2)`, clamped to the `u8` range.
/// Deterministic and pure: 0 maps to 0 and 255 maps to 255.
#[inline]
pub fn gamma_correct(value: u8) -> u8 {
    let normalized = f32::from(value) / 255.0;
    let corrected = roundf(powf(normalized, GAMMA) * 255.0);
    corrected.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(gamma_correct(0), 0);
        assert_eq!(gamma_correct(255), 255);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut previous = gamma_correct(0);
        for v in 1..=255u8 {
            let corrected = gamma_correct(v);
            assert!(
                corrected >= previous,
                "gamma_correct({}) = {} < gamma_correct({}) = {}",
                v,
                corrected,
                v - 1,
                previous
            );
            previous = corrected;
        }
    }

    #[test]
    fn output_never_exceeds_input() {
        // With an exponent > 1 the curve lies below the identity line.
        for v in 0..=255u8 {
            assert!(gamma_correct(v) <= v);
        }
    }

    #[test]
    fn midpoint_matches_curve() {
        // round(255 * (128/255)^2.2) = round(55.98)
        assert_eq!(gamma_correct(128), 56);
    }
}
