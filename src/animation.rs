//! Cyclic step animation with individually timed steps.
//!
//! Models the demo firmware's polling-loop animation: a fixed set of steps
//! that fire one after another, each after its own delay, wrapping back to
//! the first step. A button typically toggles the animation on and off;
//! while inactive nothing fires and the caller blanks the LEDs.

/// Steps through a fixed cycle, honoring a per-step delay.
///
/// # Type Parameters
/// * `STEPS` - Number of steps in one cycle
#[derive(Debug, Clone)]
pub struct StepAnimation<const STEPS: usize> {
    delays_ms: [u32; STEPS],
    step: usize,
    last_step_ms: u32,
    active: bool,
}

impl<const STEPS: usize> StepAnimation<STEPS> {
    /// Creates an inactive animation.
    ///
    /// `delays_ms[i]` is how long to wait before step `i` fires.
    pub const fn new(delays_ms: [u32; STEPS]) -> Self {
        Self {
            delays_ms,
            step: 0,
            last_step_ms: 0,
            active: false,
        }
    }

    /// Activates or deactivates the animation.
    ///
    /// Activation restarts from step 0 with a full first delay measured
    /// from `now_ms`. Deactivation also resets to step 0; the caller is
    /// expected to blank the LEDs, as the demo firmware does.
    pub fn set_active(&mut self, active: bool, now_ms: u32) {
        if active == self.active {
            return;
        }
        self.active = active;
        self.step = 0;
        self.last_step_ms = now_ms;
    }

    /// Toggles the animation and returns the new active state.
    pub fn toggle(&mut self, now_ms: u32) -> bool {
        self.set_active(!self.active, now_ms);
        self.active
    }

    /// True while the animation is running.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the step that will fire next.
    pub const fn current_step(&self) -> usize {
        self.step
    }

    /// Returns the step to perform once its delay has elapsed.
    ///
    /// Call this on every loop iteration. Returns `None` while inactive or
    /// between steps. When a step fires, the cycle advances and the next
    /// step's delay starts counting from `now_ms`. Ticks may wrap.
    pub fn poll(&mut self, now_ms: u32) -> Option<usize> {
        if !self.active || STEPS == 0 {
            return None;
        }
        if now_ms.wrapping_sub(self.last_step_ms) < self.delays_ms[self.step] {
            return None;
        }

        self.last_step_ms = now_ms;
        let fired = self.step;
        self.step = (self.step + 1) % STEPS;
        Some(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The demo's transition delays.
    const DELAYS: [u32; 3] = [500, 300, 150];

    #[test]
    fn inactive_animation_never_fires() {
        let mut animation = StepAnimation::new(DELAYS);
        assert_eq!(animation.poll(10_000), None);
        assert!(!animation.is_active());
    }

    #[test]
    fn steps_fire_in_order_with_individual_delays() {
        let mut animation = StepAnimation::new(DELAYS);
        animation.set_active(true, 0);

        // Step 0 waits 500 ms.
        assert_eq!(animation.poll(499), None);
        assert_eq!(animation.poll(500), Some(0));

        // Step 1 waits 300 ms from when step 0 fired.
        assert_eq!(animation.poll(799), None);
        assert_eq!(animation.poll(800), Some(1));

        // Step 2 waits 150 ms.
        assert_eq!(animation.poll(950), Some(2));
    }

    #[test]
    fn cycle_wraps_back_to_first_step() {
        let mut animation = StepAnimation::new(DELAYS);
        animation.set_active(true, 0);

        assert_eq!(animation.poll(500), Some(0));
        assert_eq!(animation.poll(800), Some(1));
        assert_eq!(animation.poll(950), Some(2));

        // Back to step 0 with its 500 ms delay.
        assert_eq!(animation.poll(1400), None);
        assert_eq!(animation.poll(1450), Some(0));
    }

    #[test]
    fn toggling_restarts_from_first_step() {
        let mut animation = StepAnimation::new(DELAYS);

        assert!(animation.toggle(0));
        assert_eq!(animation.poll(500), Some(0));

        assert!(!animation.toggle(600));
        assert_eq!(animation.poll(2_000), None);

        // Re-activation starts over with step 0's full delay.
        assert!(animation.toggle(2_000));
        assert_eq!(animation.poll(2_400), None);
        assert_eq!(animation.poll(2_500), Some(0));
        assert_eq!(animation.current_step(), 1);
    }

    #[test]
    fn poll_handles_tick_wraparound() {
        let mut animation = StepAnimation::new(DELAYS);
        animation.set_active(true, u32::MAX - 100);

        // 500 ticks elapse across the wrap point.
        assert_eq!(animation.poll(399), Some(0));
    }
}
