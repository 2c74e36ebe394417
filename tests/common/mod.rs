//! Shared test infrastructure for ws2812-pwm-dma integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use ws2812_pwm_dma::PulseOutput;

// ============================================================================
// Mock Pulse Output
// ============================================================================

/// Error injected by [`MockOutput`] when configured to refuse a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartRefused;

impl std::fmt::Display for StartRefused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transfer start refused")
    }
}

/// Mock output that records every started transfer.
///
/// Like real DMA, it reports busy from `start` until [`complete`] is
/// called, so tests can exercise the overlapping-refresh guard.
pub struct MockOutput {
    busy: bool,
    refuse_next: bool,
    transfers: Vec<Vec<u16>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            busy: false,
            refuse_next: false,
            transfers: Vec::new(),
        }
    }

    /// Signals transfer completion, as a DMA-complete interrupt would.
    pub fn complete(&mut self) {
        self.busy = false;
    }

    /// Makes the next `start` call fail with [`StartRefused`].
    pub fn refuse_next(&mut self) {
        self.refuse_next = true;
    }

    /// Number of transfers started so far.
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// The most recently started transfer, if any.
    pub fn last_transfer(&self) -> Option<&[u16]> {
        self.transfers.last().map(Vec::as_slice)
    }

    pub fn transfers(&self) -> &[Vec<u16>] {
        &self.transfers
    }
}

impl PulseOutput for MockOutput {
    type Error = StartRefused;

    fn start(&mut self, pulses: &[u16]) -> Result<(), StartRefused> {
        if self.refuse_next {
            self.refuse_next = false;
            return Err(StartRefused);
        }
        self.transfers.push(pulses.to_vec());
        self.busy = true;
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected pulses for one stored byte, MSB-first.
pub fn pulses_for_byte(byte: u8, t0h: u16, t1h: u16) -> [u16; 8] {
    let mut pulses = [0u16; 8];
    for (i, pulse) in pulses.iter_mut().enumerate() {
        *pulse = if byte & (1 << (7 - i)) != 0 { t1h } else { t0h };
    }
    pulses
}
