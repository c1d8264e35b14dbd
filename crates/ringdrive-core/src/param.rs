//! Linearly smoothed values for click-free gain changes.
//!
//! Gain changes applied as a step at a block boundary are audible as a
//! click. [`LinearSmoothedParam`] instead ramps toward its target at a
//! constant rate over a fixed transition time, which makes the arrival time
//! predictable regardless of how far the target moved.
//!
//! ## Usage
//!
//! ```rust
//! use ringdrive_core::LinearSmoothedParam;
//!
//! // 100 ms ramp at 48 kHz
//! let mut gain = LinearSmoothedParam::with_config(1.0, 48000.0, 100.0);
//! gain.set_target(0.5);
//!
//! for _ in 0..4800 {
//!     let g = gain.advance();
//!     // multiply g into the signal...
//! #   let _ = g;
//! }
//! assert!(gain.is_settled());
//! assert_eq!(gain.get(), 0.5);
//! ```

/// A value with linear smoothing (constant rate of change).
///
/// Re-targeting restarts the ramp from the current value, so the value never
/// jumps; between re-targets it moves monotonically toward the target and
/// lands on it exactly.
#[derive(Debug, Clone)]
pub struct LinearSmoothedParam {
    /// Current value
    current: f64,
    /// Target value
    target: f64,
    /// Increment per sample (can be positive or negative)
    increment: f64,
    /// Samples remaining until target reached
    samples_remaining: u32,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Transition time in milliseconds
    transition_time_ms: f64,
}

impl LinearSmoothedParam {
    /// Create a new linear smoothed parameter (44.1 kHz, 10 ms ramps).
    pub fn new(initial: f64) -> Self {
        Self::with_config(initial, 44100.0, 10.0)
    }

    /// Create with full configuration.
    pub fn with_config(initial: f64, sample_rate: f64, transition_time_ms: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            increment: 0.0,
            samples_remaining: 0,
            sample_rate,
            transition_time_ms,
        }
    }

    /// Set the target value.
    ///
    /// Setting the same target again does not restart the ramp.
    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }

        self.target = target;

        let samples = self.ramp_length_samples();
        if samples == 0 {
            self.current = target;
            self.increment = 0.0;
            self.samples_remaining = 0;
        } else {
            self.increment = (target - self.current) / f64::from(samples);
            self.samples_remaining = samples;
        }
    }

    /// Set value immediately.
    pub fn set_immediate(&mut self, value: f64) {
        self.current = value;
        self.target = value;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }

    /// Update sample rate. Takes effect on the next [`set_target`](Self::set_target).
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    /// Set transition time in milliseconds.
    pub fn set_transition_time_ms(&mut self, time_ms: f64) {
        self.transition_time_ms = time_ms;
    }

    /// Length of a full ramp in samples at the current configuration.
    pub fn ramp_length_samples(&self) -> u32 {
        let samples = self.transition_time_ms / 1000.0 * self.sample_rate;
        if samples > 0.0 { samples as u32 } else { 0 }
    }

    /// Get next smoothed value.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        if self.samples_remaining > 0 {
            self.current += self.increment;
            self.samples_remaining -= 1;
            if self.samples_remaining == 0 {
                self.current = self.target; // Snap to exact target
            }
        }
        self.current
    }

    /// Get current value without advancing.
    #[inline]
    pub fn get(&self) -> f64 {
        self.current
    }

    /// Get target value.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Check if transition is complete.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.samples_remaining == 0
    }

    /// Snap to target immediately.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }
}

impl Default for LinearSmoothedParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_smoothed_param_exact_time() {
        let mut param = LinearSmoothedParam::with_config(0.0, 48000.0, 10.0);
        param.set_target(1.0);

        // Run for exactly 10ms
        let samples = (48000.0 * 0.010) as usize;
        for _ in 0..samples {
            param.advance();
        }

        assert!(
            (param.get() - 1.0).abs() < 1e-12,
            "Should reach target exactly, got {}",
            param.get()
        );
        assert!(param.is_settled());
    }

    #[test]
    fn linear_smoothed_constant_rate() {
        let mut param = LinearSmoothedParam::with_config(0.0, 48000.0, 10.0);
        param.set_target(1.0);

        // After 5ms, should be halfway
        let samples = (48000.0 * 0.005) as usize;
        for _ in 0..samples {
            param.advance();
        }

        assert!(
            (param.get() - 0.5).abs() < 1e-9,
            "Should be halfway, got {}",
            param.get()
        );
    }

    #[test]
    fn hundred_ms_ramp_length() {
        let param = LinearSmoothedParam::with_config(1.0, 44100.0, 100.0);
        assert_eq!(param.ramp_length_samples(), 4410);
    }

    #[test]
    fn retarget_restarts_from_current() {
        let mut param = LinearSmoothedParam::with_config(1.0, 1000.0, 100.0);
        param.set_target(2.0);
        for _ in 0..50 {
            param.advance();
        }
        let mid = param.get();
        assert!((mid - 1.5).abs() < 1e-9);

        // Reverse direction: no jump, then monotonic descent to the new target
        param.set_target(0.0);
        let mut prev = mid;
        for _ in 0..100 {
            let v = param.advance();
            assert!(v <= prev, "ramp must be monotonic: {v} > {prev}");
            prev = v;
        }
        assert_eq!(param.get(), 0.0);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut param = LinearSmoothedParam::with_config(0.0, 1000.0, 100.0);
        param.set_target(1.0);
        for _ in 0..30 {
            param.advance();
        }
        param.set_target(1.0);
        for _ in 0..70 {
            param.advance();
        }
        assert!(param.is_settled());
        assert_eq!(param.get(), 1.0);
    }

    #[test]
    fn zero_time_is_instant() {
        let mut param = LinearSmoothedParam::with_config(0.0, 48000.0, 0.0);
        param.set_target(0.25);
        assert_eq!(param.get(), 0.25);
        assert_eq!(param.advance(), 0.25);
    }

    #[test]
    fn set_immediate_and_snap() {
        let mut param = LinearSmoothedParam::with_config(0.0, 48000.0, 50.0);
        param.set_target(3.0);
        param.advance();
        param.snap_to_target();
        assert_eq!(param.get(), 3.0);
        assert!(param.is_settled());

        param.set_immediate(1.0);
        assert_eq!(param.get(), 1.0);
        assert_eq!(param.target(), 1.0);
    }
}
