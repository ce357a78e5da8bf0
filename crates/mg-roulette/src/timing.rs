//! Tick pacing for the spin animation

use std::time::Duration;

use crate::config::SpinnerConfig;

/// Slowest inter-frame delay the ease-out curve approaches, in seconds
const SLOW_CAP_SECS: f64 = 0.25;

/// Precomputed per-tick delay table for one spin.
///
/// The table covers the whole plan, overshoot included; overshoot frames
/// keep consuming indices from the same table rather than restarting the
/// curve. Lookups past the end hold the final pace.
#[derive(Debug, Clone)]
pub struct DelayCurve {
    delays: Vec<Duration>,
}

impl DelayCurve {
    /// Build the table for `ticks` frames.
    ///
    /// With easing the delay at normalized progress `t` is
    /// `base + (slow - base) * t²`: fast at the start, slowing toward the
    /// cap as the spin approaches its end. Without easing every frame uses
    /// the fixed base delay `1 / max(10, fps)`.
    pub fn build(config: &SpinnerConfig, ticks: usize) -> Self {
        let base = 1.0 / f64::from(config.fps.max(10));
        let span = ticks.saturating_sub(1).max(1) as f64;

        let delays = (0..ticks)
            .map(|i| {
                let secs = if config.ease_out {
                    let t = i as f64 / span;
                    base + (SLOW_CAP_SECS - base) * t * t
                } else {
                    base
                };
                Duration::from_secs_f64(secs)
            })
            .collect();

        Self { delays }
    }

    /// Delay for frame `index`; indices past the end clamp to the last entry.
    pub fn get(&self, index: usize) -> Duration {
        self.delays
            .get(index)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Number of precomputed entries
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}
