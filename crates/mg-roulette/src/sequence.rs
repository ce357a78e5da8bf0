//! Spin sequencing — ring positions from spin-up to landing

use crate::config::SpinnerConfig;

/// Cap on overshoot ticks regardless of ring size
const MAX_OVERSHOOT: usize = 5;

/// Fully-resolved ring itinerary for one spin.
///
/// Positions run from the first spin-up frame through the optional
/// overshoot/backtrack round trip to the forced landing frame. The last
/// entry is always `final_index`.
#[derive(Debug, Clone)]
pub struct SpinPlan {
    positions: Vec<usize>,
    overshoot_ticks: usize,
    final_index: usize,
}

impl SpinPlan {
    /// Plan a spin over a ring of `len` names landing on `final_index`.
    ///
    /// The forward phase runs `cycles * len + (final_index % len)` ticks so
    /// its nominal landing frame is `final_index`. When `duration_ms` is
    /// set, the cycle count is instead derived from `fps × duration`
    /// rounded down to whole cycles (minimum one). Overshoot adds a
    /// net-zero round trip past the target; a one-name ring lands
    /// immediately.
    pub fn build(len: usize, final_index: usize, config: &SpinnerConfig) -> Self {
        assert!(len > 0, "spin plan needs a non-empty ring");
        let final_index = final_index % len;

        if len == 1 {
            return Self {
                positions: vec![0],
                overshoot_ticks: 0,
                final_index,
            };
        }

        let cycles = effective_cycles(len, final_index, config);
        let steps = cycles * len + final_index;

        let mut positions: Vec<usize> = (0..=steps).map(|i| i % len).collect();

        let mut overshoot_ticks = 0;
        if config.overshoot {
            let extra = (len / 3 + 1).min(MAX_OVERSHOOT);
            for k in 1..=extra {
                positions.push((final_index + k) % len);
            }
            for k in (0..extra).rev() {
                positions.push((final_index + k) % len);
            }
            overshoot_ticks = extra * 2;
        }

        // Forced landing frame, regardless of what the overshoot did.
        positions.push(final_index);

        Self {
            positions,
            overshoot_ticks,
            final_index,
        }
    }

    /// Every ring position in playback order
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Index the spin must land on
    pub fn final_index(&self) -> usize {
        self.final_index
    }

    /// Frames spent in the overshoot/backtrack round trip
    pub fn overshoot_ticks(&self) -> usize {
        self.overshoot_ticks
    }

    /// Total frame count
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if empty (never true for a valid plan)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Cycle count for the forward phase. `duration_ms == 0` uses the
/// configured cycles; otherwise the target tick budget `fps × duration`
/// is rounded down to whole cycles after reserving the landing offset.
fn effective_cycles(len: usize, offset: usize, config: &SpinnerConfig) -> usize {
    if config.duration_ms == 0 {
        return config.cycles.max(1) as usize;
    }
    let target =
        (f64::from(config.fps.max(1)) * config.duration_ms as f64 / 1000.0).round() as usize;
    (target.saturating_sub(offset) / len).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(overshoot: bool) -> SpinnerConfig {
        SpinnerConfig {
            cycles: 2,
            overshoot,
            ..SpinnerConfig::default()
        }
    }

    #[test]
    fn test_plan_lands_on_final_index() {
        for len in [2, 3, 5, 8, 13] {
            for final_index in 0..len {
                for overshoot in [false, true] {
                    let plan = SpinPlan::build(len, final_index, &config(overshoot));
                    assert_eq!(
                        *plan.positions().last().unwrap(),
                        final_index,
                        "len={len} final={final_index} overshoot={overshoot}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_spin_up_tick_count() {
        let plan = SpinPlan::build(5, 3, &config(false));
        // cycles * len + offset forward ticks, plus the start frame and the
        // forced landing frame.
        assert_eq!(plan.len(), 2 * 5 + 3 + 1 + 1);
    }

    #[test]
    fn test_overshoot_nets_to_zero() {
        let len = 7;
        let plan = SpinPlan::build(len, 4, &config(true));
        let positions = plan.positions();

        let extra = (len / 3 + 1).min(5);
        assert_eq!(plan.overshoot_ticks(), extra * 2);

        // The frame just past the nominal landing is one step beyond it,
        // and the sequence still ends exactly on the target.
        let nominal_landing = positions.len() - plan.overshoot_ticks() - 2;
        assert_eq!(positions[nominal_landing], 4);
        assert_eq!(positions[nominal_landing + 1], 5);
        assert_eq!(*positions.last().unwrap(), 4);
    }

    #[test]
    fn test_backtrack_steps_one_at_a_time() {
        let plan = SpinPlan::build(9, 2, &config(true));
        let positions = plan.positions();
        let extra = (9 / 3 + 1).min(5); // 4

        let tail = &positions[positions.len() - extra - 1..];
        // Backtrack walks back onto the target; the last frame repeats it.
        for pair in tail.windows(2).take(extra - 1) {
            assert_eq!((pair[0] + 9 - 1) % 9, pair[1] % 9);
        }
        assert_eq!(tail[tail.len() - 2], 2);
        assert_eq!(tail[tail.len() - 1], 2);
    }

    #[test]
    fn test_duration_based_length() {
        let cfg = SpinnerConfig {
            duration_ms: 2000,
            fps: 30,
            overshoot: false,
            ..SpinnerConfig::default()
        };
        let len = 6;
        let plan = SpinPlan::build(len, 3, &cfg);

        // 60 target ticks → 9 whole cycles after reserving the offset.
        let expected_steps = ((60 - 3) / len) * len + 3;
        assert_eq!(plan.len(), expected_steps + 2);
        assert_eq!(*plan.positions().last().unwrap(), 3);
    }

    #[test]
    fn test_short_duration_still_spins_one_cycle() {
        let cfg = SpinnerConfig {
            duration_ms: 10,
            fps: 30,
            overshoot: false,
            ..SpinnerConfig::default()
        };
        let plan = SpinPlan::build(5, 2, &cfg);
        assert!(plan.len() >= 5);
        assert_eq!(*plan.positions().last().unwrap(), 2);
    }

    #[test]
    fn test_single_name_ring_lands_immediately() {
        let plan = SpinPlan::build(1, 0, &config(true));
        assert_eq!(plan.positions(), &[0]);
    }

    #[test]
    fn test_final_index_wraps() {
        let plan = SpinPlan::build(4, 11, &config(false));
        assert_eq!(plan.final_index(), 3);
        assert_eq!(*plan.positions().last().unwrap(), 3);
    }
}
