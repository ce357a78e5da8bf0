//! The roulette spinner — plays a spin plan against a frame sink

use std::time::Duration;

use rand::Rng;

use mg_core::{GachaError, GachaResult};

use crate::config::SpinnerConfig;
use crate::render::{FrameSink, Pace, compose_frame, compose_frame_styled};
use crate::sequence::SpinPlan;
use crate::timing::DelayCurve;

/// Hold time for each landing blink phase
const BLINK_HOLD: Duration = Duration::from_millis(80);

/// Celebration glyph candidates
const CONFETTI_GLYPHS: [&str; 8] = ["✦", "✧", "★", "☆", "✸", "❋", "*", "·"];

/// Glyph count on the celebration line
const CONFETTI_LEN: usize = 24;

/// How a spin ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// Ran to completion and landed on the target
    Landed,
    /// User interrupt during playback; later phases were skipped
    Interrupted,
}

/// Play the full roulette animation for `names`, landing on `final_index`.
///
/// The winner is decided before the animation starts; the spin is purely
/// presentational. Sequencing comes from [`SpinPlan`], pacing from
/// [`DelayCurve`], and every frame goes through the sink, which keeps the
/// engine testable without a terminal. The rng only feeds celebration
/// randomness, so a seeded run replays identically.
pub fn spin<S: FrameSink, R: Rng + ?Sized>(
    names: &[String],
    final_index: usize,
    config: &SpinnerConfig,
    sink: &mut S,
    rng: &mut R,
) -> GachaResult<SpinOutcome> {
    if names.is_empty() {
        return Err(GachaError::EmptyPool);
    }
    let config = config.sanitized();
    let final_index = final_index % names.len();
    let width = sink.width();

    let plan = SpinPlan::build(names.len(), final_index, &config);
    let delays = DelayCurve::build(&config, plan.len());

    for (tick, &position) in plan.positions().iter().enumerate() {
        sink.draw(&compose_frame(names, position, &config, width))?;
        if sink.wait(delays.get(tick))? == Pace::Interrupted {
            sink.finish()?;
            log::debug!("spin interrupted at tick {tick}");
            return Ok(SpinOutcome::Interrupted);
        }
    }

    // Landing blink: neutral then emphasized, ending emphasized.
    for _ in 0..config.final_blink_count {
        sink.draw(&compose_frame_styled(names, final_index, &config, width, false))?;
        if sink.wait(BLINK_HOLD)? == Pace::Interrupted {
            sink.finish()?;
            return Ok(SpinOutcome::Interrupted);
        }
        sink.draw(&compose_frame_styled(names, final_index, &config, width, true))?;
        if sink.wait(BLINK_HOLD)? == Pace::Interrupted {
            sink.finish()?;
            return Ok(SpinOutcome::Interrupted);
        }
    }
    sink.finish()?;

    if config.confetti {
        let line: String = (0..CONFETTI_LEN)
            .map(|_| CONFETTI_GLYPHS[rng.random_range(0..CONFETTI_GLYPHS.len())])
            .collect();
        sink.draw(&line)?;
        sink.finish()?;
    }
    if config.beep {
        sink.bell()?;
    }

    Ok(SpinOutcome::Landed)
}
