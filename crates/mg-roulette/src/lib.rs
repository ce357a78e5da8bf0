//! # mg-roulette — Roulette spinner engine for MissionGacha
//!
//! Builds the eligible reward pool, draws one weighted winner, and plays a
//! single-line terminal roulette that visibly lands on the pre-selected
//! outcome.
//!
//! ## Architecture
//!
//! ```text
//! build_pool ─→ pick_index
//!                   │
//!                   v
//!             SpinPlan (spin-up → overshoot → backtrack → land)
//!                   │
//!                   ├── DelayCurve (quadratic ease-out pacing)
//!                   v
//!               spin() ─→ FrameSink (terminal, or captured frames in tests)
//! ```

pub mod config;
pub mod palette;
pub mod pool;
pub mod render;
pub mod select;
pub mod sequence;
pub mod spinner;
pub mod timing;

pub use config::*;
pub use palette::*;
pub use pool::*;
pub use render::*;
pub use select::*;
pub use sequence::*;
pub use spinner::*;
pub use timing::*;
