//! # mg-cli — Session orchestration for the `gacha` binary
//!
//! File stores (config, catalog, history), the draw session flow, and the
//! catalog validation report. The binary in `src/bin/main.rs` only parses
//! arguments and dispatches here.

pub mod history;
pub mod paths;
pub mod session;
pub mod store;
