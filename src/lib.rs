//! TUI Starship (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_starship::{core,input,term,types}` and hosts the
//! binary, the integration tests and the benchmarks.

pub use tui_starship_core as core;
pub use tui_starship_input as input;
pub use tui_starship_term as term;
pub use tui_starship_types as types;
