//! Command-line front end for xlsx2seed.
//!
//! [`cli::Cli`] parses arguments, [`config`] resolves the sheet config,
//! [`rules::SheetRules`] holds the per-sheet ignore/only/subdivide rules and
//! [`run::Orchestrator`] drives workbooks through the core into [`writer`].

pub mod cli;
pub mod config;
pub mod logging;
pub mod rules;
pub mod run;
pub mod writer;

pub use cli::Cli;
pub use rules::SheetRules;
pub use run::{Orchestrator, RunOptions, RunSummary, SheetOutcome};
