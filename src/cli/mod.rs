//! # Process Surface
//!
//! Connects a command object to the running process: reads the argument
//! vector once, dispatches it, prints help or errors, and turns the result
//! into an exit code.
//!
//! ## Exit Behavior
//!
//! | Outcome | Output | Exit code |
//! |---------|--------|-----------|
//! | Operation invoked | whatever the operation prints | success |
//! | No command typed | help on stdout | success |
//! | Any other failure | `Error: ...` and help on stderr | failure |
//!
//! ## Logging
//!
//! Call [`init_logging()`] first to see dispatch diagnostics. The filter
//! is read from `SIMPLECLI_LOG`, e.g. `SIMPLECLI_LOG=simplecli=debug`.
//!
//! ## Entry Points
//!
//! - [`handle()`] - Dispatch the process arguments
//! - [`run()`] - Dispatch an explicit program name and argument list

mod logging;
mod output;
mod run;
mod settings;

pub use logging::{init_logging, LOG_ENV};
pub use output::{Output, OutputFormat};
pub use run::{handle, handle_with, run};
pub use settings::{Settings, SettingsError};
