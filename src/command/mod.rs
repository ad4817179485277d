//! # Command Dispatch
//!
//! Derives a command-line surface from a described command object and
//! dispatches an argument vector into it.
//!
//! ## Command Line
//!
//! ```text
//! <program> [--option[=value] ...] <command> [<subcommand> ...] [args...]
//! ```
//!
//! | Object member | Declared with | Typed as |
//! |---------------|---------------|----------|
//! | Option field | [`Describe::option`] | `--port=9090`, `--verbose` |
//! | Operation | [`Describe::operation`] | `start`, `add 1 2` |
//! | Nested command object | [`Describe::group`] | `database create` |
//!
//! Each nested group accepts its own leading options:
//! `app --port=1 database --path=db.sqlite create`.
//!
//! ## Failure
//!
//! Dispatch returns a [`Failure`] pairing the [`DispatchError`] with the
//! [`Help`] of the deepest group reached. [`DispatchError::NoCommand`]
//! (no command typed) is the one clean outcome.
//!
//! ## Key Types
//!
//! - [`Command`] - Implemented by command objects
//! - [`Describe`] - Registration builder for options, operations and groups
//! - [`CommandGroup`] - Discovered dispatch tree for one object type
//! - [`TokenStream`] - Left-to-right argument cursor

mod describe;
mod error;
mod group;
mod help;
mod nested;
mod options;
mod registry;
mod tokens;

pub use describe::{Command, Describe, OperationDef, OptionDef};
pub use error::{DispatchError, Failure};
pub use group::{dispatch, CommandGroup};
pub use help::{CommandHelp, Help, HelpLayout, OptionHelp};
pub use registry::title_case;
pub use tokens::{ParsedOption, TokenStream, OPTION_PREFIX};
