//! simplecli - Declarative command-line dispatch
//!
//! A command object describes its fields and operations once; simplecli
//! derives the whole command line from that description: `--option`
//! parsing, subcommand routing, nested command groups and help text.
//!
//! ```no_run
//! use simplecli::{Command, Describe};
//!
//! struct App {
//!     port: i32,
//! }
//!
//! impl Command for App {
//!     fn describe(cli: &mut Describe<Self>) {
//!         cli.option("Port", |app| &mut app.port).tag("port to listen on");
//!         cli.operation("Start", |app, ()| println!("Listening at {}", app.port));
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     simplecli::init_logging();
//!     simplecli::handle(&mut App { port: 8080 })
//! }
//! ```

pub mod cli;
pub mod command;
pub mod value;

pub use cli::{handle, init_logging, run, Settings};
pub use command::{dispatch, Command, CommandGroup, Describe, DispatchError, Failure, Help};
pub use value::{CoerceError, Coercion, FieldValue, Kind, StandardCoercion, Value};
