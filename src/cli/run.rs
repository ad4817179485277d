//! Entry points

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

use super::output::Output;
use super::settings::Settings;
use crate::command::{dispatch, Command};

/// Dispatches the process arguments into `target` with default settings
pub fn handle<T: Command>(target: &mut T) -> ExitCode {
    handle_with(target, &Settings::default())
}

/// Dispatches the process arguments into `target`
///
/// The root group is named after the executable's file name.
pub fn handle_with<T: Command>(target: &mut T, settings: &Settings) -> ExitCode {
    let (program, args) = process_args(std::env::args_os());
    run(&program, args, target, settings)
}

/// Splits the raw argument vector into program name and arguments
///
/// Arguments that are not valid UTF-8 are converted lossily, so they reach
/// dispatch as tokens that match nothing and fail with help.
fn process_args(argv: impl IntoIterator<Item = OsString>) -> (String, Vec<String>) {
    let mut argv = argv.into_iter();
    let program = argv
        .next()
        .map(|argv0| program_name(&argv0.to_string_lossy()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let args = argv
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    (program, args)
}

/// Dispatches `args` into `target` and reports the outcome
pub fn run<T, I, S>(program: &str, args: I, target: &mut T, settings: &Settings) -> ExitCode
where
    T: Command,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    if execute(program, &args, target, settings) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Dispatches and prints help or errors; returns true on success
fn execute<T: Command>(program: &str, args: &[String], target: &mut T, settings: &Settings) -> bool {
    let output = Output::new(settings.format, settings.layout.clone());

    tracing::debug!(program, ?args, "dispatching");

    match dispatch(program, args, target) {
        Ok(()) => true,
        Err(failure) if failure.is_clean() => {
            output.help(&failure.help);
            true
        }
        Err(failure) => {
            tracing::debug!(error = %failure.error, "dispatch failed");
            output.failure(&failure.error.to_string(), &failure.help);
            false
        }
    }
}

fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.to_string())
}
