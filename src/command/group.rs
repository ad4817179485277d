//! Command groups and the resolution algorithm
//!
//! Resolution at one group:
//!
//! 1. Apply every leading `--option` token to this group's object.
//! 2. Take the next token. No token is [`DispatchError::NoCommand`].
//! 3. A child group with that (lower-cased) name wins: resolution
//!    continues there with the remaining tokens.
//! 4. Otherwise an operation with that name is invoked with the
//!    remaining tokens as its arguments, which must match its arity and
//!    parameter kinds exactly.
//!
//! Any failure ends the whole dispatch. Options applied before the
//! failing token stay applied.

use std::collections::BTreeMap;

use super::describe::{Command, OperationDef, OptionDef};
use super::error::{DispatchError, Failure};
use super::help::Help;
use super::nested::Subgroup;
use super::tokens::TokenStream;
use crate::value::{CoerceError, Coercion, Kind, StandardCoercion};

/// The dispatch node for one command object type
pub struct CommandGroup<T> {
    name: String,
    pub(crate) operations: BTreeMap<String, OperationDef<T>>,
    pub(crate) options: BTreeMap<String, OptionDef<T>>,
    pub(crate) children: BTreeMap<String, Box<dyn Subgroup<T>>>,
}

/// Per-dispatch state threaded through nested groups
pub(crate) struct Scope<'a> {
    coercion: &'a dyn Coercion,
    path: String,
}

impl<'a> Scope<'a> {
    fn root(coercion: &'a dyn Coercion, name: &str) -> Self {
        Self {
            coercion,
            path: name.to_string(),
        }
    }

    fn enter(&self, name: &str) -> Self {
        Self {
            coercion: self.coercion,
            path: format!("{} {}", self.path, name),
        }
    }

    /// The command path typed so far, e.g. `app database`
    pub(crate) fn path(&self) -> &str {
        &self.path
    }
}

impl<T> CommandGroup<T> {
    pub(crate) fn from_parts(
        name: String,
        operations: BTreeMap<String, OperationDef<T>>,
        options: BTreeMap<String, OptionDef<T>>,
        children: BTreeMap<String, Box<dyn Subgroup<T>>>,
    ) -> Self {
        Self {
            name,
            operations,
            options,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup keys of the operations, sorted
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Lookup keys of the child groups, sorted
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// Kind of the option registered under `key` (title-cased)
    pub fn option_kind(&self, key: &str) -> Option<Kind> {
        self.options.get(key).map(|option| option.kind)
    }

    /// Dispatches `args` against `target` with the standard coercion policy
    pub fn dispatch(&self, target: &mut T, args: &[String]) -> Result<(), Failure> {
        self.dispatch_with(&StandardCoercion, target, args)
    }

    /// Dispatches `args` against `target`, coercing tokens with `coercion`
    pub fn dispatch_with(
        &self,
        coercion: &dyn Coercion,
        target: &mut T,
        args: &[String],
    ) -> Result<(), Failure> {
        let scope = Scope::root(coercion, &self.name);
        self.resolve(target, TokenStream::new(args), &scope)
    }

    pub(crate) fn resolve(
        &self,
        target: &mut T,
        mut tokens: TokenStream<'_>,
        scope: &Scope<'_>,
    ) -> Result<(), Failure> {
        let fail = |error| Failure::new(error, self.help_at(scope.path()));

        while let Some(option) = tokens.next_option() {
            self.apply_parsed(target, option, scope.coercion)
                .map_err(fail)?;
        }

        let Some(candidate) = tokens.next_positional() else {
            return Err(fail(DispatchError::NoCommand));
        };
        let key = candidate.to_lowercase();

        if let Some(child) = self.children.get(&key) {
            tracing::debug!(group = %self.name, child = %key, "entering command group");
            return child.resolve(target, tokens, &scope.enter(child.name()));
        }

        let Some(operation) = self.operations.get(&key) else {
            return Err(fail(DispatchError::UnknownCommand(candidate.to_string())));
        };

        self.invoke(operation, target, tokens.remaining(), scope.coercion)
            .map_err(fail)
    }

    /// Coerces every argument, then calls the operation exactly once
    fn invoke(
        &self,
        operation: &OperationDef<T>,
        target: &mut T,
        args: &[String],
        coercion: &dyn Coercion,
    ) -> Result<(), DispatchError> {
        if args.len() != operation.params.len() {
            return Err(DispatchError::ArityMismatch {
                command: operation.name.to_lowercase(),
                expected: operation.params.len(),
                got: args.len(),
            });
        }

        let rejected = |index: usize| CoerceError::Conversion {
            token: args[index].clone(),
            kind: operation.params[index],
        };

        let mut values = Vec::with_capacity(args.len());
        for (index, (token, kind)) in args.iter().zip(&operation.params).enumerate() {
            let value = coercion.coerce(token, *kind)?;
            if !value.is(*kind) {
                return Err(rejected(index).into());
            }
            values.push(value);
        }

        tracing::debug!(group = %self.name, command = %operation.name, ?args, "invoking operation");
        (operation.invoke)(target, values).map_err(rejected)?;
        Ok(())
    }
}

/// Builds the command group tree for `target` and dispatches `args` into it
///
/// `program` names the root group in help output.
pub fn dispatch<T: Command>(program: &str, args: &[String], target: &mut T) -> Result<(), Failure> {
    let group = CommandGroup::<T>::discover(program)
        .map_err(|error| Failure::new(error, Help::bare(program)))?;
    group.dispatch(target, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Describe;
    use crate::value::IntWidth;

    #[derive(Default)]
    struct Calc {
        base: i32,
        verbose: bool,
        calls: Vec<String>,
    }

    impl Command for Calc {
        fn describe(cli: &mut Describe<Self>) {
            cli.option("Base", |calc| &mut calc.base);
            cli.option("Verbose", |calc| &mut calc.verbose);
            cli.operation("Add", |calc, (x, y): (i32, i32)| {
                calc.calls.push(format!("add {} {} base={}", x, y, calc.base));
            });
            cli.operation("Multiply", |calc, (x, y): (i32, i32)| {
                calc.calls.push(format!("multiply {} {}", x, y));
            });
            cli.operation("Echo", |calc, (word,): (String,)| {
                calc.calls.push(format!("echo {}", word));
            });
        }
    }

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn run(calc: &mut Calc, tokens: &[&str]) -> Result<(), Failure> {
        dispatch("calc", &argv(tokens), calc)
    }

    #[test]
    fn invokes_matching_operation_once() {
        let mut calc = Calc::default();
        run(&mut calc, &["add", "2", "3"]).unwrap();
        assert_eq!(calc.calls, vec!["add 2 3 base=0"]);
    }

    #[test]
    fn command_lookup_is_case_insensitive() {
        let mut calc = Calc::default();
        run(&mut calc, &["MULTIPLY", "4", "5"]).unwrap();
        assert_eq!(calc.calls, vec!["multiply 4 5"]);
    }

    #[test]
    fn options_are_applied_before_invocation() {
        let mut calc = Calc::default();
        run(&mut calc, &["--base=16", "--verbose", "add", "1", "1"]).unwrap();
        assert!(calc.verbose);
        assert_eq!(calc.calls, vec!["add 1 1 base=16"]);
    }

    #[test]
    fn positional_coercion_ignores_base_option() {
        let mut calc = Calc::default();
        let failure = run(&mut calc, &["--base=16", "add", "a", "f"]).unwrap_err();

        assert_eq!(
            failure.error,
            DispatchError::Coerce(CoerceError::Conversion {
                token: "a".to_string(),
                kind: Kind::Int(IntWidth::W32)
            })
        );
        assert_eq!(calc.base, 16);
        assert!(calc.calls.is_empty());
    }

    #[test]
    fn empty_invocation_is_clean() {
        let mut calc = Calc::default();
        let failure = run(&mut calc, &[]).unwrap_err();
        assert!(failure.is_clean());
        assert_eq!(failure.help.usage, "calc [options] <command>");
    }

    #[test]
    fn options_without_command_is_clean() {
        let mut calc = Calc::default();
        let failure = run(&mut calc, &["--verbose"]).unwrap_err();
        assert!(failure.is_clean());
        assert!(calc.verbose);
    }

    #[test]
    fn unknown_command() {
        let mut calc = Calc::default();
        let failure = run(&mut calc, &["unknown-command"]).unwrap_err();
        assert!(!failure.is_clean());
        assert_eq!(
            failure.error,
            DispatchError::UnknownCommand("unknown-command".to_string())
        );
    }

    #[test]
    fn arity_mismatch_never_invokes() {
        for tokens in [&["add"][..], &["add", "1"][..], &["add", "1", "2", "3"][..]] {
            let mut calc = Calc::default();
            let failure = run(&mut calc, tokens).unwrap_err();
            assert!(matches!(
                failure.error,
                DispatchError::ArityMismatch { expected: 2, .. }
            ));
            assert!(calc.calls.is_empty());
        }
    }

    #[test]
    fn option_after_command_is_positional() {
        let mut calc = Calc::default();
        run(&mut calc, &["echo", "--verbose"]).unwrap();
        assert!(!calc.verbose);
        assert_eq!(calc.calls, vec!["echo --verbose"]);
    }

    #[test]
    fn options_before_failure_stay_applied() {
        let mut calc = Calc::default();
        let failure = run(&mut calc, &["--verbose", "--base=x", "add", "1", "2"]).unwrap_err();
        assert!(matches!(failure.error, DispatchError::Coerce(_)));
        assert!(calc.verbose);
        assert_eq!(calc.base, 0);
    }
}
