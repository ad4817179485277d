//! The capability interface a command object implements
//!
//! A command object declares, once per type, the fields that become
//! options, the operations that become subcommands, and the fields that
//! hold nested command objects:
//!
//! ```
//! use simplecli::{Command, Describe};
//!
//! struct Calc {
//!     base: i32,
//!     verbose: bool,
//! }
//!
//! impl Command for Calc {
//!     fn describe(cli: &mut Describe<Self>) {
//!         cli.option("Base", |calc| &mut calc.base).tag("radix of the operands");
//!         cli.option("Verbose", |calc| &mut calc.verbose);
//!         cli.operation("Add", |calc, (x, y): (i32, i32)| {
//!             println!("{}", x + y);
//!         });
//!     }
//! }
//! ```
//!
//! Names are given as declared on the type. Matching rules (lower case
//! for operations and groups, title case for options) are applied when
//! the command group is built.

use std::any::TypeId;

use super::error::DispatchError;
use super::group::CommandGroup;
use super::nested::{Nested, Subgroup};
use crate::value::{FieldValue, Kind, Params, Value};

/// A type that can drive a command group
pub trait Command: Sized + 'static {
    fn describe(cli: &mut Describe<Self>);
}

pub(crate) type Assign<T> = Box<dyn Fn(&mut T, Value) -> bool>;
pub(crate) type Invoke<T> = Box<dyn Fn(&mut T, Vec<Value>) -> Result<(), usize>>;
pub(crate) type BuildGroup<T> =
    Box<dyn FnOnce(String, &mut Vec<TypeId>) -> Result<Box<dyn Subgroup<T>>, DispatchError>>;

/// An option field: a named, typed setter
pub struct OptionDef<T> {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) tag: Option<String>,
    pub(crate) assign: Assign<T>,
}

impl<T> OptionDef<T> {
    /// Attaches a description shown in help
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// An operation: a named, fixed-arity handler
pub struct OperationDef<T> {
    pub(crate) name: String,
    pub(crate) params: Vec<Kind>,
    pub(crate) about: Option<String>,
    pub(crate) invoke: Invoke<T>,
}

impl<T> OperationDef<T> {
    /// Attaches a one-line summary shown in help
    pub fn about(&mut self, about: impl Into<String>) -> &mut Self {
        self.about = Some(about.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Kind] {
        &self.params
    }
}

pub(crate) struct GroupDef<T> {
    pub(crate) name: String,
    pub(crate) build: BuildGroup<T>,
}

/// Registration builder filled in by [`Command::describe`]
pub struct Describe<T> {
    pub(crate) options: Vec<OptionDef<T>>,
    pub(crate) operations: Vec<OperationDef<T>>,
    pub(crate) groups: Vec<GroupDef<T>>,
}

impl<T: Command> Describe<T> {
    pub(crate) fn new() -> Self {
        Self {
            options: Vec::new(),
            operations: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Declares an option backed by the field `access` returns
    pub fn option<V, F>(&mut self, name: &str, access: F) -> &mut OptionDef<T>
    where
        V: FieldValue,
        F: Fn(&mut T) -> &mut V + 'static,
    {
        let assign = move |target: &mut T, value: Value| match V::from_value(value) {
            Some(value) => {
                *access(target) = value;
                true
            }
            None => false,
        };

        let index = self.options.len();
        self.options.push(OptionDef {
            name: name.to_string(),
            kind: V::KIND,
            tag: None,
            assign: Box::new(assign),
        });
        &mut self.options[index]
    }

    /// Declares an operation; its parameter kinds come from `P`
    pub fn operation<P, F>(&mut self, name: &str, handler: F) -> &mut OperationDef<T>
    where
        P: Params,
        F: Fn(&mut T, P) + 'static,
    {
        let invoke = move |target: &mut T, values: Vec<Value>| -> Result<(), usize> {
            let params = P::from_values(values)?;
            handler(target, params);
            Ok(())
        };

        let index = self.operations.len();
        self.operations.push(OperationDef {
            name: name.to_string(),
            params: P::kinds(),
            about: None,
            invoke: Box::new(invoke),
        });
        &mut self.operations[index]
    }

    /// Declares a field holding a nested command object
    pub fn group<C, F>(&mut self, name: &str, access: F)
    where
        C: Command,
        F: Fn(&mut T) -> &mut C + 'static,
    {
        self.optional_group(name, move |target: &mut T| Some(access(target)));
    }

    /// Declares a field that may or may not hold a nested command object
    ///
    /// Dispatching into the group while the field is empty fails with
    /// [`DispatchError::InvalidRootObject`].
    pub fn optional_group<C, F>(&mut self, name: &str, access: F)
    where
        C: Command,
        F: Fn(&mut T) -> Option<&mut C> + 'static,
    {
        let build = move |key: String,
                          ancestry: &mut Vec<TypeId>|
              -> Result<Box<dyn Subgroup<T>>, DispatchError> {
            let group = CommandGroup::<C>::discover_within(key, ancestry)?;
            Ok(Box::new(Nested::new(group, access)))
        };

        self.groups.push(GroupDef {
            name: name.to_string(),
            build: Box::new(build),
        });
    }
}
