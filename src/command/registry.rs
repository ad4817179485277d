//! Discovery of options, operations and child groups
//!
//! Runs once per command group, when it is built. Lookup keys are
//! normalized here:
//!
//! - operations and child groups by lower-casing (`Add` answers to `add`)
//! - options by title-casing (`--path` matches a field named `Path`)

use std::any::TypeId;
use std::collections::BTreeMap;

use super::describe::{Command, Describe};
use super::error::DispatchError;
use super::group::CommandGroup;

/// Upper-cases the first character of an option or field name
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<T: Command> CommandGroup<T> {
    /// Builds the command group tree for `T`, addressed as `name`
    pub fn discover(name: impl Into<String>) -> Result<Self, DispatchError> {
        let mut ancestry = Vec::new();
        Self::discover_within(name.into(), &mut ancestry)
    }

    pub(crate) fn discover_within(
        name: String,
        ancestry: &mut Vec<TypeId>,
    ) -> Result<Self, DispatchError> {
        let id = TypeId::of::<T>();
        if ancestry.contains(&id) {
            return Err(DispatchError::RecursiveGroup(name));
        }

        ancestry.push(id);
        let group = Self::from_description(name, ancestry);
        ancestry.pop();
        group
    }

    fn from_description(name: String, ancestry: &mut Vec<TypeId>) -> Result<Self, DispatchError> {
        let mut described = Describe::new();
        T::describe(&mut described);

        let mut operations = BTreeMap::new();
        for operation in described.operations {
            let key = operation.name.to_lowercase();
            if operations.contains_key(&key) {
                return Err(DispatchError::DuplicateOperation(operation.name));
            }
            operations.insert(key, operation);
        }

        let mut options = BTreeMap::new();
        for option in described.options {
            let key = title_case(&option.name);
            if options.contains_key(&key) {
                return Err(DispatchError::DuplicateOption(option.name));
            }
            options.insert(key, option);
        }

        let mut children = BTreeMap::new();
        for child in described.groups {
            let key = child.name.to_lowercase();
            if children.contains_key(&key) {
                return Err(DispatchError::DuplicateGroup(child.name));
            }
            let group = (child.build)(key.clone(), ancestry)?;
            children.insert(key, group);
        }

        tracing::trace!(
            group = %name,
            operations = operations.len(),
            options = options.len(),
            children = children.len(),
            "discovered command group"
        );

        Ok(Self::from_parts(name, operations, options, children))
    }
}
