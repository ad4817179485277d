//! Child command groups reached through a field of their parent

use super::describe::Command;
use super::error::{DispatchError, Failure};
use super::group::{CommandGroup, Scope};
use super::tokens::TokenStream;

type Access<T, C> = Box<dyn Fn(&mut T) -> Option<&mut C>>;

/// A child group, erased over the child's object type
pub(crate) trait Subgroup<T> {
    fn name(&self) -> &str;

    fn resolve(
        &self,
        parent: &mut T,
        tokens: TokenStream<'_>,
        scope: &Scope<'_>,
    ) -> Result<(), Failure>;
}

pub(crate) struct Nested<T, C> {
    group: CommandGroup<C>,
    access: Access<T, C>,
}

impl<T, C: Command> Nested<T, C> {
    pub(crate) fn new<F>(group: CommandGroup<C>, access: F) -> Self
    where
        F: Fn(&mut T) -> Option<&mut C> + 'static,
    {
        Self {
            group,
            access: Box::new(access),
        }
    }
}

impl<T, C: Command> Subgroup<T> for Nested<T, C> {
    fn name(&self) -> &str {
        self.group.name()
    }

    fn resolve(
        &self,
        parent: &mut T,
        tokens: TokenStream<'_>,
        scope: &Scope<'_>,
    ) -> Result<(), Failure> {
        match (self.access)(parent) {
            Some(target) => self.group.resolve(target, tokens, scope),
            None => Err(Failure::new(
                DispatchError::InvalidRootObject(self.group.name().to_string()),
                self.group.help_at(scope.path()),
            )),
        }
    }
}
