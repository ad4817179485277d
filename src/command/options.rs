//! Option store: binds `--name[=value]` tokens onto fields

use super::error::DispatchError;
use super::group::CommandGroup;
use super::registry::title_case;
use super::tokens::ParsedOption;
use crate::value::{CoerceError, Coercion, Kind, StandardCoercion, Value};

impl<T> CommandGroup<T> {
    /// Applies one option token (prefix already stripped) to `target`
    pub fn apply_option(&self, target: &mut T, raw: &str) -> Result<(), DispatchError> {
        self.apply_parsed(target, ParsedOption::parse(raw), &StandardCoercion)
    }

    /// Looks up the option by its title-cased name and assigns the value
    ///
    /// A bare boolean option is set to true. Any other option needs a
    /// non-empty value. On error the field keeps its previous value.
    pub(crate) fn apply_parsed(
        &self,
        target: &mut T,
        option: ParsedOption<'_>,
        coercion: &dyn Coercion,
    ) -> Result<(), DispatchError> {
        let slot = self
            .options
            .get(&title_case(option.name))
            .ok_or_else(|| DispatchError::UnknownOption(option.name.to_string()))?;

        let (token, value) = match option.value {
            Some(raw) if !raw.is_empty() || slot.kind == Kind::Bool => {
                (raw, coercion.coerce(raw, slot.kind)?)
            }
            None if slot.kind == Kind::Bool => ("true", Value::Bool(true)),
            _ => return Err(DispatchError::MissingOptionValue(option.name.to_string())),
        };

        if !value.is(slot.kind) || !(slot.assign)(target, value) {
            return Err(CoerceError::Conversion {
                token: token.to_string(),
                kind: slot.kind,
            }
            .into());
        }

        tracing::debug!(group = %self.name(), option = %slot.name, value = token, "applied option");
        Ok(())
    }
}
