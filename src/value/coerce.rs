//! Token coercion policy

use thiserror::Error;

use super::kind::{Kind, Value};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoerceError {
    #[error("{token} is not a valid {kind}")]
    Conversion { token: String, kind: Kind },

    #[error("argument type {0} is not supported")]
    UnsupportedKind(Kind),
}

/// Converts a raw token into a value of the requested kind
///
/// The same policy is used for option values and positional arguments.
/// Implement this to support kinds beyond [`StandardCoercion`], falling
/// back to it for the rest.
pub trait Coercion {
    fn coerce(&self, token: &str, kind: Kind) -> Result<Value, CoerceError>;
}

/// String, integer and boolean coercion
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCoercion;

impl Coercion for StandardCoercion {
    fn coerce(&self, token: &str, kind: Kind) -> Result<Value, CoerceError> {
        let invalid = || CoerceError::Conversion {
            token: token.to_string(),
            kind,
        };

        match kind {
            Kind::String => Ok(Value::String(token.to_string())),
            Kind::Int(width) => {
                let n: i64 = token.parse().map_err(|_| invalid())?;
                if width.contains(n) {
                    Ok(Value::Int(n))
                } else {
                    Err(invalid())
                }
            }
            Kind::Bool => parse_bool(token).map(Value::Bool).ok_or_else(invalid),
            Kind::Float | Kind::Custom(_) => Err(CoerceError::UnsupportedKind(kind)),
        }
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntWidth;

    const I32: Kind = Kind::Int(IntWidth::W32);

    #[test]
    fn string_is_identity() {
        let value = StandardCoercion.coerce("hello world", Kind::String).unwrap();
        assert_eq!(value, Value::String("hello world".to_string()));
    }

    #[test]
    fn integers_are_base_ten() {
        assert_eq!(StandardCoercion.coerce("42", I32).unwrap(), Value::Int(42));
        assert_eq!(StandardCoercion.coerce("-7", I32).unwrap(), Value::Int(-7));
        assert_eq!(StandardCoercion.coerce("+7", I32).unwrap(), Value::Int(7));

        let err = StandardCoercion.coerce("f", I32).unwrap_err();
        assert_eq!(
            err,
            CoerceError::Conversion {
                token: "f".to_string(),
                kind: I32
            }
        );
        assert!(StandardCoercion.coerce("0x10", I32).is_err());
        assert!(StandardCoercion.coerce("", I32).is_err());
    }

    #[test]
    fn integers_respect_width() {
        let i8_kind = Kind::Int(IntWidth::W8);
        assert_eq!(StandardCoercion.coerce("-128", i8_kind).unwrap(), Value::Int(-128));
        assert!(StandardCoercion.coerce("128", i8_kind).is_err());
        assert!(StandardCoercion.coerce("2147483648", I32).is_err());
        assert!(StandardCoercion
            .coerce("2147483648", Kind::Int(IntWidth::W64))
            .is_ok());
    }

    #[test]
    fn boolean_lexicon() {
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(StandardCoercion.coerce(token, Kind::Bool).unwrap(), Value::Bool(true));
        }
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(StandardCoercion.coerce(token, Kind::Bool).unwrap(), Value::Bool(false));
        }
        assert!(StandardCoercion.coerce("yes", Kind::Bool).is_err());
        assert!(StandardCoercion.coerce("tRuE", Kind::Bool).is_err());
    }

    #[test]
    fn unsupported_kinds() {
        assert_eq!(
            StandardCoercion.coerce("1.5", Kind::Float).unwrap_err(),
            CoerceError::UnsupportedKind(Kind::Float)
        );
        assert_eq!(
            StandardCoercion.coerce("5s", Kind::Custom("duration")).unwrap_err(),
            CoerceError::UnsupportedKind(Kind::Custom("duration"))
        );
    }

    #[test]
    fn error_messages() {
        let err = StandardCoercion.coerce("abc", I32).unwrap_err();
        assert_eq!(err.to_string(), "abc is not a valid int32");

        let err = StandardCoercion.coerce("1.0", Kind::Float).unwrap_err();
        assert_eq!(err.to_string(), "argument type float64 is not supported");
    }
}
