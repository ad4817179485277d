//! Conversions between coerced values and Rust types

use super::kind::{IntWidth, Kind, Value};

/// A Rust type that can hold an option value or a positional argument
///
/// `KIND` is what the coercion policy is asked to produce, and what help
/// output shows for the field.
pub trait FieldValue: Sized + 'static {
    const KIND: Kind;

    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(x),
            _ => None,
        }
    }
}

macro_rules! int_field {
    ($ty:ty, $width:expr) => {
        impl FieldValue for $ty {
            const KIND: Kind = Kind::Int($width);

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Int(n) => <$ty>::try_from(n).ok(),
                    _ => None,
                }
            }
        }
    };
}

int_field!(i8, IntWidth::W8);
int_field!(i16, IntWidth::W16);
int_field!(i32, IntWidth::W32);
int_field!(i64, IntWidth::W64);

/// The positional parameter list of an operation
///
/// Implemented for tuples of up to six [`FieldValue`]s. `from_values`
/// reports the index of the first value that does not fit its slot.
pub trait Params: Sized + 'static {
    fn kinds() -> Vec<Kind>;

    fn from_values(values: Vec<Value>) -> Result<Self, usize>;
}

impl Params for () {
    fn kinds() -> Vec<Kind> {
        Vec::new()
    }

    fn from_values(values: Vec<Value>) -> Result<Self, usize> {
        if values.is_empty() {
            Ok(())
        } else {
            Err(0)
        }
    }
}

macro_rules! tuple_params {
    ($($name:ident),+) => {
        impl<$($name: FieldValue),+> Params for ($($name,)+) {
            fn kinds() -> Vec<Kind> {
                vec![$($name::KIND),+]
            }

            #[allow(unused_assignments)]
            fn from_values(values: Vec<Value>) -> Result<Self, usize> {
                let mut values = values.into_iter();
                let mut index = 0;
                let params = ($(
                    {
                        let value = values.next().ok_or(index)?;
                        let param = $name::from_value(value).ok_or(index)?;
                        index += 1;
                        param
                    },
                )+);
                match values.next() {
                    Some(_) => Err(index),
                    None => Ok(params),
                }
            }
        }
    };
}

tuple_params!(A);
tuple_params!(A, B);
tuple_params!(A, B, C);
tuple_params!(A, B, C, D);
tuple_params!(A, B, C, D, E);
tuple_params!(A, B, C, D, E, F);
