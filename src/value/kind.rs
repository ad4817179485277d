//! Value kinds and coerced values

use std::fmt;

/// Bit width of a signed integer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Returns the number of bits
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Returns true if `n` is representable at this width
    pub fn contains(self, n: i64) -> bool {
        match self {
            IntWidth::W8 => i8::try_from(n).is_ok(),
            IntWidth::W16 => i16::try_from(n).is_ok(),
            IntWidth::W32 => i32::try_from(n).is_ok(),
            IntWidth::W64 => true,
        }
    }
}

/// The declared kind of an option field or operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int(IntWidth),
    Bool,
    Float,
    /// A caller-defined kind, named for help output
    Custom(&'static str),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => f.write_str("string"),
            Kind::Int(width) => write!(f, "int{}", width.bits()),
            Kind::Bool => f.write_str("bool"),
            Kind::Float => f.write_str("float64"),
            Kind::Custom(name) => f.write_str(name),
        }
    }
}

/// A token converted to its declared kind
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl Value {
    /// Returns true if this value can be assigned to a field of `kind`
    pub fn is(&self, kind: Kind) -> bool {
        match (self, kind) {
            (Value::String(_), Kind::String) => true,
            (Value::Int(n), Kind::Int(width)) => width.contains(*n),
            (Value::Bool(_), Kind::Bool) => true,
            (Value::Float(_), Kind::Float) => true,
            (_, Kind::Custom(_)) => true,
            _ => false,
        }
    }
}
