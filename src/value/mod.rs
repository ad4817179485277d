//! # Typed Values
//!
//! Conversion of raw command-line tokens into typed values.
//!
//! ## Kinds
//!
//! | Kind | Rust types | Accepted tokens |
//! |------|------------|-----------------|
//! | `string` | `String` | anything (identity) |
//! | `int8`..`int64` | `i8`, `i16`, `i32`, `i64` | base-10, signed, range-checked |
//! | `bool` | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `float64` | `f64` | none by default (see [`Coercion`]) |
//!
//! Parsing is fixed at base 10 for every integer, including when the
//! command object carries its own radix setting. A radix option configures
//! what an operation does with its arguments, never how they are parsed.
//!
//! ## Key Types
//!
//! - [`Kind`] - The declared kind of a field or parameter
//! - [`Value`] - A coerced token
//! - [`Coercion`] - Pluggable token conversion policy
//! - [`FieldValue`] / [`Params`] - Bridges between values and Rust types

mod coerce;
mod convert;
mod kind;

pub use coerce::{CoerceError, Coercion, StandardCoercion};
pub use convert::{FieldValue, Params};
pub use kind::{IntWidth, Kind, Value};
