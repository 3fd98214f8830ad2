//! Dynamic runtime values held by record attributes.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when hashing reaches a value kind that is not hashable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value kind is not hashable")]
pub struct UnhashableValue;

/// A dynamic value stored in a record attribute, a parameter default, or a
/// variadic collector container.
///
/// `Tuple` is the immutable sequence used by the positional collector and is
/// hashable; `List` and `Map` model mutable collections and refuse hashing,
/// which surfaces lazily when a record holding one is hashed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The absent/none value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A text string.
    Str(String),
    /// An immutable ordered sequence.
    Tuple(Vec<Value>),
    /// A mutable ordered sequence (unhashable).
    List(Vec<Value>),
    /// A string-keyed mapping preserving insertion order (unhashable).
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Short kind name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Whether this value (recursively) supports hashing.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Map(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    /// Feed this value into `state`.
    ///
    /// Equal values feed identical bytes, so equal values hash equal.
    /// Fails with [`UnhashableValue`] on a `List` or `Map` at any depth.
    pub fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), UnhashableValue> {
        match self {
            Value::Unit => state.write_u8(0),
            Value::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Value::Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Value::Float(x) => {
                state.write_u8(3);
                // -0.0 == 0.0, so both must hash identically.
                let bits = if *x == 0.0 { 0u64 } else { x.to_bits() };
                bits.hash(state);
            }
            Value::Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Value::Tuple(items) => {
                state.write_u8(5);
                items.len().hash(state);
                for item in items {
                    item.try_hash(state)?;
                }
            }
            Value::List(_) | Value::Map(_) => return Err(UnhashableValue),
        }
        Ok(())
    }

    /// Canonical literal text for this value.
    ///
    /// The output re-parses to an equal value through the reader module of
    /// the synthesis engine.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

fn write_str_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for ch in s.chars() {
        match ch {
            '\\' => write!(f, "\\\\")?,
            '\'' => write!(f, "\\'")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            _ => write!(f, "{}", ch)?,
        }
    }
    write!(f, "'")
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            // `{:?}` keeps a decimal point or exponent, so the text
            // re-parses as a float rather than an int.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write_str_literal(f, s),
            Value::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_str_literal(f, key)?;
                    write!(f, ": {}", value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
