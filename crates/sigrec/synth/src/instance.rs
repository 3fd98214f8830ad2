//! Sealed record instances.

use std::fmt;
use std::hash::{DefaultHasher, Hasher};
use std::sync::Arc;

use sigrec_types::{ParamKind, Value};

use crate::error::RecordError;
use crate::record::RecordType;

/// An instance of a synthesized record type.
///
/// Sealed at construction: every attribute value is written exactly once,
/// in layout order, before the instance becomes visible, and no mutator
/// exists. [`Record::set`] and [`Record::delete`] are present only to fail.
/// Instances are freely shareable across threads.
#[derive(Debug, Clone)]
pub struct Record {
    ty: Arc<RecordType>,
    values: Box<[Value]>,
}

impl Record {
    /// Seal bound values into an instance. Only the constructor produced by
    /// synthesis calls this; `values` is already in layout order.
    pub(crate) fn sealed(ty: Arc<RecordType>, values: Box<[Value]>) -> Self {
        Self { ty, values }
    }

    /// The synthesized type this record instantiates.
    pub fn ty(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// The value of the named attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let i = self.ty.layout().position(name)?;
        self.values.get(i)
    }

    /// The value at `index` in layout order.
    pub fn index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attempt to assign an attribute. Always fails: records are immutable.
    pub fn set(&self, attribute: &str, _value: Value) -> Result<(), RecordError> {
        Err(RecordError::Immutable {
            type_name: self.ty.name().to_string(),
            attribute: attribute.to_string(),
        })
    }

    /// Attempt to delete an attribute. Always fails: records are immutable.
    pub fn delete(&self, attribute: &str) -> Result<(), RecordError> {
        Err(RecordError::Immutable {
            type_name: self.ty.name().to_string(),
            attribute: attribute.to_string(),
        })
    }

    /// Structural comparison.
    ///
    /// `None` when the two layouts differ (the comparison is not
    /// applicable, letting the caller fall back to another protocol);
    /// otherwise whether every attribute pair compares equal in layout
    /// order. Two instances of distinct types with identical layouts can
    /// compare equal.
    pub fn structural_eq(&self, other: &Record) -> Option<bool> {
        if !self.ty.layout().matches(other.ty.layout()) {
            return None;
        }
        Some(
            self.values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a == b),
        )
    }

    /// Hash the ordered tuple of attribute values.
    ///
    /// Fails with [`RecordError::Unhashable`] naming the first attribute
    /// holding an unhashable value; the record stays valid afterwards.
    /// Equal records hash equal.
    pub fn try_hash(&self) -> Result<u64, RecordError> {
        let mut state = DefaultHasher::new();
        for (slot, value) in self.ty.layout().slots().iter().zip(self.values.iter()) {
            value.try_hash(&mut state).map_err(|_| RecordError::Unhashable {
                type_name: self.ty.name().to_string(),
                attribute: slot.name.clone(),
            })?;
        }
        Ok(state.finish())
    }

    /// The values pattern destructuring binds positionally: one per
    /// `match_args` name, in declaration order.
    pub fn match_values(&self) -> &[Value] {
        &self.values[..self.ty.match_args().len()]
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other) == Some(true)
    }
}

fn sep(f: &mut fmt::Formatter<'_>, wrote: &mut bool) -> fmt::Result {
    if *wrote {
        write!(f, ", ")?;
    }
    *wrote = true;
    Ok(())
}

impl fmt::Display for Record {
    /// Render `TypeName(v1, v2, name=v3, ...)`.
    ///
    /// Positional-capable values render positionally, keyword-only values
    /// as `name=value`, and collector contents spread as trailing
    /// positional/keyword values. The output re-parses through the reader
    /// into an equal instance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ty.name())?;
        let mut wrote = false;
        let params = self.ty.signature().params();
        for (param, value) in params.iter().zip(self.values.iter()) {
            match param.kind() {
                ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword => {
                    sep(f, &mut wrote)?;
                    write!(f, "{}", value)?;
                }
                ParamKind::KeywordOnly => {
                    sep(f, &mut wrote)?;
                    write!(f, "{}={}", param.name(), value)?;
                }
                ParamKind::VarPositional => {
                    if let Value::Tuple(items) = value {
                        for item in items {
                            sep(f, &mut wrote)?;
                            write!(f, "{}", item)?;
                        }
                    }
                }
                ParamKind::VarKeyword => {
                    if let Value::Map(entries) = value {
                        for (name, item) in entries {
                            sep(f, &mut wrote)?;
                            write!(f, "{}={}", name, item)?;
                        }
                    }
                }
            }
        }
        write!(f, ")")
    }
}
