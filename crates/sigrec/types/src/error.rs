//! Error types for signature extraction and validation.

use thiserror::Error;

use crate::signature::ParamKind;

/// Errors raised while validating a parameter specification, before any
/// record type is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The same parameter name was declared more than once.
    #[error("duplicate parameter name `{0}`")]
    DuplicateParameter(String),

    /// A parameter name is not a valid identifier.
    #[error("`{0}` is not a valid parameter name")]
    InvalidName(String),

    /// A parameter name collides with a literal of the representation
    /// grammar.
    #[error("`{0}` is a reserved word and cannot name a parameter")]
    ReservedName(String),

    /// Parameter kinds appear out of declaration order.
    #[error("{kind} parameter `{name}` cannot follow a {prev} parameter")]
    KindOrder {
        /// Name of the offending parameter.
        name: String,
        /// Kind of the offending parameter.
        kind: ParamKind,
        /// Kind of the parameter it illegally follows.
        prev: ParamKind,
    },

    /// More than one variadic collector of the same kind was declared.
    #[error("more than one {0} collector declared")]
    DuplicateCollector(ParamKind),

    /// A required positional parameter follows one with a default.
    #[error("required parameter `{0}` follows a parameter with a default")]
    DefaultOrder(String),

    /// A variadic collector was declared with a default value.
    #[error("variadic collector `{0}` cannot carry a default")]
    CollectorDefault(String),

    /// The return annotation is neither `None` nor unset.
    #[error("return annotation can only be `None` or unset, got `{0}`")]
    ReturnAnnotation(String),

    /// The record type name is not a valid identifier.
    #[error("`{0}` is not a valid type name")]
    InvalidTypeName(String),
}
