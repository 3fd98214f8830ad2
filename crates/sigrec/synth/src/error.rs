//! Error types for synthesis, construction, and record operations.

use thiserror::Error;

use sigrec_types::SpecError;

/// Errors raised by the synthesis engine and by synthesized records.
///
/// Construction errors are fatal only to that one construction attempt;
/// the record type stays usable. Mutation and hashing errors never corrupt
/// the record they were raised on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// An invalid parameter specification, detected before any type exists.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A required parameter without a default received no value.
    #[error("{type_name}() missing required argument `{name}`")]
    MissingArgument {
        /// Name of the record type under construction.
        type_name: String,
        /// Name of the unfilled parameter.
        name: String,
    },

    /// More positional values than positional parameters, with no
    /// var-positional collector to absorb them.
    #[error("{type_name}() takes {expected} positional arguments but {given} were given")]
    TooManyArguments {
        /// Name of the record type under construction.
        type_name: String,
        /// Number of positional parameters declared.
        expected: usize,
        /// Number of positional values supplied.
        given: usize,
    },

    /// A keyword value matched no parameter, with no var-keyword collector
    /// to absorb it.
    #[error("{type_name}() got an unexpected keyword argument `{name}`")]
    UnexpectedArgument {
        /// Name of the record type under construction.
        type_name: String,
        /// The unmatched keyword name.
        name: String,
    },

    /// The same parameter received a value twice.
    #[error("{type_name}() got multiple values for argument `{name}`")]
    DuplicateArgument {
        /// Name of the record type under construction.
        type_name: String,
        /// Name of the doubly-supplied parameter.
        name: String,
    },

    /// A keyword name that is not a valid identifier, or one of the
    /// representation grammar's reserved literal words.
    #[error("{type_name}() cannot use `{name}` as a keyword argument name")]
    InvalidArgumentName {
        /// Name of the record type under construction.
        type_name: String,
        /// The offending keyword name.
        name: String,
    },

    /// A post-construction assignment or deletion attempt.
    #[error("{type_name} is immutable; cannot modify attribute `{attribute}`")]
    Immutable {
        /// Name of the record type.
        type_name: String,
        /// The attribute the caller tried to modify.
        attribute: String,
    },

    /// Hashing reached an attribute holding an unhashable value.
    #[error("attribute `{attribute}` of {type_name} holds an unhashable value")]
    Unhashable {
        /// Name of the record type.
        type_name: String,
        /// The attribute holding the unhashable value.
        attribute: String,
    },

    /// A reconstruction expression failed to parse.
    #[error("parse error: {0}")]
    Parse(String),

    /// A deserialized record type whose derived metadata does not match
    /// what its signature synthesizes.
    #[error("record type `{type_name}` carries metadata inconsistent with its signature")]
    InconsistentMetadata {
        /// Name of the deserialized record type.
        type_name: String,
    },

    /// A reconstruction expression names a different type.
    #[error("expression constructs `{found}`, expected `{expected}`")]
    WrongType {
        /// The type the caller asked to reconstruct.
        expected: String,
        /// The type the expression names.
        found: String,
    },
}
