#![deny(unsafe_code)]
//! # sigrec-types
//!
//! Shared data model for the Sigrec workspace.
//!
//! Provides the dynamic [`Value`] held by record attributes, the
//! [`Parameter`]/[`ParamKind`] descriptors that describe one declared
//! parameter, and the validated [`Signature`] that the synthesis engine
//! consumes.

pub mod error;
pub mod signature;
pub mod value;

pub use error::SpecError;
pub use signature::{is_identifier, is_reserved_word, ParamKind, Parameter, Signature};
pub use value::{UnhashableValue, Value};
