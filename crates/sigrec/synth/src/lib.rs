#![deny(unsafe_code)]
//! # sigrec-synth
//!
//! The Sigrec synthesis engine.
//!
//! Given a validated [`Signature`], [`RecordType::synthesize`] plans a fixed
//! attribute layout, derives destructuring and annotation metadata, and
//! produces an immutable record type. [`RecordType::construct`] then binds
//! arguments exactly the way the declared signature would, yielding sealed
//! [`Record`] instances with structural equality, deterministic hashing, and
//! a representation that reconstructs an equal instance.

mod bind;
mod metadata;

pub mod error;
pub mod instance;
pub mod layout;
pub mod reader;
pub mod record;

pub use error::RecordError;
pub use instance::Record;
pub use layout::{AttributeLayout, Slot, SlotKind};
pub use reader::{parse_call, parse_value, CallExpr};
pub use record::RecordType;

pub use sigrec_types::{ParamKind, Parameter, Signature, SpecError, Value};
