//! Type synthesis: from a validated signature to a finished record type.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sigrec_types::{is_identifier, Signature, SpecError, Value};

use crate::bind;
use crate::error::RecordError;
use crate::instance::Record;
use crate::layout::AttributeLayout;
use crate::metadata;
use crate::reader;

/// A synthesized record type.
///
/// Produced once per declaration by [`RecordType::synthesize`] and immutable
/// afterwards; shared via `Arc` by every instance it constructs. Carries the
/// attribute layout, the destructuring name tuple (`match_args`), the
/// exported annotation mapping, and the docstring.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecordType")]
pub struct RecordType {
    name: String,
    signature: Signature,
    layout: AttributeLayout,
    match_args: Vec<String>,
    annotations: IndexMap<String, String>,
    doc: Option<String>,
}

/// Unvalidated wire form of [`RecordType`]; deserialization re-synthesizes
/// from the signature and rejects payloads whose derived fields disagree.
#[derive(Deserialize)]
struct RawRecordType {
    name: String,
    signature: Signature,
    layout: AttributeLayout,
    match_args: Vec<String>,
    annotations: IndexMap<String, String>,
    doc: Option<String>,
}

impl TryFrom<RawRecordType> for RecordType {
    type Error = RecordError;

    fn try_from(raw: RawRecordType) -> Result<Self, RecordError> {
        let RawRecordType {
            name,
            signature,
            layout,
            match_args,
            annotations,
            doc,
        } = raw;
        let rebuilt = RecordType::build(name, signature)?;
        if rebuilt.layout != layout
            || rebuilt.match_args != match_args
            || rebuilt.annotations != annotations
            || rebuilt.doc != doc
        {
            return Err(RecordError::InconsistentMetadata {
                type_name: rebuilt.name,
            });
        }
        Ok(rebuilt)
    }
}

impl RecordType {
    /// Validate the name and return annotation, then derive every piece of
    /// metadata from the signature.
    fn build(name: String, signature: Signature) -> Result<Self, SpecError> {
        if !is_identifier(&name) {
            return Err(SpecError::InvalidTypeName(name));
        }
        if let Some(annotation) = signature.return_annotation() {
            if annotation != "None" {
                return Err(SpecError::ReturnAnnotation(annotation.to_string()));
            }
        }

        let layout = AttributeLayout::plan(&signature);
        let match_args: Vec<String> = signature
            .params()
            .iter()
            .take_while(|p| p.kind().accepts_positional())
            .map(|p| p.name().to_string())
            .collect();
        let annotations = metadata::export_annotations(&signature);
        let doc = signature.doc().map(str::to_string);

        Ok(Self {
            name,
            signature,
            layout,
            match_args,
            annotations,
            doc,
        })
    }

    /// Synthesize a record type from a validated signature.
    ///
    /// Fails with [`SpecError::InvalidTypeName`] if `name` is not an
    /// identifier, and with [`SpecError::ReturnAnnotation`] if the signature
    /// carries a return annotation other than `None`. No partial type is
    /// ever produced.
    pub fn synthesize(name: impl Into<String>, signature: Signature) -> Result<Arc<Self>, SpecError> {
        let ty = Self::build(name.into(), signature)?;

        debug!(
            type_name = %ty.name,
            attributes = ty.layout.len(),
            "synthesized record type"
        );

        Ok(Arc::new(ty))
    }

    /// Construct an instance, binding arguments exactly as the declared
    /// signature would.
    ///
    /// A failed bind is fatal only to this attempt; the type stays usable.
    pub fn construct(
        self: &Arc<Self>,
        args: Vec<Value>,
        kwargs: Vec<(String, Value)>,
    ) -> Result<Record, RecordError> {
        let values = bind::bind(&self.name, &self.signature, args, kwargs)?;
        Ok(Record::sealed(Arc::clone(self), values.into_boxed_slice()))
    }

    /// Construct an instance from a representation expression.
    ///
    /// The expression must name this type; evaluating a record's `Display`
    /// output here yields an instance equal to the original.
    pub fn reconstruct(self: &Arc<Self>, text: &str) -> Result<Record, RecordError> {
        let call = reader::parse_call(text)?;
        if call.callee != self.name {
            return Err(RecordError::WrongType {
                expected: self.name.clone(),
                found: call.callee,
            });
        }
        self.construct(call.args, call.kwargs)
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaring signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The fixed attribute layout.
    pub fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    /// Names bindable positionally by pattern destructuring: the leading
    /// parameters up to the first collector or keyword-only parameter.
    pub fn match_args(&self) -> &[String] {
        &self.match_args
    }

    /// Exported annotation mapping, in declaration order.
    pub fn annotations(&self) -> &IndexMap<String, String> {
        &self.annotations
    }

    /// The docstring, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}
