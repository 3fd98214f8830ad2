//! Metadata export: annotations and docstring for the synthesized type.

use indexmap::IndexMap;

use sigrec_types::{ParamKind, Signature};

/// Annotation text for the sequence collector: a tuple of the element
/// annotation.
fn var_positional_annotation(annotation: &str) -> String {
    format!("tuple[{}]", annotation)
}

/// Annotation text for the mapping collector.
///
/// `Unpack[X]` unwraps to `X`; anything else becomes a string-keyed
/// mapping annotation.
fn var_keyword_annotation(annotation: &str) -> String {
    match annotation
        .strip_prefix("Unpack[")
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => inner.to_string(),
        None => format!("dict[str, {}]", annotation),
    }
}

/// Build the exported annotation mapping, in declaration order.
///
/// Parameters without annotations are skipped; collector annotations are
/// rewritten to describe the container the attribute actually holds.
/// Annotation values are opaque payloads for downstream tooling; nothing
/// validates them.
pub(crate) fn export_annotations(signature: &Signature) -> IndexMap<String, String> {
    let mut annotations = IndexMap::new();
    for param in signature.params() {
        let Some(text) = param.annotation() else {
            continue;
        };
        let exported = match param.kind() {
            ParamKind::VarPositional => var_positional_annotation(text),
            ParamKind::VarKeyword => var_keyword_annotation(text),
            _ => text.to_string(),
        };
        annotations.insert(param.name().to_string(), exported);
    }
    annotations
}
