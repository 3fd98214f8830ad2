//! Parameter descriptors and validated call signatures.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::value::Value;

/// Whether `s` is a valid identifier: a letter or underscore followed by
/// letters, digits, or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Words the representation grammar reads as value literals.
///
/// They cannot name parameters or keyword arguments; a record carrying one
/// as a keyword name would render a representation that no longer parses.
const RESERVED_WORDS: [&str; 5] = ["None", "True", "False", "inf", "NaN"];

/// Whether `s` is a reserved literal word.
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// The calling convention of one declared parameter.
///
/// Variants are listed in the order they may appear in a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Must be supplied positionally.
    PositionalOnly,
    /// May be supplied positionally or by name.
    PositionalOrKeyword,
    /// Collects excess positional values into a tuple.
    VarPositional,
    /// Must be supplied by name.
    KeywordOnly,
    /// Collects excess keyword values into a mapping.
    VarKeyword,
}

impl ParamKind {
    /// Whether a value for this parameter may be supplied positionally.
    pub fn accepts_positional(self) -> bool {
        matches!(
            self,
            ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword
        )
    }

    /// Whether a value for this parameter may be supplied by name.
    pub fn accepts_keyword(self) -> bool {
        matches!(
            self,
            ParamKind::PositionalOrKeyword | ParamKind::KeywordOnly
        )
    }

    /// Whether this parameter collects excess arguments.
    pub fn is_variadic(self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }

    /// Position of this kind in the declaration order.
    fn rank(self) -> u8 {
        match self {
            ParamKind::PositionalOnly => 0,
            ParamKind::PositionalOrKeyword => 1,
            ParamKind::VarPositional => 2,
            ParamKind::KeywordOnly => 3,
            ParamKind::VarKeyword => 4,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParamKind::PositionalOnly => "positional-only",
            ParamKind::PositionalOrKeyword => "positional-or-keyword",
            ParamKind::VarPositional => "var-positional",
            ParamKind::KeywordOnly => "keyword-only",
            ParamKind::VarKeyword => "var-keyword",
        };
        write!(f, "{}", text)
    }
}

/// Descriptor for one declared parameter.
///
/// Immutable once extraction has produced it. The annotation is advisory
/// text for tooling; nothing validates argument values against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    kind: ParamKind,
    default: Option<Value>,
    annotation: Option<String>,
}

impl Parameter {
    /// Create a parameter descriptor with no default and no annotation.
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            annotation: None,
        }
    }

    /// Attach a default value (builder pattern).
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Attach advisory type metadata (builder pattern).
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calling convention.
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Default value, if declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Advisory type metadata, if declared.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Whether construction must supply a value for this parameter.
    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.kind.is_variadic()
    }
}

/// An ordered, validated parameter specification.
///
/// Validation runs in [`Signature::new`], before any record type is built:
/// names must be unique identifiers, kinds must appear in declaration
/// order, at most one collector of each variadic kind may exist, and a
/// required positional parameter may not follow an optional one
/// (keyword-only parameters are exempt from the default-order rule).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignature")]
pub struct Signature {
    params: Vec<Parameter>,
    doc: Option<String>,
    return_annotation: Option<String>,
}

/// Unvalidated wire form of [`Signature`]; deserialization funnels through
/// [`Signature::new`] so serialized input cannot carry an invalid
/// parameter list.
#[derive(Deserialize)]
struct RawSignature {
    params: Vec<Parameter>,
    doc: Option<String>,
    return_annotation: Option<String>,
}

impl TryFrom<RawSignature> for Signature {
    type Error = SpecError;

    fn try_from(raw: RawSignature) -> Result<Self, SpecError> {
        let mut signature = Signature::new(raw.params)?;
        signature.doc = raw.doc;
        signature.return_annotation = raw.return_annotation;
        Ok(signature)
    }
}

impl Signature {
    /// Validate `params` and build a signature.
    pub fn new(params: Vec<Parameter>) -> Result<Self, SpecError> {
        validate(&params)?;
        Ok(Self {
            params,
            doc: None,
            return_annotation: None,
        })
    }

    /// A signature with no parameters.
    pub fn empty() -> Self {
        Self {
            params: Vec::new(),
            doc: None,
            return_annotation: None,
        }
    }

    /// Attach a docstring (builder pattern).
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach a return annotation (builder pattern).
    ///
    /// Synthesis rejects any return annotation other than `None`.
    pub fn with_return_annotation(mut self, text: impl Into<String>) -> Self {
        self.return_annotation = Some(text.into());
        self
    }

    /// The parameters, in declaration order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// The docstring, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// The return annotation, if any.
    pub fn return_annotation(&self) -> Option<&str> {
        self.return_annotation.as_deref()
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are declared.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// The var-positional collector, if declared.
    pub fn var_positional(&self) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.kind == ParamKind::VarPositional)
    }

    /// The var-keyword collector, if declared.
    pub fn var_keyword(&self) -> Option<&Parameter> {
        self.params.iter().find(|p| p.kind == ParamKind::VarKeyword)
    }
}

fn validate(params: &[Parameter]) -> Result<(), SpecError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut prev: Option<&Parameter> = None;
    let mut saw_var_positional = false;
    let mut saw_var_keyword = false;
    let mut saw_default = false;

    for param in params {
        if !is_identifier(&param.name) {
            return Err(SpecError::InvalidName(param.name.clone()));
        }
        if is_reserved_word(&param.name) {
            return Err(SpecError::ReservedName(param.name.clone()));
        }
        if !seen.insert(&param.name) {
            return Err(SpecError::DuplicateParameter(param.name.clone()));
        }
        if let Some(p) = prev {
            if param.kind.rank() < p.kind.rank() {
                return Err(SpecError::KindOrder {
                    name: param.name.clone(),
                    kind: param.kind,
                    prev: p.kind,
                });
            }
        }
        match param.kind {
            ParamKind::VarPositional => {
                if saw_var_positional {
                    return Err(SpecError::DuplicateCollector(ParamKind::VarPositional));
                }
                saw_var_positional = true;
                if param.default.is_some() {
                    return Err(SpecError::CollectorDefault(param.name.clone()));
                }
            }
            ParamKind::VarKeyword => {
                if saw_var_keyword {
                    return Err(SpecError::DuplicateCollector(ParamKind::VarKeyword));
                }
                saw_var_keyword = true;
                if param.default.is_some() {
                    return Err(SpecError::CollectorDefault(param.name.clone()));
                }
            }
            ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword => {
                if param.default.is_some() {
                    saw_default = true;
                } else if saw_default {
                    return Err(SpecError::DefaultOrder(param.name.clone()));
                }
            }
            ParamKind::KeywordOnly => {}
        }
        prev = Some(param);
    }

    Ok(())
}
