//! Argument binding: the synthesized constructor's calling convention.

use std::collections::VecDeque;

use indexmap::IndexMap;

use sigrec_types::{is_identifier, is_reserved_word, ParamKind, Signature, Value};

use crate::error::RecordError;

/// Bind `args`/`kwargs` against `signature`, returning one value per
/// parameter in declaration order.
///
/// The whole vector materializes before the caller sees any of it, so a
/// failed bind leaves nothing partially constructed.
pub(crate) fn bind(
    type_name: &str,
    signature: &Signature,
    args: Vec<Value>,
    kwargs: Vec<(String, Value)>,
) -> Result<Vec<Value>, RecordError> {
    let params = signature.params();
    let given = args.len();
    let mut slots: Vec<Option<Value>> = params.iter().map(|_| None).collect();

    // Positional phase: fill positional-capable parameters in order, then
    // sweep the excess into the sequence collector if one is declared.
    let mut rest: VecDeque<Value> = args.into();
    for (i, param) in params.iter().enumerate() {
        match param.kind() {
            kind if kind.accepts_positional() => {
                if let Some(value) = rest.pop_front() {
                    slots[i] = Some(value);
                }
            }
            ParamKind::VarPositional => {
                slots[i] = Some(Value::Tuple(rest.drain(..).collect()));
            }
            _ => {}
        }
    }
    if !rest.is_empty() {
        let expected = params
            .iter()
            .filter(|p| p.kind().accepts_positional())
            .count();
        return Err(RecordError::TooManyArguments {
            type_name: type_name.to_string(),
            expected,
            given,
        });
    }

    // Keyword phase: match by name; unknown names (including positional-only
    // parameter names) fall through to the mapping collector.
    let has_var_keyword = signature.var_keyword().is_some();
    let mut extra: IndexMap<String, Value> = IndexMap::new();
    for (name, value) in kwargs {
        // Reserved literal words are rejected here too; a record holding one
        // as a keyword name would render a representation that no longer
        // parses.
        if !is_identifier(&name) || is_reserved_word(&name) {
            return Err(RecordError::InvalidArgumentName {
                type_name: type_name.to_string(),
                name,
            });
        }
        match params
            .iter()
            .position(|p| p.name() == name && p.kind().accepts_keyword())
        {
            Some(i) => {
                if slots[i].is_some() {
                    return Err(RecordError::DuplicateArgument {
                        type_name: type_name.to_string(),
                        name,
                    });
                }
                slots[i] = Some(value);
            }
            None if has_var_keyword => {
                if extra.insert(name.clone(), value).is_some() {
                    return Err(RecordError::DuplicateArgument {
                        type_name: type_name.to_string(),
                        name,
                    });
                }
            }
            None => {
                return Err(RecordError::UnexpectedArgument {
                    type_name: type_name.to_string(),
                    name,
                });
            }
        }
    }

    // Defaults phase: the full value vector materializes or the bind fails.
    let mut values = Vec::with_capacity(params.len());
    for (param, slot) in params.iter().zip(slots) {
        let value = match slot {
            Some(v) => v,
            None => match param.kind() {
                ParamKind::VarKeyword => Value::Map(std::mem::take(&mut extra)),
                _ => match param.default() {
                    Some(default) => default.clone(),
                    None => {
                        return Err(RecordError::MissingArgument {
                            type_name: type_name.to_string(),
                            name: param.name().to_string(),
                        });
                    }
                },
            },
        };
        values.push(value);
    }
    Ok(values)
}
