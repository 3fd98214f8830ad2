//! The constructor accepts exactly the call shapes the signature declares
//! and rejects every other shape with the documented error kind.

use std::sync::Arc;

use sigrec_synth::{ParamKind, Parameter, RecordError, RecordType, Signature, Value};

fn kw(name: &str, value: Value) -> (String, Value) {
    (name.to_string(), value)
}

fn synthesize(name: &str, params: Vec<Parameter>) -> Arc<RecordType> {
    RecordType::synthesize(name, Signature::new(params).unwrap()).unwrap()
}

#[test]
fn positional_only_accepts_position_rejects_name() {
    let ty = synthesize("Example", vec![Parameter::new("pos", ParamKind::PositionalOnly)]);

    assert!(ty.construct(vec![Value::Int(1)], vec![]).is_ok());

    let err = ty
        .construct(vec![], vec![kw("pos", Value::Int(1))])
        .unwrap_err();
    // Without a mapping collector the name matches nothing.
    assert!(matches!(err, RecordError::UnexpectedArgument { ref name, .. } if name == "pos"));
}

#[test]
fn positional_or_keyword_accepts_both() {
    let ty = synthesize(
        "Example",
        vec![Parameter::new("x", ParamKind::PositionalOrKeyword)],
    );
    let by_position = ty.construct(vec![Value::Int(1)], vec![]).unwrap();
    let by_name = ty.construct(vec![], vec![kw("x", Value::Int(1))]).unwrap();
    assert_eq!(by_position, by_name);
}

#[test]
fn keyword_only_rejects_position() {
    let ty = synthesize(
        "Example",
        vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("kw", ParamKind::KeywordOnly),
        ],
    );

    assert!(ty
        .construct(vec![Value::Int(1)], vec![kw("kw", Value::Int(2))])
        .is_ok());

    let err = ty
        .construct(vec![Value::Int(1), Value::Int(2)], vec![])
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::TooManyArguments {
            type_name: "Example".into(),
            expected: 1,
            given: 2,
        }
    );
}

#[test]
fn var_positional_absorbs_excess() {
    let ty = synthesize(
        "Example",
        vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("args", ParamKind::VarPositional),
        ],
    );
    let ins = ty
        .construct(vec![Value::Int(1), Value::Int(2), Value::Int(3)], vec![])
        .unwrap();
    assert_eq!(
        ins.get("args"),
        Some(&Value::Tuple(vec![Value::Int(2), Value::Int(3)]))
    );
}

#[test]
fn var_keyword_absorbs_unknown_names() {
    let ty = synthesize(
        "Example",
        vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("kwargs", ParamKind::VarKeyword),
        ],
    );
    let ins = ty
        .construct(vec![Value::Int(1)], vec![kw("other", Value::Int(2))])
        .unwrap();
    let Some(Value::Map(extra)) = ins.get("kwargs") else {
        panic!("kwargs slot must hold a map");
    };
    assert_eq!(extra.get("other"), Some(&Value::Int(2)));
}

#[test]
fn missing_required_argument_names_the_parameter() {
    let ty = synthesize(
        "Example",
        vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("kw", ParamKind::KeywordOnly),
        ],
    );
    let err = ty.construct(vec![Value::Int(1)], vec![]).unwrap_err();
    assert_eq!(
        err,
        RecordError::MissingArgument {
            type_name: "Example".into(),
            name: "kw".into(),
        }
    );
}

#[test]
fn unexpected_keyword_without_collector() {
    let ty = synthesize(
        "Example",
        vec![Parameter::new("x", ParamKind::PositionalOrKeyword)],
    );
    let err = ty
        .construct(vec![Value::Int(1)], vec![kw("z", Value::Int(2))])
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::UnexpectedArgument {
            type_name: "Example".into(),
            name: "z".into(),
        }
    );
}

#[test]
fn double_supply_is_rejected() {
    let ty = synthesize(
        "Example",
        vec![Parameter::new("x", ParamKind::PositionalOrKeyword)],
    );
    let err = ty
        .construct(vec![Value::Int(1)], vec![kw("x", Value::Int(2))])
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::DuplicateArgument {
            type_name: "Example".into(),
            name: "x".into(),
        }
    );
}

#[test]
fn failed_attempts_leave_the_type_usable() {
    let ty = synthesize(
        "Example",
        vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("y", ParamKind::PositionalOrKeyword),
        ],
    );
    assert!(ty.construct(vec![], vec![]).is_err());
    assert!(ty
        .construct(vec![Value::Int(1), Value::Int(2), Value::Int(3)], vec![])
        .is_err());
    let ins = ty
        .construct(vec![Value::Int(1), Value::Int(2)], vec![])
        .unwrap();
    assert_eq!(ins.get("y"), Some(&Value::Int(2)));
}
