//! Integration tests for checked callables.
//!
//! These tests wrap ordinary closures with signatures and declarations and
//! verify argument checks, result checks, conditions, collections, lazily
//! produced results and the disabled mode end to end.

use runtime_contracts::{
    args,
    values::types::{BYTES, FLOAT, INT, SET, STR},
    Arguments, Callable, Checked, Declaration, Function, Mode, Returned, Scope, Sequence, Signature,
    Value, Violation, ViolationKind,
};

fn checked<B>(name: &str, signature: Signature, body: B) -> Checked<Function>
where
    B: Fn(Arguments) -> Result<Returned<Violation>, Violation> + 'static,
{
    runtime_contracts::checked_with(Mode::Enabled, Function::new(name, signature, body))
}

fn value_of(function: &Checked<Function>, arguments: Arguments) -> Result<Value, Violation> {
    Ok(function.call(arguments)?.into_value().unwrap_or(Value::None))
}

fn message_of(function: &Checked<Function>, arguments: Arguments) -> String {
    value_of(function, arguments).unwrap_err().get_message().to_string()
}

fn int_to_int() -> Checked<Function> {
    let signature = Signature::new().positional("x").annotate("x", &*INT).returns(&*INT);
    checked(
        "int_to_int",
        signature,
        |arguments| {
            let x = arguments.lookup(0, "x").and_then(Value::as_int).unwrap_or(0);
            Ok(Value::Int(x * x).into())
        },
    )
}

fn unchecked_to_int() -> Checked<Function> {
    let signature = Signature::new().positional("y").returns(&*INT);
    checked(
        "unchecked_to_int",
        signature,
        |arguments| {
            let doubled = match arguments.lookup(0, "y") {
                Some(Value::Int(y)) => Value::Int(y * 2),
                Some(Value::Str(y)) => Value::Str(y.repeat(2)),
                _ => Value::None,
            };
            Ok(doubled.into())
        },
    )
}

fn default_values() -> Checked<Function> {
    let signature = Signature::new()
        .positional("x")
        .defaulted("y", Value::None)
        .annotate("x", &*INT)
        .annotate("y", &*INT)
        .returns(&*INT);
    checked(
        "default_values",
        signature,
        |arguments| {
            let x = arguments.lookup(0, "x").and_then(Value::as_int).unwrap_or(0);
            let y = arguments.lookup(1, "y").and_then(Value::as_int).unwrap_or(3);
            Ok(Value::Int(x * y).into())
        },
    )
}

fn every_type_of_param() -> Checked<Function> {
    let signature = Signature::new()
        .positional("required")
        .defaulted("defaulted", 4.5)
        .extra_positional("pos")
        .extra_keyword("named")
        .annotate("required", &*INT)
        .annotate("defaulted", &*FLOAT)
        .annotate("pos", &*STR)
        .annotate("named", &*STR);
    checked("every_type_of_param", signature, |_| Ok(Value::None.into()))
}

#[test]
fn test_name_and_doc_preserved() {
    let function = runtime_contracts::checked_with(
        Mode::Enabled,
        Function::<Violation>::new("int_to_int", Signature::new(), |_| Ok(Value::None.into())).with_doc("Docstring"),
    );

    assert_eq!(function.name(), "int_to_int");
    assert_eq!(function.doc(), Some("Docstring"));
    assert_eq!(unchecked_to_int().name(), "unchecked_to_int");
}

#[test]
fn test_valid_results() {
    assert_eq!(value_of(&int_to_int(), args![3]).unwrap(), Value::Int(9));
    assert_eq!(value_of(&unchecked_to_int(), args![2]).unwrap(), Value::Int(4));
}

#[test]
fn test_parameter_type_invalid() {
    assert_eq!(
        message_of(&int_to_int(), args![1.1]),
        "int_to_int(): Parameter number 1, x=1.1: Declared type=<int>, actual type=<float>."
    );
}

#[test]
fn test_return_type_cannot_be_cast() {
    assert_eq!(
        message_of(&unchecked_to_int(), args!["foo"]),
        "unchecked_to_int() -> <int>: Actual type of return value, <foofoo>, is <str>"
    );
}

#[test]
fn test_return_none_declared() {
    let signature = Signature::new().positional("x").annotate("x", &*INT).returns(Declaration::none());
    let good = checked("int_to_none", signature.clone(), |_| Ok(Value::None.into()));
    let bad = checked(
        "int_to_none_bad",
        signature,
        |arguments| Ok(arguments.positional(0).cloned().unwrap_or(Value::None).into()),
    );

    assert_eq!(value_of(&good, args![8]).unwrap(), Value::None);
    assert_eq!(
        message_of(&bad, args![6]),
        "int_to_none_bad(): return value=6: Declared type=<None>, actual type=<int>."
    );
}

#[test]
fn test_accidentally_returning_none() {
    let signature = Signature::new().positional("x").returns(&*INT);
    let function = checked("accidently_returning_none", signature, |_| Ok(Value::None.into()));

    let violation = value_of(&function, args![1]).unwrap_err();
    assert_eq!(violation.get_kind(), &ViolationKind::AbsenceMismatch);
    assert_eq!(
        violation.get_message(),
        "accidently_returning_none(): return value=None: Declared type=<int>, actual type=<NoneType>."
    );
}

#[test]
fn test_default_values() {
    let function = default_values();

    assert_eq!(
        message_of(&function, args![4, 6.0]),
        "default_values(): Parameter number 2, y=6.0: Declared type=<int>, actual type=<float>."
    );
    assert_eq!(
        message_of(&function, args![4; y = 6.0]),
        "default_values(): y=6.0: Declared type=<int>, actual type=<float>."
    );
    assert!(value_of(&function, args![4.0, 6]).is_err());
    assert!(value_of(&function, args![; x = 4.0]).is_err());
    assert!(value_of(&function, args![; x = 4.0, y = 6]).is_err());
    assert!(value_of(&function, args![2.3, 4.1]).is_err());

    assert_eq!(value_of(&function, args![5]).unwrap(), Value::Int(15));
    assert_eq!(value_of(&function, args![4, 3]).unwrap(), Value::Int(12));
}

#[test]
fn test_extra_positional_collector() {
    let signature = Signature::new().extra_positional("params").annotate("params", &*INT).returns(&*INT);
    let function = checked(
        "checked_arg",
        signature,
        |arguments| Ok(Value::Int(arguments.positional.len() as i64).into()),
    );

    assert_eq!(value_of(&function, args![1, 3, 4, 4]).unwrap(), Value::Int(4));
    assert_eq!(
        message_of(&function, args![1, 2, 3, 4.0]),
        "checked_arg(): Parameter number 4, params=4.0: Declared type=<int>, actual type=<float>."
    );
}

#[test]
fn test_extra_keyword_collector() {
    let signature = Signature::new().extra_keyword("kwds").annotate("kwds", &*INT).returns(&*INT);
    let function = checked(
        "checked_kwd",
        signature,
        |arguments| Ok(Value::Int(arguments.keyword.len() as i64).into()),
    );

    assert_eq!(value_of(&function, args![; a = 1, b = 2]).unwrap(), Value::Int(2));
    assert_eq!(
        message_of(&function, args![; a = 1, b = "two"]),
        "checked_kwd(): b=two: Declared type=<int>, actual type=<str>."
    );
}

#[test]
fn test_every_type_of_param_passes() {
    let function = every_type_of_param();

    for arguments in [
        args![1],
        args![; required = 1],
        args![1, 2.0],
        args![1; defaulted = 2.0],
        args![; required = 1, defaulted = 2.0],
        args![1, 2.0, "a", "b", "c"],
        args![1; x = "foo"],
        args![; required = 1, defaulted = 2.0, x = "foo"],
        args![1, 2.0, "a", "b", "c"; x = "boo", y = "bar"],
    ] {
        assert!(value_of(&function, arguments).is_ok());
    }
}

#[test]
fn test_every_type_of_param_fails() {
    let function = every_type_of_param();

    for arguments in [
        args![1.0],
        args![; required = 1.0],
        args![1, 2],
        args![1; defaulted = 2],
        args![1.0, 2.0, "a"],
        args![1, 2.0, 3; x = "4"],
        args![1, 2.0, 3.0],
        args![; required = 1, defaulted = 2, x = "3"],
        args![1, 2.0, "3"; x = 4],
        args![1; x = 2],
    ] {
        assert!(value_of(&function, arguments).is_err());
    }
}

#[test]
fn test_collections() {
    let signature = Signature::new()
        .positional("required")
        .defaulted("defaulted", Value::set([Value::Float(1.0)]))
        .extra_positional("positional")
        .extra_keyword("named")
        .annotate("required", Declaration::collection_of(&SET, &*INT))
        .annotate("defaulted", Declaration::collection_of(&SET, &*FLOAT))
        .annotate("positional", Declaration::collection_of(&SET, &*STR))
        .annotate("named", Declaration::collection_of(&SET, &*BYTES))
        .returns(Declaration::none());
    let function = checked("collection_fcn", signature, |_| Ok(Value::None.into()));

    let ints = Value::set([Value::Int(1)]);
    let floats = Value::set([Value::Float(2.0)]);
    let strs = Value::set([Value::from("3.0")]);
    let bytes = Value::set([Value::Bytes(b"4.0".to_vec())]);

    assert!(value_of(&function, args![ints.clone()]).is_ok());
    assert!(value_of(&function, args![; defaulted = floats.clone(), required = ints.clone()]).is_ok());
    assert!(value_of(&function, args![ints.clone(), floats.clone(), strs.clone(); x = bytes]).is_ok());

    let element = value_of(&function, args![Value::set([Value::Float(1.0)])]).unwrap_err();
    assert_eq!(element.get_kind(), &ViolationKind::CollectionElementMismatch);
    assert_eq!(
        element.get_message(),
        "collection_fcn(): Parameter number 1, required={1.0}: Declared type=<set[int]>, actual type=<float>."
    );

    assert!(value_of(&function, args![ints.clone(), Value::set([Value::Int(2)])]).is_err());
    assert!(value_of(&function, args![ints.clone(), floats.clone(), Value::set([Value::Float(3.0)])]).is_err());
    assert!(value_of(&function, args![ints, floats, strs; x = Value::set([Value::Float(4.0)])]).is_err());

    let container = value_of(&function, args![Value::List(vec![Value::Int(1), Value::Int(2)])]).unwrap_err();
    assert_eq!(container.get_kind(), &ViolationKind::CollectionContainerMismatch);
}

#[test]
fn test_returned_collection() {
    let declaration = Declaration::parse("{set: int}", &Scope::new("test")).unwrap();
    let good = checked(
        "returns_good_set",
        Signature::new().returns(declaration.clone()),
        |_| Ok(Value::set((1..=5i64).map(Value::Int)).into()),
    );
    let bad = checked(
        "returns_bad_set",
        Signature::new().returns(declaration),
        |_| Ok(Value::set([Value::Int(1), Value::Int(2), Value::Float(5.0)]).into()),
    );

    assert!(value_of(&good, args![]).is_ok());
    assert_eq!(
        message_of(&bad, args![]),
        "returns_bad_set(): return value={5.0}: Declared type=<set[int]>, actual type=<float>."
    );
}

#[test]
fn test_conditions() {
    let non_negative = Declaration::predicate(|x| x.as_number().is_some_and(|x| x >= 0.0));
    let positive = Declaration::predicate(|y| y.as_number().is_some_and(|y| y > 0.0));
    let signature = Signature::new().positional("x").annotate("x", non_negative).returns(positive);

    let f = checked(
        "f",
        signature.clone(),
        |arguments| Ok(Value::Int(arguments.positional[0].as_int().unwrap_or(0) + 1).into()),
    );
    let g = checked(
        "g",
        signature,
        |arguments| Ok(Value::Int(arguments.positional[0].as_int().unwrap_or(0) - 1).into()),
    );

    assert_eq!(value_of(&f, args![0]).unwrap(), Value::Int(1));
    assert_eq!(message_of(&f, args![-1]), "f(): Parameter number 1, x=-1:  Fails condition check.");
    assert_eq!(message_of(&g, args![0]), "g(): return value=-1:  Fails condition check.");
}

#[test]
fn test_multiple_types() {
    let scope = Scope::new("test");
    let signature = Signature::new()
        .positional("x")
        .annotate("x", Declaration::parse("(int, str)", &scope).unwrap())
        .returns(Declaration::parse("(float, bytes)", &scope).unwrap());

    let good = checked(
        "good",
        signature.clone(),
        |arguments| {
            Ok(match &arguments.positional[0] {
                Value::Str(x) => Value::Bytes(x.clone().into_bytes()),
                other => Value::Float(other.as_number().unwrap_or(0.0)),
            }
            .into())
        },
    );
    let bad = checked("bad", signature, |arguments| Ok(arguments.positional[0].clone().into()));

    assert_eq!(value_of(&good, args![1]).unwrap(), Value::Float(1.0));
    assert_eq!(value_of(&good, args!["x"]).unwrap(), Value::Bytes(b"x".to_vec()));
    assert!(value_of(&good, args![1.0]).is_err());
    assert!(value_of(&good, args![Value::Bytes(b"foo".to_vec())]).is_err());
    assert!(value_of(&bad, args!["x"]).is_err());
    assert!(value_of(&bad, args![1]).is_err());
}

#[test]
fn test_type_or_none() {
    let scope = Scope::new("test");
    let signature = Signature::new()
        .positional("x")
        .annotate("x", Declaration::parse("(str, None)", &scope).unwrap())
        .returns(Declaration::parse("(int, None)", &scope).unwrap());
    let function = checked(
        "f",
        signature,
        |arguments| {
            Ok(match arguments.positional[0].as_str() {
                Some(x) if !x.is_empty() => Value::Int(x.len() as i64),
                _ => Value::None,
            }
            .into())
        },
    );

    assert_eq!(value_of(&function, args!["foo"]).unwrap(), Value::Int(3));
    assert_eq!(value_of(&function, args![Value::None]).unwrap(), Value::None);
}

#[test]
fn test_generators() {
    let signature = Signature::new().positional("x").annotate("x", &*INT).returns(&*FLOAT);
    let good_gen = checked(
        "good_gen",
        signature.clone(),
        |arguments| {
            let count = arguments.positional[0].as_int().unwrap_or(0);
            Ok(Returned::Lazy(Sequence::from_values((0..count).map(|i| Value::Float(i as f64)))))
        },
    );
    let bad_gen = checked(
        "bad_gen",
        signature,
        |arguments| {
            let count = arguments.positional[0].as_int().unwrap_or(0);
            Ok(Returned::Lazy(Sequence::from_values((0..count).map(|i| Value::Str(i.to_string())))))
        },
    );

    let produced = good_gen.call(args![10]).unwrap().into_sequence().unwrap();
    assert_eq!(produced.collect::<Result<Vec<Value>, Violation>>().unwrap().len(), 10);

    let mut produced = bad_gen.call(args![10]).unwrap().into_sequence().unwrap();
    let violation = produced.next().unwrap().unwrap_err();
    assert_eq!(
        violation.get_message(),
        "bad_gen() -> <float>: Actual type of return value, <0>, is <str>"
    );
    assert!(produced.next().is_none());

    assert!(good_gen.call(args![1.5]).is_err());
}

#[test]
fn test_disabled_mode_calls_straight_through() {
    let signature = Signature::new().positional("x").annotate("x", &*INT).returns(&*INT);
    let function = runtime_contracts::checked_with(
        Mode::Disabled,
        Function::<Violation>::new("int_to_int", signature, |_| Ok(Value::from("unchecked").into())),
    );

    assert!(!function.is_enabled());
    assert_eq!(value_of(&function, args![1.1]).unwrap(), Value::from("unchecked"));
}

#[test]
fn test_long_values_are_truncated() {
    let function = int_to_int();
    let long = "x".repeat(100);

    assert_eq!(
        message_of(&function, args![long]),
        format!(
            "int_to_int(): Parameter number 1, x={}...: Declared type=<int>, actual type=<str>.",
            "x".repeat(32)
        )
    );
}
