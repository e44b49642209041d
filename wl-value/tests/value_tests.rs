use rstest::rstest;
use std::cmp::Ordering;
use wl_value::{Arithmetic, AsText, Compare, Float, HasKind, Int, TextValue, Value, ValueError, ValueKind};

fn render_all(values: &[&dyn AsText]) -> Vec<String> {
    values.iter().map(|value| value.as_text().into_owned()).collect()
}

#[test]
fn capability_is_callable_without_knowing_the_kind() {
    let text = TextValue::new("hi");
    let int: Int = 42;
    let float: Float = 2.5;
    let value = Value::from("handle");

    let values: [&dyn AsText; 4] = [&text, &int, &float, &value];
    assert_eq!(render_all(&values), ["hi", "42", "2.5", "handle"]);
}

#[test]
fn handle_and_kind_render_the_same() {
    let literal = "x";
    assert_eq!(Value::from(literal).as_text(), TextValue::new(literal).as_text());
    assert_eq!(Value::from(literal).to_string(), "x");
}

#[test]
fn size_is_reachable_through_the_handle() {
    let value = Value::new_text("hello");
    let size = value.as_text_value().map(TextValue::size);
    assert_eq!(size, Some(5));
    assert_eq!(Value::new_integer(5).as_text_value().map(TextValue::size), None);
}

#[rstest]
#[case(Value::new_integer(0), "0")]
#[case(Value::new_integer(-17), "-17")]
#[case(Value::new_float(1.0), "1.0")]
#[case(Value::new_float(0.5), "0.5")]
#[case(Value::new_float(-0.0), "-0.0")]
#[case(Value::new_float(Float::INFINITY), "inf")]
#[case(Value::new_float(Float::NAN), "NaN")]
#[case(Value::new_text("7"), "7")]
fn text_forms(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.as_text(), expected);
    assert_eq!(value.as_text(), value.as_text());
}

#[test]
fn float_never_prints_like_an_integer() {
    for n in [-3, 0, 1, 100] {
        let int = Value::new_integer(n).as_text().into_owned();
        let float = Value::new_float(n as Float).as_text().into_owned();
        assert_ne!(int, float);
    }
}

#[rstest]
#[case(Value::new_integer(2), Value::new_integer(3), Value::new_integer(5))]
#[case(Value::new_integer(2), Value::new_float(0.5), Value::new_float(2.5))]
#[case(Value::new_float(0.25), Value::new_float(0.5), Value::new_float(0.75))]
#[case(Value::new_text("ab"), Value::new_text("cd"), Value::new_text("abcd"))]
fn add_values(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
    let sum = a.add(&b).unwrap();
    assert_eq!(sum, expected);
    assert_eq!(sum.kind(), expected.kind());
}

#[test]
fn integer_ops_stay_integers() {
    let a = Value::new_integer(-7);
    let b = Value::new_integer(2);
    assert_eq!(a.sub(&b).unwrap().as_integer(), Some(-9));
    assert_eq!(a.mul(&b).unwrap().as_integer(), Some(-14));
    assert_eq!(a.div(&b).unwrap().as_integer(), Some(-3));
    assert_eq!(a.rem(&b).unwrap().as_integer(), Some(-1));
}

#[test]
fn float_operand_promotes() {
    let result = Value::new_integer(7).div(&Value::new_float(2.0)).unwrap();
    assert_eq!(result.kind(), ValueKind::Float);
    assert_eq!(result.as_float(), Some(3.5));
}

#[test]
fn integer_division_by_zero() {
    let err = Value::new_integer(1).div(&Value::new_integer(0)).unwrap_err();
    assert_eq!(err, ValueError::DivisionByZero { op: "/" });

    let err = Value::new_integer(1).rem(&Value::new_integer(0)).unwrap_err();
    assert_eq!(err, ValueError::DivisionByZero { op: "%" });
}

#[test]
fn float_division_by_zero_follows_ieee() {
    let result = Value::new_float(1.0).div(&Value::new_integer(0)).unwrap();
    assert_eq!(result.as_float(), Some(Float::INFINITY));
}

#[test]
fn integer_overflow() {
    let max = Value::new_integer(Int::MAX);
    assert_eq!(max.add(&Value::new_integer(1)), Err(ValueError::Overflow { op: "+" }));
    assert_eq!(max.mul(&Value::new_integer(2)), Err(ValueError::Overflow { op: "*" }));
    assert_eq!(Value::new_integer(Int::MIN).sub(&Value::new_integer(1)), Err(ValueError::Overflow { op: "-" }));
}

#[rstest]
#[case("-", Value::new_text("a"), Value::new_integer(1))]
#[case("+", Value::new_text("a"), Value::new_integer(1))]
#[case("+", Value::new_float(1.0), Value::new_text("a"))]
#[case("*", Value::new_text("a"), Value::new_text("b"))]
fn type_mismatch(#[case] op: &'static str, #[case] a: Value, #[case] b: Value) {
    let result = match op {
        "+" => a.add(&b),
        "-" => a.sub(&b),
        "*" => a.mul(&b),
        _ => unreachable!(),
    };
    assert_eq!(
        result.unwrap_err(),
        ValueError::TypeMismatch {
            op,
            left: a.kind(),
            right: b.kind()
        }
    );
}

#[test]
fn text_concat_through_the_handle_leaves_operands_alone() {
    let a = Value::new_text("left");
    let b = Value::new_text("right");
    let joined = a.add(&b).unwrap();
    assert_eq!(joined.as_text(), "leftright");
    assert_eq!(a.as_text(), "left");
    assert_eq!(b.as_text(), "right");
}

#[rstest]
#[case(Value::new_integer(1), Value::new_integer(2), Ordering::Less)]
#[case(Value::new_integer(2), Value::new_float(1.5), Ordering::Greater)]
#[case(Value::new_float(3.0), Value::new_integer(3), Ordering::Equal)]
#[case(Value::new_text("apple"), Value::new_text("banana"), Ordering::Less)]
#[case(Value::new_text("b"), Value::new_text("B"), Ordering::Greater)]
fn ordering(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
    assert_eq!(a.compare(&b), Ok(expected));
}

#[test]
fn ordering_helpers() {
    let one = Value::new_integer(1);
    let two = Value::new_float(2.0);
    assert_eq!(one.lt(&two), Ok(true));
    assert_eq!(one.gt(&two), Ok(false));
    assert_eq!(one.lt_or_eq(&one), Ok(true));
    assert_eq!(two.gt_or_eq(&one), Ok(true));
}

#[test]
fn ordering_across_unrelated_kinds_fails() {
    let err = Value::new_text("1").compare(&Value::new_integer(1)).unwrap_err();
    assert_eq!(
        err,
        ValueError::TypeMismatch {
            op: "<=>",
            left: ValueKind::Text,
            right: ValueKind::Integer
        }
    );
}

#[test]
fn nan_has_no_ordering() {
    let nan = Value::new_float(Float::NAN);
    assert_eq!(nan.compare(&Value::new_integer(0)), Err(ValueError::Unordered));
    assert_ne!(nan, nan.clone());
}

#[test]
fn equality() {
    assert_eq!(Value::new_integer(3), Value::new_float(3.0));
    assert_eq!(Value::new_float(3.0), Value::new_integer(3));
    assert_ne!(Value::new_integer(3), Value::new_float(3.5));
    assert_eq!(Value::new_text("abc"), Value::from(String::from("abc")));
    assert_ne!(Value::new_text("abc"), Value::new_text("abd"));
}

#[test]
fn conversions() {
    assert_eq!(Value::new_integer(3).to_float(), Ok(3.0));
    assert_eq!(Value::new_float(-3.99).to_integer(), Ok(-3));
    assert_eq!(
        Value::new_float(Float::NAN).to_integer(),
        Err(ValueError::Conversion {
            from: ValueKind::Float,
            to: ValueKind::Integer
        })
    );
    assert_eq!(
        Value::new_text("3").to_float(),
        Err(ValueError::Conversion {
            from: ValueKind::Text,
            to: ValueKind::Float
        })
    );
}

#[test]
fn typed_extraction() {
    let value = Value::from(12 as Int);
    assert_eq!(Int::try_from(&value).unwrap(), 12);
    assert!(Float::try_from(&value).is_err());

    let value = Value::from(0.5 as Float);
    assert_eq!(Float::try_from(&value).unwrap(), 0.5);
    assert!(<&TextValue>::try_from(&value).is_err());
}

#[test]
fn value_errors_flow_into_anyhow() {
    fn divide(a: &Value, b: &Value) -> anyhow::Result<Value> {
        Ok(a.div(b)?)
    }
    let err = divide(&Value::new_integer(1), &Value::new_integer(0)).unwrap_err();
    assert_eq!(err.to_string(), "'/': division by zero");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn mixed_equality_and_ordering_are_exact_beyond_float_precision() {
    let above = Value::new_integer((1 << 53) + 1);
    let float = Value::new_float((1i64 << 53) as Float);
    let exact = Value::new_integer(1 << 53);

    assert_eq!(float, exact);
    assert_ne!(above, float);
    assert_ne!(float, above);
    assert_ne!(above, exact);

    assert_eq!(above.compare(&float), Ok(Ordering::Greater));
    assert_eq!(float.compare(&above), Ok(Ordering::Less));
    assert_eq!(exact.compare(&float), Ok(Ordering::Equal));
    assert_eq!(Value::new_integer(Int::MAX).compare(&Value::new_float(Int::MAX as Float)), Ok(Ordering::Less));
}
