use test_case::test_case;
use vesper_values::prelude::*;

mod values {
    use super::*;
    use test_case::test_case;

    #[test_case(Value::Null, false ; "null")]
    #[test_case(Value::from(false), false ; "false value")]
    #[test_case(Value::from(true), true ; "true value")]
    #[test_case(Value::from(0), false ; "zero")]
    #[test_case(Value::from(-0.0), false ; "negative zero")]
    #[test_case(Value::from(f64::NAN), false ; "nan")]
    #[test_case(Value::from(42), true ; "non-zero int")]
    #[test_case(Value::from(""), false ; "empty string")]
    #[test_case(Value::from(" "), true ; "whitespace string")]
    #[test_case(Value::from(Decimal::from(0)), false ; "zero decimal")]
    #[test_case(Value::from(Symbol::new("s")), true ; "symbol")]
    #[test_case(Value::from(List::default()), true ; "empty list")]
    fn truthiness(value: Value, expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn assignment_shares_lists_but_copies_scalars() {
        let original = Value::from(List::from_slice(&[
            Value::from(1),
            Value::from(2),
            Value::from(3),
        ]));
        let reference = original.clone();

        if let Value::List(list) = &reference {
            list.data_mut()[0] = Value::from(99);
        }

        // The mutation through `reference` is visible through `original`
        assert_eq!(original, reference);
        assert!(original.strict_eq(&reference));
        if let Value::List(list) = &original {
            assert_eq!(list.data()[0], Value::from(99));
        }
    }

    #[test]
    fn deep_copies_are_independent() {
        let nested = Value::from(List::from_slice(&[Value::from(2)]));
        let original = Value::from(List::from_slice(&[Value::from(1), nested]));
        let copy = original.deep_copy();

        if let Value::List(list) = &copy {
            if let Value::List(inner) = &list.data()[1] {
                inner.data_mut()[0] = Value::from(99);
            }
        }

        // The copy's nested list has its own allocation
        if let Value::List(list) = &original {
            if let Value::List(inner) = &list.data()[1] {
                assert_eq!(inner.data()[0], Value::from(2));
            }
        }
        assert!(!original.strict_eq(&copy));
        assert_ne!(original, copy);
    }

    #[test]
    fn null_is_the_default() {
        assert!(Value::default().strict_eq(&Value::Null));
        assert_eq!(Value::default().type_as_str(), "Null");
    }

    #[test_case(Value::Null, "Null" ; "null")]
    #[test_case(Value::from(1), "Int" ; "int")]
    #[test_case(Value::from(1.5), "Float" ; "float")]
    #[test_case(Value::from("hi"), "String" ; "string")]
    #[test_case(Value::from(List::default()), "List" ; "list")]
    fn type_names(value: Value, expected: &str) {
        assert_eq!(value.type_as_str(), expected);
    }

    #[test]
    fn display_quotes_strings_inside_containers() {
        let list = Value::from(List::from_slice(&[
            Value::from("a"),
            Value::from(1),
            Value::Null,
        ]));

        assert_eq!(list.to_string(), "['a', 1, null]");
        assert_eq!(Value::from("a").to_string(), "a");
    }

    #[test]
    fn display_survives_self_reference() {
        let list = List::from_slice(&[Value::from(1)]);
        list.data_mut().push(Value::from(list.clone()));

        assert_eq!(Value::from(list).to_string(), "[1, [...]]");
    }

    #[test]
    fn strings_share_data_until_derived() {
        let text = Text::from("immutable");
        let value = Value::from(text.clone());

        if let Value::Str(s) = &value {
            assert!(s.is_same_data(&text));
            let sliced = s.slice(0, Some(2));
            assert!(sliced.is_same_data(&text));
            assert_eq!(sliced, "im");
            assert_eq!(text, "immutable");
        }
    }
}
