//! Property-based checks over the value model, built-ins, and lexer.

use proptest::prelude::*;

use gbuild::script::builtins;
use gbuild::script::lexer;
use gbuild::script::Value;

proptest! {
    #[test]
    fn repetition_matches_std_repeat(s in "[a-z]{1,8}", n in 0i64..16) {
        let v = Value::from(s.as_str()).mul(&Value::Int(n)).unwrap();
        prop_assert_eq!(v, Value::Str(s.repeat(n as usize).into_bytes()));
    }

    #[test]
    fn string_equality_is_exact(a in "[ab]{0,4}", b in "[ab]{0,4}") {
        prop_assume!(!a.is_empty() && !b.is_empty());
        let eq = Value::from(a.as_str()).equals(&Value::from(b.as_str())).unwrap();
        prop_assert_eq!(eq, a == b);
    }

    #[test]
    fn cut_zero_zero_is_identity(s in "[ -~]{1,32}") {
        prop_assert_eq!(builtins::cut(s.as_bytes(), 0, 0).unwrap(), s.into_bytes());
    }

    #[test]
    fn cut_result_length_adds_up(s in "[ -~]{1,32}", low in 0i64..8, high in 0i64..8) {
        prop_assume!(low + high < s.len() as i64);
        let out = builtins::cut(s.as_bytes(), low, high).unwrap();
        prop_assert_eq!(out.len() as i64, s.len() as i64 - low - high);
    }

    #[test]
    fn hex_of_matches_format(n in any::<i64>()) {
        prop_assert_eq!(builtins::hex_of(n), format!("{n:X}"));
    }

    #[test]
    fn hash_is_deterministic_and_non_negative(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let a = builtins::rolling_hash(&bytes);
        prop_assert_eq!(a, builtins::rolling_hash(&bytes));
        prop_assert!(a >= 0);
    }

    #[test]
    fn tokenize_never_panics(src in ".{0,64}") {
        let _ = lexer::tokenize(&src);
    }

    #[test]
    fn concat_length_is_sum(a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
        let v = Value::from(a.as_str()).add(&Value::from(b.as_str())).unwrap();
        match v {
            Value::Str(bytes) => prop_assert_eq!(bytes.len(), a.len() + b.len()),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
