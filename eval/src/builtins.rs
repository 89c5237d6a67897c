// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::rc::Rc;

use lumen_object::{BuiltinFn, BuiltinObject, Value, NULL};

/// The fixed built-in table: consulted when identifier lookup misses the
/// environment chain. Returns `None` for anything not in the table, which
/// the caller turns into `"identifier not found: ..."`.
pub fn lookup_builtin(name: &str) -> Option<Value> {
    let func: BuiltinFn = match name {
        "len" => len,
        "first" => first,
        "last" => last,
        "rest" => rest,
        "push" => push,
        _ => return None,
    };
    Some(Value::Builtin(Rc::new(BuiltinObject { name: static_name(name), func })))
}

fn static_name(name: &str) -> &'static str {
    match name {
        "len" => "len",
        "first" => "first",
        "last" => "last",
        "rest" => "rest",
        "push" => "push",
        _ => "builtin",
    }
}

fn arity_error(expected: usize, got: usize) -> Value {
    Value::error(format!("Invalid amount of arguments. Expected={expected}, got={got}"))
}

fn invalid_argument(name: &str, got: &Value) -> Value {
    Value::error(format!("Invalid argument passed to `{name}()`. Got={}", got.type_tag()))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return arity_error(1, args.len());
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => invalid_argument("len", other),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return arity_error(1, args.len());
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => invalid_argument("first", other),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return arity_error(1, args.len());
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => invalid_argument("last", other),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return arity_error(1, args.len());
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => invalid_argument("rest", other),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return arity_error(2, args.len());
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut grown = (**elements).clone();
            grown.push(args[1].clone());
            Value::Array(Rc::new(grown))
        }
        other => invalid_argument("push", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_reports_byte_length_and_element_count() {
        assert!(matches!(len(&[Value::string("four")]), Value::Integer(4)));
        let array = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
        assert!(matches!(len(&[array]), Value::Integer(2)));
    }

    #[test]
    fn len_rejects_non_string_non_array() {
        match len(&[Value::Integer(1)]) {
            Value::Error(message) => assert_eq!(&*message, "Invalid argument passed to `len()`. Got=INTEGER"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn push_does_not_mutate_the_original_array() {
        let original = Rc::new(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        let result = push(&[Value::Array(original.clone()), Value::Integer(4)]);
        assert_eq!(original.len(), 3);
        match result {
            Value::Array(grown) => assert_eq!(grown.len(), 4),
            other => panic!("expected Array, got {other:?}"),
        }
    }

    #[test]
    fn rest_and_first_on_empty_array_yield_null() {
        let empty = Value::Array(Rc::new(Vec::new()));
        assert!(matches!(first(&[empty.clone()]), Value::Null));
        assert!(matches!(rest(&[empty]), Value::Null));
    }

    #[test]
    fn arity_mismatch_reports_expected_and_got() {
        match len(&[]) {
            Value::Error(message) => assert_eq!(&*message, "Invalid amount of arguments. Expected=1, got=0"),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
