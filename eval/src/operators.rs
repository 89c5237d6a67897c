// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_object::{native_bool_to_value, Value, FALSE, TRUE};

/// `!`/`-`: `!` implements truthiness inversion over every
/// value kind; `-` only accepts `Integer`.
pub(crate) fn eval_prefix(operator: &str, right: &Value) -> Value {
    match operator {
        "!" => eval_bang(right),
        "-" => eval_minus(right),
        _ => Value::error(format!("unknown operator: {operator}{}", right.type_tag())),
    }
}

fn eval_bang(right: &Value) -> Value {
    match right {
        Value::Boolean(true) => FALSE,
        Value::Boolean(false) => TRUE,
        Value::Null => TRUE,
        _ => FALSE,
    }
}

fn eval_minus(right: &Value) -> Value {
    match right {
        Value::Integer(value) => Value::Integer(-value),
        other => Value::error(format!("unknown operator: -{}", other.type_tag())),
    }
}

/// Infix dispatch by operand type: integer arithmetic/comparison, string
/// concatenation, then the identity-based `==`/`!=` fallback, then
/// type-mismatch/unknown-operator errors.
pub(crate) fn eval_infix(operator: &str, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => native_bool_to_value(left.identical(right)),
        _ if operator == "!=" => native_bool_to_value(!left.identical(right)),
        _ if left.type_tag() != right.type_tag() => {
            Value::error(format!("type mismatch: {} {operator} {}", left.type_tag(), right.type_tag()))
        }
        _ => Value::error(format!("unknown operator: {} {operator} {}", left.type_tag(), right.type_tag())),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => Value::Integer(left / right),
        "<" => native_bool_to_value(left < right),
        ">" => native_bool_to_value(left > right),
        "==" => native_bool_to_value(left == right),
        "!=" => native_bool_to_value(left != right),
        _ => Value::error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::string(format!("{left}{right}")),
        _ => Value::error(format!("unknown operator: STRING {operator} STRING")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert!(matches!(eval_integer_infix("/", 7, 2), Value::Integer(3)));
        assert!(matches!(eval_integer_infix("/", -7, 2), Value::Integer(-3)));
    }

    #[test]
    fn bang_inverts_truthiness() {
        assert!(matches!(eval_bang(&Value::Null), Value::Boolean(true)));
        assert!(matches!(eval_bang(&Value::Integer(0)), Value::Boolean(false)));
    }

    #[test]
    fn string_only_supports_concatenation() {
        let err = eval_string_infix("-", "Hello", "world");
        match err {
            Value::Error(message) => assert_eq!(&*message, "unknown operator: STRING - STRING"),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
