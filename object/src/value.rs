// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use indexmap::IndexMap;
use itertools::Itertools as _;
use lumen_ast::{BlockStatement, Identifier};

use crate::Environment;

/// The type tag every [`Value`] exposes, e.g. for `Error("unknown operator:
/// INTEGER + STRING")` messages. Kept as `&'static str` rather than an enum
/// because every call site wants the printed constant, not a type to match
/// on — matching is done on `Value` itself.
pub type ValueKind = &'static str;

pub const INTEGER_OBJ: ValueKind = "INTEGER";
pub const BOOLEAN_OBJ: ValueKind = "BOOLEAN";
pub const NULL_OBJ: ValueKind = "NULL";
pub const STRING_OBJ: ValueKind = "STRING";
pub const ARRAY_OBJ: ValueKind = "ARRAY";
pub const HASH_OBJ: ValueKind = "HASH";
pub const FUNCTION_OBJ: ValueKind = "FUNCTION";
pub const BUILTIN_OBJ: ValueKind = "BUILTIN";
pub const RETURN_VALUE_OBJ: ValueKind = "RETURN_VALUE";
pub const ERROR_OBJ: ValueKind = "ERROR";

/// A host-implemented function, consulted when identifier lookup misses the
/// environment chain. Takes the fully-evaluated argument list and returns a
/// `Value` the same way any other call expression would.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A runtime value. Cloning is shallow and cheap: `Array`/`Hash`/`Function`
/// bodies live behind an `Rc`, so cloning a `Value` never deep-copies a
/// closure's captured environment or a collection's elements.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashObject>),
    Function(Rc<FunctionObject>),
    Builtin(Rc<BuiltinObject>),
    ReturnValue(Rc<Value>),
    Error(Rc<str>),
}

/// A `{key: value}` literal's runtime representation. Keeps both the
/// original key `Value` and its digest so that `Inspect()` can re-render the
/// key faithfully instead of just its hash.
pub struct HashObject {
    pub pairs: IndexMap<HashKey, (Value, Value)>,
}

pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

pub struct BuiltinObject {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// Key type for [`Value::Hash`]: a type tag paired with a digest of the
/// value, so that e.g. the integer `1` and the string `"1"` never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: ValueKind,
    pub digest: u64,
}

impl Value {
    pub fn type_tag(&self) -> ValueKind {
        match self {
            Value::Integer(_) => INTEGER_OBJ,
            Value::Boolean(_) => BOOLEAN_OBJ,
            Value::Null => NULL_OBJ,
            Value::String(_) => STRING_OBJ,
            Value::Array(_) => ARRAY_OBJ,
            Value::Hash(_) => HASH_OBJ,
            Value::Function(_) => FUNCTION_OBJ,
            Value::Builtin(_) => BUILTIN_OBJ,
            Value::ReturnValue(_) => RETURN_VALUE_OBJ,
            Value::Error(_) => ERROR_OBJ,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(Rc::from(message.into().as_str()))
    }

    pub fn string(value: impl Into<String>) -> Value {
        Value::String(Rc::from(value.into().as_str()))
    }

    /// Attempts to produce a [`HashKey`] for this value. Only the hashable
    /// subset — integers, booleans, strings — has one.
    pub fn hash_key(&self) -> Option<HashKey> {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        match self {
            Value::Integer(value) => {
                value.hash(&mut hasher);
                Some(HashKey { kind: INTEGER_OBJ, digest: hasher.finish() })
            }
            Value::Boolean(value) => {
                value.hash(&mut hasher);
                Some(HashKey { kind: BOOLEAN_OBJ, digest: hasher.finish() })
            }
            Value::String(value) => {
                value.hash(&mut hasher);
                Some(HashKey { kind: STRING_OBJ, digest: hasher.finish() })
            }
            _ => None,
        }
    }

    /// The `==`/`!=` fallback for non-integer operands: booleans
    /// compare by value (the singleton design makes that equivalent to
    /// identity), `Null` is always equal to `Null`, and every other pairing —
    /// including two distinct arrays or functions with identical contents —
    /// compares unequal, mirroring the reference implementation's pointer
    /// equality over heap-allocated objects.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Null => "null".to_string(),
            Value::String(value) => value.to_string(),
            Value::Array(elements) => {
                format!("[{}]", elements.iter().map(Value::inspect).join(", "))
            }
            Value::Hash(hash) => {
                format!(
                    "{{{}}}",
                    hash.pairs.values().map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect())).join(", ")
                )
            }
            Value::Function(function) => {
                let params = function.parameters.iter().map(|p| p.name.as_str()).join(", ");
                let body: String = function.body.statements.iter().map(|s| s.to_string()).collect();
                format!("fn({params}) {{\n{body}\n}}")
            }
            Value::Builtin(_) => "builtin function".to_string(),
            Value::ReturnValue(inner) => inner.inspect(),
            Value::Error(message) => format!("ERROR: {message}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.type_tag(), self.inspect())
    }
}

/// Process-wide singletons for `true`, `false`, and `null`. Every evaluation
/// of a boolean or null literal returns one of these rather than allocating,
/// matching the reference implementation's shared-instance design.
pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

pub fn native_bool_to_value(input: bool) -> Value {
    if input {
        TRUE
    } else {
        FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_strings_with_equal_content_hash_equal() {
        assert_eq!(Value::Integer(1).hash_key(), Value::Integer(1).hash_key());
        assert_eq!(Value::string("a").hash_key(), Value::string("a").hash_key());
        assert_ne!(Value::Integer(1).hash_key(), Value::string("1").hash_key());
    }

    #[test]
    fn arrays_and_functions_are_unhashable() {
        assert!(Value::Array(Rc::new(Vec::new())).hash_key().is_none());
    }

    #[test]
    fn booleans_and_null_compare_by_identity_rule() {
        assert!(TRUE.identical(&TRUE));
        assert!(NULL.identical(&NULL));
        assert!(!TRUE.identical(&Value::Integer(1)));

        let a = Value::Array(Rc::new(vec![Value::Integer(1)]));
        let b = Value::Array(Rc::new(vec![Value::Integer(1)]));
        assert!(!a.identical(&b), "distinct arrays with equal contents are still not identical");
        assert!(a.identical(&a.clone()));
    }

    #[test]
    fn inspect_renders_arrays_and_errors() {
        let array = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
        assert_eq!(array.inspect(), "[1, 2]");
        assert_eq!(Value::error("boom").inspect(), "ERROR: boom");
    }
}
