// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! The tree-walking evaluator: a recursive function over the
//! AST against a chained [`Environment`], implementing closures, truthiness,
//! and error short-circuiting by threading [`Value::Error`]/
//! [`Value::ReturnValue`] as in-band sentinels rather than an out-of-band
//! `Result`.

mod builtins;
mod operators;

use std::cell::RefCell;
use std::rc::Rc;

use lumen_ast::{
    ArrayLiteral, BlockStatement, CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, LetStatement, PrefixExpression, Program, ReturnStatement, Statement,
};
use lumen_object::{native_bool_to_value, Environment, FunctionObject, HashObject, Value, NULL};

pub use builtins::lookup_builtin;

/// The shared, reference-counted lexical scope every evaluation runs
/// against: `Rc<RefCell<..>>` rather than an owned value,
/// since closures capture their defining environment by reference and must
/// be able to outlive the block that created them.
pub type Env = Rc<RefCell<Environment>>;

/// `Eval(node, env) -> Value` restricted to a whole program:
/// evaluate every statement in order; a `ReturnValue` or `Error` produced
/// anywhere short-circuits the remaining statements, and exactly one layer
/// of `ReturnValue` is unwrapped before the program's value is surfaced.
pub fn eval_program(program: &Program, env: &Env) -> Value {
    tracing::trace!(statements = program.statements.len(), "evaluating program");
    let mut result = NULL;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::ReturnValue(inner) => return (*inner).clone(),
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Value {
    match statement {
        Statement::Let(node) => eval_let_statement(node, env),
        Statement::Return(node) => eval_return_statement(node, env),
        Statement::Expression(node) => eval_expression(&node.expression, env),
        Statement::Block(node) => eval_block_statement(node, env),
    }
}

/// Unlike [`eval_program`], a block **does not** unwrap `ReturnValue` — it
/// propagates the wrapper unchanged, so that nested returns inside `if`
/// blocks escape all the way out to the function call site or the top-level
/// program, which unwrap exactly once.
fn eval_block_statement(block: &BlockStatement, env: &Env) -> Value {
    let mut result = NULL;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_let_statement(node: &LetStatement, env: &Env) -> Value {
    let value = eval_expression(&node.value, env);
    if value.is_error() {
        return value;
    }
    env.borrow_mut().set(node.name.name.clone(), value);
    NULL
}

fn eval_return_statement(node: &ReturnStatement, env: &Env) -> Value {
    let value = eval_expression(&node.value, env);
    if value.is_error() {
        return value;
    }
    Value::ReturnValue(Rc::new(value))
}

fn eval_expression(expr: &Expression, env: &Env) -> Value {
    match expr {
        Expression::IntegerLiteral(n) => Value::Integer(n.value),
        Expression::Boolean(n) => native_bool_to_value(n.value),
        Expression::StringLiteral(n) => Value::string(n.value.clone()),
        Expression::Identifier(n) => eval_identifier(&n.name, env),
        Expression::Prefix(n) => eval_prefix_expression(n, env),
        Expression::Infix(n) => eval_infix_expression(n, env),
        Expression::If(n) => eval_if_expression(n, env),
        Expression::FunctionLiteral(n) => eval_function_literal(n, env),
        Expression::Call(n) => eval_call_expression(n, env),
        Expression::ArrayLiteral(n) => eval_array_literal(n, env),
        Expression::HashLiteral(n) => eval_hash_literal(n, env),
        Expression::Index(n) => eval_index_expression(n, env),
    }
}

/// Identifier lookup: environment chain first, then the
/// built-in table, then `"identifier not found: ..."`.
fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = lookup_builtin(name) {
        return builtin;
    }
    Value::error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(node: &PrefixExpression, env: &Env) -> Value {
    let right = eval_expression(&node.right, env);
    if right.is_error() {
        return right;
    }
    operators::eval_prefix(&node.operator, &right)
}

fn eval_infix_expression(node: &InfixExpression, env: &Env) -> Value {
    let left = eval_expression(&node.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&node.right, env);
    if right.is_error() {
        return right;
    }
    operators::eval_infix(&node.operator, &left, &right)
}

fn eval_if_expression(node: &IfExpression, env: &Env) -> Value {
    let condition = eval_expression(&node.condition, env);
    if condition.is_error() {
        return condition;
    }
    if is_truthy(&condition) {
        eval_block_statement(&node.consequence, env)
    } else if let Some(alternative) = &node.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL
    }
}

/// Truthiness: only `null` and `false` are falsy,
/// everything else — including the integer `0` — is truthy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}

/// Captures the defining environment by reference; no parameter count is
/// fixed or checked at definition time.
fn eval_function_literal(node: &FunctionLiteral, env: &Env) -> Value {
    Value::Function(Rc::new(FunctionObject {
        parameters: node.parameters.clone(),
        body: node.body.clone(),
        env: env.clone(),
    }))
}

fn eval_call_expression(node: &CallExpression, env: &Env) -> Value {
    let function = eval_expression(&node.function, env);
    if function.is_error() {
        return function;
    }

    let arguments = match eval_expressions(&node.arguments, env) {
        Ok(arguments) => arguments,
        Err(err) => return err,
    };

    apply_function(&function, &arguments)
}

/// Evaluates a list of expressions left-to-right, abandoning the rest the
/// instant one yields `Error` — the call-argument short-circuit rule, also
/// reused for array-literal elements, which evaluate under the same rule.
fn eval_expressions(exprs: &[Expression], env: &Env) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

/// Dispatches a call by callee kind. Arity mismatches against a
/// `Function` are reported as an `Error` rather than reproduced as an
/// out-of-bounds crash.
pub fn apply_function(function: &Value, arguments: &[Value]) -> Value {
    match function {
        Value::Function(func) => {
            if arguments.len() != func.parameters.len() {
                return Value::error(format!(
                    "wrong number of arguments: expected {}, got {}",
                    func.parameters.len(),
                    arguments.len()
                ));
            }
            let call_env = Environment::enclosed(func.env.clone());
            bind_parameters(&call_env, &func.parameters, arguments);
            let evaluated = eval_block_statement(&func.body, &call_env);
            unwrap_return_value(evaluated)
        }
        Value::Builtin(builtin) => (builtin.func)(arguments),
        other => Value::error(format!("Not a function: {}", other.type_tag())),
    }
}

fn bind_parameters(env: &Env, parameters: &[Identifier], arguments: &[Value]) {
    let mut scope = env.borrow_mut();
    for (param, arg) in parameters.iter().zip(arguments) {
        scope.set(param.name.clone(), arg.clone());
    }
}

fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::ReturnValue(inner) => (*inner).clone(),
        other => other,
    }
}

fn eval_array_literal(node: &ArrayLiteral, env: &Env) -> Value {
    match eval_expressions(&node.elements, env) {
        Ok(elements) => Value::Array(Rc::new(elements)),
        Err(err) => err,
    }
}

fn eval_hash_literal(node: &HashLiteral, env: &Env) -> Value {
    let mut pairs = indexmap::IndexMap::new();
    for (key_expr, value_expr) in &node.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Value::error(format!("Unusable as hash key: {}", key.type_tag())),
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, (key, value));
    }
    Value::Hash(Rc::new(HashObject { pairs }))
}

fn eval_index_expression(node: &IndexExpression, env: &Env) -> Value {
    let left = eval_expression(&node.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&node.index, env);
    if index.is_error() {
        return index;
    }

    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                NULL
            } else {
                elements[*i as usize].clone()
            }
        }
        (Value::Hash(hash), key) => match key.hash_key() {
            Some(hash_key) => hash.pairs.get(&hash_key).map(|(_, v)| v.clone()).unwrap_or(NULL),
            None => Value::error(format!("Unusable as hash key: {}", key.type_tag())),
        },
        _ => Value::error(format!("Index operator is not defined on type: {}", left.type_tag())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_errors::Handler;
    use lumen_parser::parse;

    fn eval_source(source: &str) -> Value {
        let handler = Handler::new();
        let program = parse(&handler, source);
        assert!(!handler.has_errors(), "unexpected parser errors for {source:?}");
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn integer_expressions() {
        assert_eq!(eval_source("5").inspect(), "5");
        assert_eq!(eval_source("5 + 5 + 5 + 5 - 10").inspect(), "10");
        assert_eq!(eval_source("2 * 2 * 2 * 2 * 2").inspect(), "32");
        assert_eq!(eval_source("-50 + 100 + -50").inspect(), "0");
    }

    #[test]
    fn boolean_and_bang_expressions() {
        assert_eq!(eval_source("1 < 2").inspect(), "true");
        assert_eq!(eval_source("1 > 2").inspect(), "false");
        assert_eq!(eval_source("!true").inspect(), "false");
        assert_eq!(eval_source("!!5").inspect(), "true");
    }

    #[test]
    fn if_else_expressions() {
        assert_eq!(eval_source("if (true) { 10 }").inspect(), "10");
        assert_eq!(eval_source("if (false) { 10 }").inspect(), "null");
        assert_eq!(eval_source("if (1 > 2) { 10 } else { 20 }").inspect(), "20");
    }

    #[test]
    fn nested_return_statements_stop_at_the_function_boundary() {
        let source = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_eq!(eval_source(source).inspect(), "10");
    }

    #[test]
    fn error_handling_short_circuits() {
        assert_eq!(eval_source("5 + true;").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
        assert_eq!(eval_source("5 + true; 5;").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
        assert_eq!(eval_source("-true").inspect(), "ERROR: unknown operator: -BOOLEAN");
        assert_eq!(eval_source(r#""Hello" - "world""#).inspect(), "ERROR: unknown operator: STRING - STRING");
        assert_eq!(eval_source("foobar").inspect(), "ERROR: identifier not found: foobar");
    }

    #[test]
    fn let_statements_bind_and_shadow() {
        assert_eq!(eval_source("let a = 5; let b = a; let c = a + b + 5; c;").inspect(), "15");
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let source = "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);";
        assert_eq!(eval_source(source).inspect(), "4");
    }

    #[test]
    fn arity_mismatch_is_an_error_not_a_crash() {
        let source = "let f = fn(a, b) { a + b }; f(1);";
        assert_eq!(eval_source(source).inspect(), "ERROR: wrong number of arguments: expected 2, got 1");
    }

    #[test]
    fn array_and_hash_indexing() {
        assert_eq!(eval_source("let a = [1, 2, 3]; a[1];").inspect(), "2");
        assert_eq!(eval_source("let a = [1, 2, 3]; a[5];").inspect(), "null");
        assert_eq!(eval_source(r#"{"one": 1, "two": 2}["one"]"#).inspect(), "1");
        assert_eq!(
            eval_source("{}[fn(x) { x }]").inspect(),
            "ERROR: Unusable as hash key: FUNCTION"
        );
    }

    #[test]
    fn push_does_not_mutate_the_original_binding() {
        let source = "let a = [1, 2, 3]; push(a, 4); a;";
        assert_eq!(eval_source(source).inspect(), "[1, 2, 3]");
    }

    #[test]
    fn builtin_len_covers_strings_and_arrays() {
        assert_eq!(eval_source(r#"len("four")"#).inspect(), "4");
        assert_eq!(eval_source("len(1)").inspect(), "ERROR: Invalid argument passed to `len()`. Got=INTEGER");
    }
}
