// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_ast::{
    ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, IntegerLiteral, Node, PrefixExpression, StringLiteral,
};
use lumen_errors::ParserError;

use crate::parser::precedence::{precedence_of, Precedence};
use crate::parser::ParserContext;
use crate::tokenizer::Token;

/// Pratt expression parsing: look up the prefix function for the current
/// token, apply it, then keep folding in infix applications as long as the
/// next token binds tighter than `min_prec`.
///
/// The prefix/infix dispatch table is realised here as the two `match`es
/// in [`parse_prefix`] and [`parse_infix`] — a real `HashMap` of
/// function pointers keyed by token kind would need `Token`'s data-bearing
/// variants (`Ident(String)`, `Int(String)`, ...) collapsed to bare
/// discriminants first, which buys nothing over a match the compiler
/// already turns into a jump table.
pub(crate) fn parse_expression(ctx: &mut ParserContext, min_prec: Precedence) -> Option<Expression> {
    let mut left = parse_prefix(ctx)?;

    while !ctx.peek_token_is(&Token::Semicolon) && precedence_of(&ctx.peek_token.token) > min_prec {
        ctx.bump();
        left = parse_infix(ctx, left)?;
    }

    Some(left)
}

fn parse_prefix(ctx: &mut ParserContext) -> Option<Expression> {
    match ctx.cur_token.token.clone() {
        Token::Ident(name) => Some(Expression::Identifier(Identifier::new(name, ctx.cur_span()))),
        Token::Int(literal) => parse_integer_literal(ctx, &literal),
        Token::True => Some(parse_boolean(ctx, true)),
        Token::False => Some(parse_boolean(ctx, false)),
        Token::Str(value) => Some(Expression::StringLiteral(StringLiteral { value, span: ctx.cur_span() })),
        Token::Bang | Token::Minus => parse_prefix_expression(ctx),
        Token::LeftParen => parse_grouped_expression(ctx),
        Token::If => parse_if_expression(ctx),
        Token::Function => parse_function_literal(ctx),
        Token::LeftBracket => parse_array_literal(ctx),
        Token::LeftBrace => parse_hash_literal(ctx),
        other => {
            ctx.emit_err(ParserError::no_prefix_parse_fn(other.to_string(), ctx.cur_span()));
            None
        }
    }
}

fn parse_infix(ctx: &mut ParserContext, left: Expression) -> Option<Expression> {
    match ctx.cur_token.token {
        Token::LeftParen => parse_call_expression(ctx, left),
        Token::LeftBracket => parse_index_expression(ctx, left),
        _ => parse_infix_expression(ctx, left),
    }
}

fn parse_integer_literal(ctx: &mut ParserContext, literal: &str) -> Option<Expression> {
    match literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { value, span: ctx.cur_span() })),
        Err(_) => {
            ctx.emit_err(ParserError::invalid_integer_literal(literal.to_string(), ctx.cur_span()));
            None
        }
    }
}

fn parse_boolean(ctx: &mut ParserContext, value: bool) -> Expression {
    Expression::Boolean(BooleanLiteral { value, span: ctx.cur_span() })
}

fn parse_prefix_expression(ctx: &mut ParserContext) -> Option<Expression> {
    let operator = ctx.cur_token.token.to_string();
    let start = ctx.cur_span();
    ctx.bump();
    let right = parse_expression(ctx, Precedence::Prefix)?;
    let span = start + right.span();
    Some(Expression::Prefix(PrefixExpression { operator, right: Box::new(right), span }))
}

fn parse_infix_expression(ctx: &mut ParserContext, left: Expression) -> Option<Expression> {
    let operator = ctx.cur_token.token.to_string();
    let precedence = precedence_of(&ctx.cur_token.token);
    let start = left.span();
    ctx.bump();
    let right = parse_expression(ctx, precedence)?;
    let span = start + right.span();
    Some(Expression::Infix(InfixExpression { left: Box::new(left), operator, right: Box::new(right), span }))
}

/// `( expr )` — no node is created for the parentheses; the inner
/// expression is returned verbatim.
fn parse_grouped_expression(ctx: &mut ParserContext) -> Option<Expression> {
    ctx.bump();
    let expression = parse_expression(ctx, Precedence::Lowest)?;
    if !ctx.expect_peek(&Token::RightParen) {
        return None;
    }
    Some(expression)
}

fn parse_if_expression(ctx: &mut ParserContext) -> Option<Expression> {
    let start = ctx.cur_span();

    if !ctx.expect_peek(&Token::LeftParen) {
        return None;
    }
    ctx.bump();
    let condition = parse_expression(ctx, Precedence::Lowest)?;

    if !ctx.expect_peek(&Token::RightParen) {
        return None;
    }
    if !ctx.expect_peek(&Token::LeftBrace) {
        return None;
    }
    let consequence = super::statement::parse_block_statement(ctx)?;

    let alternative = if ctx.peek_token_is(&Token::Else) {
        ctx.bump();
        if !ctx.expect_peek(&Token::LeftBrace) {
            return None;
        }
        Some(super::statement::parse_block_statement(ctx)?)
    } else {
        None
    };

    let span = start + alternative.as_ref().map(|b| b.span()).unwrap_or_else(|| consequence.span());
    Some(Expression::If(IfExpression { condition: Box::new(condition), consequence, alternative, span }))
}

fn parse_function_literal(ctx: &mut ParserContext) -> Option<Expression> {
    let start = ctx.cur_span();

    if !ctx.expect_peek(&Token::LeftParen) {
        return None;
    }
    let parameters = parse_function_parameters(ctx)?;

    if !ctx.expect_peek(&Token::LeftBrace) {
        return None;
    }
    let body = super::statement::parse_block_statement(ctx)?;

    let span = start + body.span();
    Some(Expression::FunctionLiteral(FunctionLiteral { parameters, body, span }))
}

fn parse_function_parameters(ctx: &mut ParserContext) -> Option<Vec<Identifier>> {
    let mut identifiers = Vec::new();

    if ctx.peek_token_is(&Token::RightParen) {
        ctx.bump();
        return Some(identifiers);
    }

    ctx.bump();
    identifiers.push(parse_plain_identifier(ctx)?);

    while ctx.peek_token_is(&Token::Comma) {
        ctx.bump();
        ctx.bump();
        identifiers.push(parse_plain_identifier(ctx)?);
    }

    if !ctx.expect_peek(&Token::RightParen) {
        return None;
    }

    Some(identifiers)
}

fn parse_plain_identifier(ctx: &mut ParserContext) -> Option<Identifier> {
    match &ctx.cur_token.token {
        Token::Ident(name) => Some(Identifier::new(name.clone(), ctx.cur_span())),
        other => {
            ctx.emit_err(ParserError::unexpected_token("IDENTIFIER", other.to_string(), ctx.cur_span()));
            None
        }
    }
}

fn parse_call_expression(ctx: &mut ParserContext, function: Expression) -> Option<Expression> {
    let start = function.span();
    let arguments = parse_expression_list(ctx, Token::RightParen)?;
    let span = start + ctx.cur_span();
    Some(Expression::Call(CallExpression { function: Box::new(function), arguments, span }))
}

fn parse_index_expression(ctx: &mut ParserContext, left: Expression) -> Option<Expression> {
    let start = left.span();
    ctx.bump();
    let index = parse_expression(ctx, Precedence::Lowest)?;
    if !ctx.expect_peek(&Token::RightBracket) {
        return None;
    }
    let span = start + ctx.cur_span();
    Some(Expression::Index(IndexExpression { left: Box::new(left), index: Box::new(index), span }))
}

fn parse_array_literal(ctx: &mut ParserContext) -> Option<Expression> {
    let start = ctx.cur_span();
    let elements = parse_expression_list(ctx, Token::RightBracket)?;
    let span = start + ctx.cur_span();
    Some(Expression::ArrayLiteral(ArrayLiteral { elements, span }))
}

/// Shared by call arguments, array elements, and anything else that's a
/// comma list terminated by `close` — `(`, `[`, and `{` literals each bump
/// past their own opening delimiter before calling this, so it only ever
/// needs to handle "empty" vs. "first element already under the cursor".
fn parse_expression_list(ctx: &mut ParserContext, close: Token) -> Option<Vec<Expression>> {
    let mut list = Vec::new();

    if ctx.peek_token_is(&close) {
        ctx.bump();
        return Some(list);
    }

    ctx.bump();
    list.push(parse_expression(ctx, Precedence::Lowest)?);

    while ctx.peek_token_is(&Token::Comma) {
        ctx.bump();
        ctx.bump();
        list.push(parse_expression(ctx, Precedence::Lowest)?);
    }

    if !ctx.expect_peek(&close) {
        return None;
    }

    Some(list)
}

fn parse_hash_literal(ctx: &mut ParserContext) -> Option<Expression> {
    let start = ctx.cur_span();
    let mut pairs = Vec::new();

    while !ctx.peek_token_is(&Token::RightBrace) {
        ctx.bump();
        let key = parse_expression(ctx, Precedence::Lowest)?;

        if !ctx.expect_peek(&Token::Colon) {
            return None;
        }

        ctx.bump();
        let value = parse_expression(ctx, Precedence::Lowest)?;
        pairs.push((key, value));

        if !ctx.peek_token_is(&Token::RightBrace) && !ctx.expect_peek(&Token::Comma) {
            return None;
        }
    }

    if !ctx.expect_peek(&Token::RightBrace) {
        return None;
    }

    let span = start + ctx.cur_span();
    Some(Expression::HashLiteral(HashLiteral { pairs, span }))
}
