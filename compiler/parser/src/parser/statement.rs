// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_ast::{BlockStatement, ExpressionStatement, Identifier, LetStatement, Node, Program, ReturnStatement, Statement};
use lumen_errors::{Handler, ParserError};

use crate::parser::context::ParserContext;
use crate::parser::expression::parse_expression;
use crate::parser::precedence::Precedence;
use crate::tokenizer::{SpannedToken, Token};

/// `Parse(tokens) -> (Program, errors)`: the outer statement
/// loop that drives the whole parse. Every iteration re-syncs on a fresh
/// `bump()` regardless of whether the statement it just tried to parse
/// succeeded, so a single malformed statement can't wedge the parser — it
/// continues at the next statement boundary instead.
pub(crate) fn parse_program(handler: &Handler, tokens: Vec<SpannedToken>) -> Program {
    let mut ctx = ParserContext::new(handler, tokens);
    let mut statements = Vec::new();

    while ctx.has_next() {
        if let Some(statement) = parse_statement(&mut ctx) {
            statements.push(statement);
        }
        ctx.bump();
    }

    Program { statements }
}

pub(crate) fn parse_statement(ctx: &mut ParserContext) -> Option<Statement> {
    match ctx.cur_token.token {
        Token::Let => parse_let_statement(ctx).map(Statement::Let),
        Token::Return => parse_return_statement(ctx).map(Statement::Return),
        _ => parse_expression_statement(ctx).map(Statement::Expression),
    }
}

/// `LET` -> expect `IDENTIFIER`, `=`, expression at `LOWEST`, optional `;`.
fn parse_let_statement(ctx: &mut ParserContext) -> Option<LetStatement> {
    let start = ctx.cur_span();

    let name = match ctx.peek_token.token.clone() {
        Token::Ident(name) => name,
        other => {
            ctx.emit_err(ParserError::unexpected_token("IDENTIFIER", other.to_string(), ctx.peek_token.span));
            return None;
        }
    };
    ctx.bump();
    let name = Identifier::new(name, ctx.cur_span());

    if !ctx.expect_peek(&Token::Assign) {
        return None;
    }
    ctx.bump();

    let value = parse_expression(ctx, Precedence::Lowest)?;

    if ctx.peek_token_is(&Token::Semicolon) {
        ctx.bump();
    }

    let span = start + value.span();
    Some(LetStatement { name, value, span })
}

/// `RETURN` -> expression at `LOWEST`, optional `;`.
fn parse_return_statement(ctx: &mut ParserContext) -> Option<ReturnStatement> {
    let start = ctx.cur_span();
    ctx.bump();

    let value = parse_expression(ctx, Precedence::Lowest)?;

    if ctx.peek_token_is(&Token::Semicolon) {
        ctx.bump();
    }

    let span = start + value.span();
    Some(ReturnStatement { value, span })
}

/// Anything that isn't `let`/`return`: an expression evaluated for its
/// value, with an optional trailing `;`.
fn parse_expression_statement(ctx: &mut ParserContext) -> Option<ExpressionStatement> {
    let start = ctx.cur_span();
    let expression = parse_expression(ctx, Precedence::Lowest)?;

    if ctx.peek_token_is(&Token::Semicolon) {
        ctx.bump();
    }

    let span = start + expression.span();
    Some(ExpressionStatement { expression, span })
}

/// Consumes `{ ... }`. Called with `cur_token` on the opening brace; leaves
/// `cur_token` on the closing brace (or `Eof`, if the source ran out first)
/// so that callers like `if`/`else` can peek past it without an extra bump.
pub(crate) fn parse_block_statement(ctx: &mut ParserContext) -> Option<BlockStatement> {
    let start = ctx.cur_span();
    let mut statements = Vec::new();
    ctx.bump();

    while !ctx.cur_token_is(&Token::RightBrace) && ctx.has_next() {
        if let Some(statement) = parse_statement(ctx) {
            statements.push(statement);
        }
        ctx.bump();
    }

    let span = start + ctx.cur_span();
    Some(BlockStatement { statements, span })
}

#[cfg(test)]
mod tests {
    use lumen_errors::Handler;

    use super::parse_program;
    use crate::tokenizer::Lexer;

    fn parse(source: &str) -> (lumen_ast::Program, lumen_errors::Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source).tokenize();
        let program = parse_program(&handler, tokens);
        (program, handler)
    }

    #[test]
    fn let_statements_bind_name_to_value() {
        let (program, handler) = parse("let x = 5; let y = true; let foobar = y;");
        assert!(!handler.has_errors());
        assert_eq!(program.statements.len(), 3);
        assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
    }

    #[test]
    fn return_statement_round_trips() {
        let (program, handler) = parse("return 5; return 10;");
        assert!(!handler.has_errors());
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn malformed_let_records_an_error_but_parsing_reaches_the_next_let() {
        let (program, handler) = parse("let = 5; let y = 10;");
        assert!(handler.has_errors());
        // The parser re-syncs at the next statement boundary rather than aborting.
        assert!(matches!(program.statements.last(), Some(lumen_ast::Statement::Let(_))));
    }

    #[test]
    fn multiple_malformed_statements_each_contribute_an_error() {
        let (_, handler) = parse("let x 5; let = 10;");
        assert!(handler.err_count() >= 2);
    }
}
