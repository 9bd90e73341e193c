use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// A failing statement records its error and yields `None`; the caller still
/// advances past it.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let result = match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    };

    match result {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.record(error);
            None
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_to_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_to_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

// Anything between the value and the next `;` is dropped, including the tokens
// of a following statement when the `;` is missing.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser.current_is(TokenKind::Semicolon) && !parser.current_is(TokenKind::EOF) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression: Expr = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses the statements of a block, starting on its `{`.
///
/// Stops on `}` or at the end of input without complaint; callers that need a
/// closed block check where it stopped.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::RBrace) && !parser.current_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { token, statements }
}
