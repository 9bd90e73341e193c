use std::num::ParseIntError;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

// Handlers start with `current` on the first token of their production and leave
// it on the last one.

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    parser.descend()?;
    let expr = parse_expr_inner(parser, precedence);
    parser.ascend();

    expr
}

fn parse_expr_inner(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    // First parse the prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixRule { kind: token_kind },
            parser.get_position(),
        ));
    };

    log::trace!("prefix {} at offset {}", token_kind, parser.get_position().0);
    let mut left = prefix(parser)?;

    // While the next token binds tighter than the caller, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = parser.get_infix_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        log::trace!("infix {} at offset {}", parser.current_token_kind(), parser.get_position().0);
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(current_identifier(parser)))
}

fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();

    Identifier {
        value: token.literal.clone(),
        token,
    }
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match parse_integer(&token.literal) {
        Ok(value) => Ok(Expr::IntegerLiteral(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                literal: token.literal,
            },
            token.span.start,
        )),
    }
}

/// A leading `0` marks an octal literal, so `010` is 8 and `09` is rejected.
fn parse_integer(literal: &str) -> Result<i64, ParseIntError> {
    match literal.strip_prefix('0') {
        Some(digits) if !digits.is_empty() => i64::from_str_radix(digits, 8),
        _ => literal.parse::<i64>(),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::BooleanLiteral(BooleanLiteral {
        value: parser.current_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_closed_block(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_closed_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(<parameters>) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_closed_block(parser)?;

    Ok(Expr::FunctionLiteral(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(current_identifier(parser));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(current_identifier(parser));
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

/// Parses a block and requires that it was closed by `}` rather than by the end
/// of input.
fn parse_closed_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let block = parse_block_stmt(parser);

    if !parser.current_is(TokenKind::RBrace) {
        return Err(Error::new(
            ErrorImpl::UnterminatedBlock {
                found: parser.current_token_kind(),
            },
            parser.get_position(),
        ));
    }

    Ok(block)
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::RParen)?;

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses comma-separated expressions up to `end`, starting on the opening token.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if parser.peek_is(end) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(args)
}
