//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps a
//! two-token window (`current` and `peek`). Expressions are parsed with a
//! Pratt parser driven by lookup tables for:
//! - Statement handlers
//! - Prefix handlers (tokens that can start an expression)
//! - Infix handlers (tokens that can extend the expression to their left)
//! - Operator precedences
//!
//! Errors never abort a parse. They are recorded in order, the statement that
//! produced them is dropped, and parsing carries on with the next token.

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of expressions. `None` leaves recursion bounded only by
    /// the call stack.
    pub max_depth: Option<usize>,
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// The main parser structure that maintains parsing state.
///
/// One parser consumes one token stream. Instances share nothing, so separate
/// parses can run on separate threads.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator precedences
    precedence_lookup: PrecedenceLookup,
    config: ParserConfig,
    /// Current nesting of `parse_expr` calls
    depth: usize,
}

impl Parser {
    /// Creates a parser over `lexer` with the default configuration and all
    /// grammar handlers registered.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, config: ParserConfig) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            config,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window by one token. At the end of input both slots hold `EOF`.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
        log::trace!("advanced to {}", self.current);
    }

    /// Advances if the next token is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns an `UnexpectedToken` error positioned at the next token if it does
    /// not match; the window is left untouched in that case.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Precedence of the next token, `Lowest` for tokens that are not operators.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        *self
            .precedence_lookup
            .get(&kind)
            .unwrap_or(&Precedence::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceLookup {
        &self.precedence_lookup
    }

    /// Registers an infix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly this operator binds
    /// * `infix_fn` - The handler function for this infix operator
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `prefix_fn` - The handler function for expressions starting with `kind`
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// Tokens without a statement handler start an expression statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Enters one level of expression nesting.
    pub(crate) fn descend(&mut self) -> Result<(), Error> {
        if let Some(max_depth) = self.config.max_depth {
            if self.depth >= max_depth {
                return Err(Error::new(
                    ErrorImpl::NestingTooDeep { max_depth },
                    self.get_position(),
                ));
            }
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn record(&mut self, error: Error) {
        log::debug!("parse error at offset {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Errors recorded so far. Empty after a parse means the program is well formed.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail are left out of the program; their errors are
    /// available from [`Parser::errors`]. The window advances after every
    /// statement, so the loop always makes progress.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        log::debug!(
            "parsed {} statement(s) from {} with {} error(s)",
            program.statements.len(),
            self.lexer.file(),
            self.errors.len()
        );

        program
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. `file` names the source in error
/// positions and defaults to `shell`.
///
/// # Returns
///
/// A tuple containing:
/// - The best-effort Program
/// - Every error recorded, in order. Callers must not trust the program unless
///   this is empty.
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    parse_with_config(source, file, ParserConfig::default())
}

pub fn parse_with_config(
    source: String,
    file: Option<String>,
    config: ParserConfig,
) -> (Program, Vec<Error>) {
    let mut parser = Parser::with_config(Lexer::new(source, file), config);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
