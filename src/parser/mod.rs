//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, `if`,
//!   function literals, calls)
//! - Error accumulation and recovery
//!
//! The parser uses prefix and infix handlers registered per token kind, with a
//! precedence table deciding how far an expression extends to the right.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
