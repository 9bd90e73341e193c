//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Scanning of source text one byte at a time, on demand
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping
//!
//! Unrecognised characters become `Illegal` tokens rather than errors; the
//! parser reports them when no prefix rule exists for them.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
