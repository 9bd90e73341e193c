//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation, including two-character operators
//! - Illegal characters
//! - End of input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.xl".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.xl".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_baz _underscore CamelCase lettuce".to_string();
    let tokens = tokenize(source, Some("test.xl".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "bar_baz");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "CamelCase");
    // Keyword prefixes do not split identifiers
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].literal, "lettuce");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "123");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 007 99999999999999999999".to_string();
    let tokens = tokenize(source, Some("test.xl".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "007");
    // Conversion is left to the parser, so overflowing literals still lex
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "99999999999999999999");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == !="),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d".to_string(), None);
    let pairs = tokens
        .iter()
        .map(|token| (token.kind, token.literal.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(
        pairs,
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Equal, "=="),
            (TokenKind::Identifier, "b"),
            (TokenKind::NotEqual, "!="),
            (TokenKind::Bang, "!"),
            (TokenKind::Identifier, "c"),
            (TokenKind::Assign, "="),
            (TokenKind::Identifier, "d"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;\nlet add = fn(x, y) {\n\tx + y;\r\n};\nif (5 < 10) { return true; } else { return false; }";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::LessThan,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Else,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ é $".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    // Multi-byte characters are kept whole
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "é");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "$");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_whitespace_only_input() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  x == 10".to_string(), Some("spans.xl".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
    assert_eq!(tokens[4].span.start.0, 12);
    assert_eq!(tokens[4].span.start.1.as_str(), "spans.xl");
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let lexer = Lexer::new("let x = 1;".to_string(), None);
    let tokens = lexer.collect::<Vec<_>>();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::EOF));
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo 12 + ?".to_string(), None);

    assert_eq!(tokens[0].to_string(), "IDENT (foo)");
    assert_eq!(tokens[1].to_string(), "INT (12)");
    assert_eq!(tokens[2].to_string(), "+");
    assert_eq!(tokens[3].to_string(), "ILLEGAL (?)");
    assert_eq!(tokens[4].to_string(), "EOF");
}
