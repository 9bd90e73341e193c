use std::sync::Arc;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Byte-at-a-time scanner over a fully buffered source string.
///
/// Tokens are produced on demand by [`Lexer::next_token`]; once the input is
/// exhausted every further call yields an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Offset of `ch`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Current byte, `0` past the end of input
    ch: u8,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from("shell")));

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> &Arc<String> {
        &self.file
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn read_char(&mut self) {
        self.position = self.read_position.min(self.source.len());
        self.ch = self.byte_at(self.position);
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.source.as_bytes().get(offset).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Builds a token from `start` up to the current position.
    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        MK_TOKEN!(
            kind,
            self.source[start..self.position].to_string(),
            MK_SPAN!(self, start, self.position)
        )
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self, start, start));
        }

        let kind = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::Equal
            }
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::NotEqual
            }
            b'=' => TokenKind::Assign,
            b'!' => TokenKind::Bang,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            ch if is_letter(ch) => return self.read_identifier(),
            ch if ch.is_ascii_digit() => return self.read_number(),
            _ => return self.read_illegal(),
        };

        self.read_char();
        self.token_from(kind, start)
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while !self.at_eof() && is_letter(self.ch) {
            self.read_char();
        }

        let literal = &self.source[start..self.position];
        let kind = RESERVED_LOOKUP
            .get(literal)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.token_from(kind, start)
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while !self.at_eof() && self.ch.is_ascii_digit() {
            self.read_char();
        }

        self.token_from(TokenKind::Int, start)
    }

    // Consumes a whole character so multi-byte input never splits a code point
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);

        for _ in 0..width {
            self.read_char();
        }

        self.token_from(TokenKind::Illegal, start)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Collects the whole token stream of `source`, ending with a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
