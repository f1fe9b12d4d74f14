//! Tokenizer for patterns.
//!
//! Tokens are lexed lazily, one lookahead at a time, so an unknown character
//! is only reported once the parser actually needs it. Every token is a
//! single character; the synthesized end marker has an empty span.

use std::ops::Range;

use logos::Logos;

use super::grammar::Symbol;
use crate::{CompileError, Result};

/// Character used when an end marker has to be shown.
pub const END_MARKER: char = '$';

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("$")]
    Dollar,

    /// `^` and `λ` spell the empty string.
    #[regex("[a-zA-Z0-9]")]
    #[token("^")]
    #[token("λ")]
    Lit,
}

impl TokenKind {
    fn symbol(self) -> Symbol {
        match self {
            TokenKind::Plus => Symbol::Plus,
            TokenKind::Star => Symbol::Star,
            TokenKind::ParenOpen => Symbol::ParenOpen,
            TokenKind::ParenClose => Symbol::ParenClose,
            TokenKind::Dollar => Symbol::End,
            TokenKind::Lit => Symbol::Lit,
        }
    }
}

/// A terminal with its source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbol: Symbol,
    pub text: char,
    /// Character offset into the pattern.
    pub position: usize,
    /// Byte range in the pattern, empty for the end marker.
    pub span: Range<usize>,
}

impl Token {
    /// The marker appended after the last character, as opposed to a typed `$`.
    pub fn is_end_marker(&self) -> bool {
        self.symbol == Symbol::End && self.span.is_empty()
    }
}

pub struct Lexer<'s> {
    source: &'s str,
    inner: logos::Lexer<'s, TokenKind>,
    position: usize,
    finished: bool,
}

/// Start tokenizing `source`.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer {
        source,
        inner: TokenKind::lexer(source),
        position: 0,
        finished: false,
    }
}

impl<'s> Lexer<'s> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Next terminal, the end marker once input runs out, then `None`.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        if self.finished {
            return None;
        }

        let position = self.position;
        let Some(kind) = self.inner.next() else {
            self.finished = true;
            let len = self.source.len();
            return Some(Ok(Token {
                symbol: Symbol::End,
                text: END_MARKER,
                position,
                span: len..len,
            }));
        };

        self.position += 1;
        let span = self.inner.span();
        match kind {
            Ok(kind) => {
                let text = self.inner.slice().chars().next().unwrap_or(END_MARKER);
                Some(Ok(Token {
                    symbol: kind.symbol(),
                    text,
                    position,
                    span,
                }))
            }
            Err(()) => {
                self.finished = true;
                Some(Err(CompileError::UnknownToken { position }))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Check that every character of `candidate` is a plain literal.
///
/// Candidates are matched symbol by symbol, so operators, the end marker and
/// the empty-string spellings are all rejected as unknown tokens.
pub fn check_literals(candidate: &str) -> Result<()> {
    for token in lex(candidate) {
        let token = token?;
        if token.is_end_marker() {
            break;
        }
        if token.symbol != Symbol::Lit || !token.text.is_ascii_alphanumeric() {
            return Err(CompileError::UnknownToken {
                position: token.position,
            });
        }
    }
    Ok(())
}
