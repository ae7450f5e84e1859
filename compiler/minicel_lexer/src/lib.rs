//! Formula lexer for minicel using logos.
//!
//! Formulas have exactly two token shapes: the `+` operator and a run of
//! ASCII alphanumerics or `_` (a number literal or a cell name; the parser
//! decides which). Whitespace between tokens is skipped. Any other character
//! is a [`LexError`].
//!
//! Tokens borrow the formula text and are consumed one at a time through
//! [`Lexer::next_token`]; there is no lookahead buffer and no pushback.

use logos::Logos;
use minicel_ir::Span;
use tracing::trace;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum RawToken {
    #[token("+")]
    Plus,

    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}

/// Kind of a formula token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `+` operator.
    Plus,
    /// A run of `[A-Za-z0-9_]`: a number literal or a cell name.
    Word,
}

/// A token: a view into the formula text plus its kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Byte range within the formula text.
    pub span: Span,
}

/// Unrecognized character while tokenizing a formula.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("unrecognized character `{found}` in formula")]
pub struct LexError {
    pub found: char,
    pub span: Span,
}

/// Pull-based lexer over a single formula.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
        }
    }

    /// Consume and return the next token.
    ///
    /// Returns `Ok(None)` once only whitespace remains.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        let Some(raw) = self.inner.next() else {
            return Ok(None);
        };
        let range = self.inner.span();

        let kind = match raw {
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Word) => TokenKind::Word,
            Err(()) => {
                // Report the whole character, however many bytes logos skipped.
                let found = self.inner.source()[range.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let span = Span::from_range(range.start..range.start + found.len_utf8());
                return Err(LexError { found, span });
            }
        };

        let text = self.inner.slice();
        let span = Span::from_range(range);
        trace!(?kind, text, ?span, "token");
        Ok(Some(Token { kind, text, span }))
    }
}

/// Tokenize a whole formula.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
