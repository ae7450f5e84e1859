//! Recursive descent parser for minicel formulas.
//!
//! Grammar (the text after a cell's leading `=`):
//!
//! ```text
//! formula      := plus_expr
//! plus_expr    := primary_expr ( '+' plus_expr )?
//! primary_expr := NUMBER | CELLREF
//! ```
//!
//! `plus_expr` is right-recursive, so `A0+B0+C0` builds `A0+(B0+C0)`.
//! Parsing stops at the first operand not followed by `+`; whatever follows
//! it is left unread, so `=1 2` is the formula `1`.
//! Nodes are allocated into a caller-owned [`ExprArena`] shared by every
//! formula in the table.

mod error;

pub use error::ParseError;

use minicel_ir::{CellPos, Expr, ExprArena, ExprId, Span};
use minicel_lexer::{Lexer, Token, TokenKind};
use minicel_stack::ensure_sufficient_stack;
use tracing::trace;

/// Parse one formula into `arena`, returning the root expression.
pub fn parse_formula(source: &str, arena: &mut ExprArena) -> Result<ExprId, ParseError> {
    Parser::new(source, arena).parse()
}

/// Parser state for a single formula.
pub struct Parser<'src, 'a> {
    lexer: Lexer<'src>,
    arena: &'a mut ExprArena,
    /// Where an `UnexpectedEnd` points.
    end: Span,
}

impl<'src, 'a> Parser<'src, 'a> {
    pub fn new(source: &'src str, arena: &'a mut ExprArena) -> Self {
        let len = source.len();
        Parser {
            lexer: Lexer::new(source),
            arena,
            end: Span::from_range(len..len),
        }
    }

    /// Parse the whole formula.
    pub fn parse(&mut self) -> Result<ExprId, ParseError> {
        self.parse_plus_expr()
    }

    /// `plus_expr := primary_expr ( '+' plus_expr )?`
    ///
    /// Any token other than `+` after the operand ends the expression.
    pub fn parse_plus_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            let lhs = self.parse_primary_expr()?;

            match self.lexer.next_token()? {
                Some(token) if token.kind == TokenKind::Plus => {}
                Some(token) => {
                    trace!(?lhs, ignored = token.text, "plus_expr ends before non-`+` token");
                    return Ok(lhs);
                }
                None => return Ok(lhs),
            }

            let rhs = self.parse_plus_expr()?;
            let id = self.arena.alloc(Expr::Plus { lhs, rhs });
            trace!(?id, ?lhs, ?rhs, "plus_expr");
            Ok(id)
        })
    }

    /// `primary_expr := NUMBER | CELLREF`
    pub fn parse_primary_expr(&mut self) -> Result<ExprId, ParseError> {
        let Some(token) = self.lexer.next_token()? else {
            return Err(ParseError::UnexpectedEnd { span: self.end });
        };
        let expr = primary_from_token(token)?;
        let id = self.arena.alloc(expr);
        trace!(?id, ?expr, "primary_expr");
        Ok(id)
    }
}

/// Classify a single token as a number literal or a cell reference.
///
/// A token that parses in full as `f64` is a number; otherwise it must be an
/// uppercase column letter followed by a row index.
fn primary_from_token(token: Token<'_>) -> Result<Expr, ParseError> {
    if let Ok(value) = token.text.parse::<f64>() {
        return Ok(Expr::Number(value));
    }
    match CellPos::from_name(token.text) {
        Some(CellPos { row, col }) => Ok(Expr::CellRef { row, col }),
        None => Err(ParseError::InvalidCellRef {
            text: token.text.to_owned(),
            span: token.span,
        }),
    }
}
