//! Recursive-descent evaluation over a token stream.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '(' expression ')' | '-' factor | NUMBER
//! ```

use log::trace;

use crate::{EvalError, token::Token};

/// Maximum nesting of parentheses and unary minus accepted.
const MAX_NESTING: usize = 256;

/// Evaluates a complete token stream in floating point.
///
/// Tokens left over after a complete expression make the input malformed.
pub(crate) fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let value = parser.expression()?;
    if parser.pos != tokens.len() {
        trace!("trailing tokens at position {}", parser.pos);
        return Err(EvalError::MalformedExpression);
    }
    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.nested(Self::expression)?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(EvalError::MalformedExpression),
                }
            }
            Some(Token::Minus) => Ok(-self.nested(Self::factor)?),
            Some(_) | None => Err(EvalError::MalformedExpression),
        }
    }

    fn nested(&mut self, f: fn(&mut Self) -> Result<f64, EvalError>) -> Result<f64, EvalError> {
        if self.nesting >= MAX_NESTING {
            return Err(EvalError::MalformedExpression);
        }
        self.nesting += 1;
        let value = f(self);
        self.nesting -= 1;
        value
    }
}
