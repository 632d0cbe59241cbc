use crate::EvalError;

/// A lexical unit of a normalized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Splits a normalized expression into tokens.
///
/// The input must already be free of whitespace and restricted to the
/// accepted character set. Contiguous runs of digits and decimal points form
/// one number token.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() || c == '.' {
            let end = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            let value = run
                .parse::<f64>()
                .map_err(|_| EvalError::MalformedExpression)?;
            tokens.push(Token::Number(value));
            rest = tail;
            continue;
        }

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(EvalError::InvalidCharacters),
        };
        tokens.push(token);
        rest = &rest[c.len_utf8()..];
    }

    Ok(tokens)
}
