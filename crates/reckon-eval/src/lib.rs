//! Arithmetic expression evaluation for player submissions.
//!
//! A player answers a number puzzle by typing an expression such as
//! `(50 × 8) + 25 + 6 ÷ 3`. This crate turns that string into an integer
//! and, as an independent pass, checks that the expression only uses numbers
//! from the puzzle.
//!
//! # Pipeline
//!
//! 1. Whitespace is removed; a blank input is [`EvalError::EmptyExpression`].
//! 2. The glyphs `×`, `÷` and `−` are rewritten to `*`, `/` and `-`.
//! 3. Any character outside `0-9 . + - * / ( )` is
//!    [`EvalError::InvalidCharacters`].
//! 4. The string is tokenized and evaluated by recursive descent with the
//!    usual precedence, in floating point.
//! 5. The result is truncated toward zero.
//!
//! Legality ([`uses_only_available_numbers`]) is a separate check so that
//! evaluation failures and number misuse can be reported independently.
//!
//! # Examples
//!
//! ```
//! use reckon_core::NumberPool;
//! use reckon_eval::{EvalError, evaluate, evaluate_submission};
//!
//! assert_eq!(evaluate("2 + 3 × 4"), Ok(14));
//! assert_eq!(evaluate("7 / 2"), Ok(3));
//! assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
//!
//! let pool = NumberPool::from([3, 3, 7]);
//! let submission = evaluate_submission("3 + 3 + 3", &pool)?;
//! assert_eq!(submission.value, 9);
//! assert!(!submission.uses_only_available_numbers);
//! # Ok::<(), EvalError>(())
//! ```

use log::debug;
use reckon_core::{NumberPool, Operator};

pub use self::{error::*, legality::*};

mod error;
mod legality;
mod parser;
mod token;

/// The outcome of evaluating an expression.
pub type EvalOutcome = Result<i64, EvalError>;

/// Upper bound (exclusive) of `f64` values representable as `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// An evaluated expression together with its legality verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// The evaluated value, truncated toward zero.
    pub value: i64,
    /// Whether every literal was drawn from the puzzle's numbers.
    ///
    /// Callers must check this before trusting `value` for scoring.
    pub uses_only_available_numbers: bool,
}

/// Evaluates an arithmetic expression.
///
/// # Errors
///
/// Returns an [`EvalError`] describing why the expression has no value.
pub fn evaluate(expression: &str) -> EvalOutcome {
    let normalized = normalize(expression)?;
    let tokens = token::tokenize(&normalized)?;
    let value = parser::evaluate_tokens(&tokens)?;
    let result = truncate(value);
    debug!("evaluated {expression:?} to {result:?}");
    result
}

/// Evaluates `expression` and checks its literals against `pool`.
///
/// # Errors
///
/// Returns an [`EvalError`] if the expression cannot be evaluated. Using
/// unavailable numbers is not an error; it is reported through
/// [`Submission::uses_only_available_numbers`].
pub fn evaluate_submission(expression: &str, pool: &NumberPool) -> Result<Submission, EvalError> {
    let value = evaluate(expression)?;
    Ok(Submission {
        value,
        uses_only_available_numbers: uses_only_available_numbers(expression, pool),
    })
}

fn normalize(expression: &str) -> Result<String, EvalError> {
    let normalized: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => Operator::Mul.ascii_symbol(),
            '÷' => Operator::Div.ascii_symbol(),
            '−' => Operator::Sub.ascii_symbol(),
            c => c,
        })
        .collect();

    if normalized.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || "().".contains(c) || is_operator_symbol(c))
    {
        return Err(EvalError::InvalidCharacters);
    }
    Ok(normalized)
}

fn is_operator_symbol(c: char) -> bool {
    Operator::ALL.iter().any(|op| op.ascii_symbol() == c)
}

#[expect(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> EvalOutcome {
    let value = value.trunc();
    if !value.is_finite() || !(-I64_LIMIT..I64_LIMIT).contains(&value) {
        return Err(EvalError::ValueOutOfRange);
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
        assert_eq!(evaluate("\t\n"), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(evaluate("5+abc"), Err(EvalError::InvalidCharacters));
        assert_eq!(evaluate("2^3"), Err(EvalError::InvalidCharacters));
        assert_eq!(evaluate("٣+1"), Err(EvalError::InvalidCharacters));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5 ÷ (2 − 2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(evaluate("5+"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("(5"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("1..2"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_glyphs_are_normalized() {
        assert_eq!(evaluate("100 − 4 × 6 ÷ 3"), Ok(92));
        assert_eq!(normalize("8 × (3 − 1) ÷ 2").unwrap(), "8*(3-1)/2");
    }

    #[test]
    fn test_every_operator_symbol_is_accepted() {
        for op in Operator::ALL {
            let expression = format!("12{}4", op.ascii_symbol());
            assert!(evaluate(&expression).is_ok(), "{expression}");
            let glyphs = format!("12{op}4");
            assert_eq!(evaluate(&glyphs), evaluate(&expression), "{glyphs}");
        }
    }

    #[test]
    fn test_whitespace_inside_numbers_joins_digits() {
        assert_eq!(evaluate("1 2 + 3"), Ok(15));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(evaluate("7/2"), Ok(3));
        assert_eq!(evaluate("-7/2"), Ok(-3));
        assert_eq!(evaluate("0-7/2"), Ok(-3));
        assert_eq!(evaluate("1/3*3"), Ok(1));
        assert_eq!(evaluate("2.9"), Ok(2));
    }

    #[test]
    fn test_division_truncates_once_at_the_end() {
        // 7/2 stays 3.5 while evaluating, so doubling gives 7 rather than 6
        assert_eq!(evaluate("7/2*2"), Ok(7));
    }

    #[test]
    fn test_tiny_divisor_is_not_zero() {
        assert_eq!(evaluate("1/0.0000000000000001"), Ok(10_000_000_000_000_000));
        assert_eq!(evaluate("6/(0.1+0.2-0.3)"), Ok(108_086_391_056_891_904));
    }

    #[test]
    fn test_nesting_limit_is_malformed() {
        let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert_eq!(evaluate(&deep), Err(EvalError::MalformedExpression));
        let negated = format!("{}1", "-".repeat(300));
        assert_eq!(evaluate(&negated), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_value_out_of_range() {
        let huge = "9".repeat(400);
        assert_eq!(evaluate(&huge), Err(EvalError::ValueOutOfRange));
        assert_eq!(
            evaluate("99999999999*99999999999"),
            Err(EvalError::ValueOutOfRange)
        );
    }

    #[test]
    fn test_evaluate_submission() {
        let pool = NumberPool::from([3, 3, 7]);
        assert_eq!(
            evaluate_submission("3 + 3", &pool),
            Ok(Submission {
                value: 6,
                uses_only_available_numbers: true,
            })
        );
        assert_eq!(
            evaluate_submission("7 × 3 × 3 × 3", &pool),
            Ok(Submission {
                value: 189,
                uses_only_available_numbers: false,
            })
        );
        assert_eq!(
            evaluate_submission("3/(7-7)", &pool),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_known_puzzle_answer() {
        let pool = NumberPool::from([25, 50, 3, 6, 7, 8]);
        let submission = evaluate_submission("50 × 8 + 25 + 6 × 7 − 3 × 3", &pool).unwrap();
        assert_eq!(submission.value, 458);
        assert!(!submission.uses_only_available_numbers);

        let submission = evaluate_submission("(50 + 7) × 8", &pool).unwrap();
        assert_eq!(submission.value, 456);
        assert!(submission.uses_only_available_numbers);
    }

    fn op_strategy() -> impl Strategy<Value = char> {
        prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
    }

    /// Evaluates `numbers` joined by `ops` with standard precedence.
    fn reference_value(numbers: &[i32], ops: &[char]) -> f64 {
        let mut terms = vec![f64::from(numbers[0])];
        let mut signs = vec![1.0];
        for (&op, &n) in ops.iter().zip(&numbers[1..]) {
            let n = f64::from(n);
            match op {
                '*' => *terms.last_mut().unwrap() *= n,
                '/' => *terms.last_mut().unwrap() /= n,
                '+' => {
                    terms.push(n);
                    signs.push(1.0);
                }
                '-' => {
                    terms.push(n);
                    signs.push(-1.0);
                }
                _ => unreachable!(),
            }
        }
        terms.iter().zip(&signs).map(|(t, s)| t * s).sum()
    }

    proptest! {
        #[test]
        fn prop_matches_reference_arithmetic(
            numbers in proptest::collection::vec(1i32..=100, 1..6),
            ops in proptest::collection::vec(op_strategy(), 5),
        ) {
            let ops = &ops[..numbers.len() - 1];
            let mut expression = numbers[0].to_string();
            for (op, n) in ops.iter().zip(&numbers[1..]) {
                expression.push(*op);
                expression.push_str(&n.to_string());
            }

            #[expect(clippy::cast_possible_truncation)]
            let expected = reference_value(&numbers, ops).trunc() as i64;
            let pool: NumberPool = numbers.iter().map(|&n| i64::from(n)).collect();
            let submission = evaluate_submission(&expression, &pool).unwrap();
            prop_assert_eq!(submission.value, expected);
            prop_assert!(submission.uses_only_available_numbers);
        }
    }
}
