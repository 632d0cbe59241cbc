/// Reasons an expression cannot be evaluated.
///
/// All variants are recoverable: a caller scoring a submission treats any of
/// them as an invalid answer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum EvalError {
    /// The input was blank after removing whitespace.
    #[display("expression is empty")]
    EmptyExpression,
    /// The input contained a character other than digits, `.`, `+ - * /` and parentheses.
    #[display("expression contains invalid characters")]
    InvalidCharacters,
    /// The input does not follow the expression grammar, or nests
    /// parentheses and unary minus more than 256 levels deep.
    #[display("malformed expression")]
    MalformedExpression,
    /// A `/` had a right operand evaluating to exactly zero.
    #[display("division by zero")]
    DivisionByZero,
    /// The final value is not finite or does not fit in an `i64`.
    #[display("expression value is out of range")]
    ValueOutOfRange,
}
