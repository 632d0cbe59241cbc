//! Binary combination steps.

use std::fmt::{self, Display};

/// An arithmetic operator applied to two pool numbers.
///
/// Operators display with the glyphs shown to players (`+ − × ÷`).
///
/// # Examples
///
/// ```
/// use reckon_core::Operator;
///
/// assert_eq!(Operator::Mul.to_string(), "×");
/// assert_eq!(Operator::Div.apply(12, 4), Some(3));
/// // Inexact division is never produced
/// assert_eq!(Operator::Div.apply(12, 5), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Operator {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction of the smaller operand from the larger.
    #[display("−")]
    Sub,
    /// Multiplication.
    #[display("×")]
    Mul,
    /// Exact integer division.
    #[display("÷")]
    Div,
}

impl Operator {
    /// All operators in candidate order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the ASCII symbol accepted by the expression evaluator.
    #[must_use]
    pub const fn ascii_symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Returns `None` on overflow, and for division when `rhs` is zero or does
    /// not divide `lhs` exactly.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => {
                if rhs != 0 && lhs.checked_rem(rhs)? == 0 {
                    lhs.checked_div(rhs)
                } else {
                    None
                }
            }
        }
    }
}

/// One binary combination step of a solution.
///
/// `operand1` is always the larger operand and `operand2` the smaller,
/// whatever order the numbers had in the pool. A step consumes both operands
/// and returns `result` to the pool.
///
/// # Examples
///
/// ```
/// use reckon_core::{Operation, Operator};
///
/// let op = Operation::new(3, 7, Operator::Sub, 4);
/// assert_eq!(op.operand1(), 7);
/// assert_eq!(op.operand2(), 3);
/// assert!(op.is_consistent());
/// assert_eq!(op.to_string(), "7 − 3 = 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    operand1: i64,
    operand2: i64,
    operator: Operator,
    result: i64,
}

impl Operation {
    /// Creates an operation, ordering the operands larger first.
    #[must_use]
    pub fn new(a: i64, b: i64, operator: Operator, result: i64) -> Self {
        Self {
            operand1: a.max(b),
            operand2: a.min(b),
            operator,
            result,
        }
    }

    /// Returns the larger operand.
    #[must_use]
    pub const fn operand1(&self) -> i64 {
        self.operand1
    }

    /// Returns the smaller operand.
    #[must_use]
    pub const fn operand2(&self) -> i64 {
        self.operand2
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the value this step adds to the pool.
    #[must_use]
    pub const fn result(&self) -> i64 {
        self.result
    }

    /// Returns `true` if `result` is the application of the operator to the
    /// operands.
    ///
    /// Division also accepts the reversed quotient, which only arises when
    /// the smaller operand is zero (`0 ÷ n = 0`).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.operand1 < self.operand2 {
            return false;
        }
        let forward = self.operator.apply(self.operand1, self.operand2);
        let consistent = forward == Some(self.result);
        if self.operator.is_div() {
            consistent || self.operator.apply(self.operand2, self.operand1) == Some(self.result)
        } else {
            consistent
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand1, self.operator, self.operand2, self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_operands() {
        let op = Operation::new(8, 50, Operator::Mul, 400);
        assert_eq!((op.operand1(), op.operand2()), (50, 8));
        let op = Operation::new(50, 8, Operator::Mul, 400);
        assert_eq!((op.operand1(), op.operand2()), (50, 8));
    }

    #[test]
    fn test_apply_division_requires_exact_quotient() {
        assert_eq!(Operator::Div.apply(100, 25), Some(4));
        assert_eq!(Operator::Div.apply(100, 0), None);
        assert_eq!(Operator::Div.apply(100, 30), None);
        assert_eq!(Operator::Div.apply(0, 7), Some(0));
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), None);
        assert_eq!(Operator::Add.apply(i64::MAX, 1), None);
        assert_eq!(Operator::Div.apply(i64::MIN, -1), None);
    }

    #[test]
    fn test_is_consistent() {
        assert!(Operation::new(25, 400, Operator::Add, 425).is_consistent());
        assert!(Operation::new(6, 6, Operator::Sub, 0).is_consistent());
        assert!(Operation::new(0, 5, Operator::Div, 0).is_consistent());
        assert!(!Operation::new(3, 4, Operator::Add, 8).is_consistent());
        assert!(!Operation::new(9, 2, Operator::Div, 4).is_consistent());
    }

    #[test]
    fn test_display_uses_player_glyphs() {
        let symbols: Vec<_> = Operator::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(symbols, ["+", "−", "×", "÷"]);
        assert_eq!(
            Operation::new(10, 100, Operator::Div, 10).to_string(),
            "100 ÷ 10 = 10"
        );
    }

    #[test]
    fn test_ascii_symbol() {
        let symbols: String = Operator::ALL.iter().map(|op| op.ascii_symbol()).collect();
        assert_eq!(symbols, "+-*/");
    }
}
