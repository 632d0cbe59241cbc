use reckon_core::NumberPool;

/// Returns every maximal run of ASCII digits in `expression`, in order.
///
/// The scan runs on the raw string, so a decimal literal such as `1.5`
/// yields two runs.
///
/// # Examples
///
/// ```
/// let literals: Vec<_> = reckon_eval::numeric_literals("(25 + 3) × 10.5").collect();
/// assert_eq!(literals, ["25", "3", "10", "5"]);
/// ```
pub fn numeric_literals(expression: &str) -> impl Iterator<Item = &str> {
    expression
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// Returns `true` if every numeric literal of `expression` can be drawn from
/// `pool`, respecting multiplicity.
///
/// Each literal is matched greedily to the first unconsumed slot with the
/// same value. A literal too large to represent never matches. The check is
/// independent of whether the expression evaluates.
///
/// # Examples
///
/// ```
/// use reckon_core::NumberPool;
/// use reckon_eval::uses_only_available_numbers;
///
/// let pool = NumberPool::from([3, 3, 7]);
/// assert!(uses_only_available_numbers("3+3", &pool));
/// assert!(!uses_only_available_numbers("3+3+3", &pool));
/// ```
#[must_use]
pub fn uses_only_available_numbers(expression: &str, pool: &NumberPool) -> bool {
    let literals: Option<Vec<i64>> = numeric_literals(expression)
        .map(|run| run.parse().ok())
        .collect();
    literals.is_some_and(|literals| pool.covers(&literals))
}
