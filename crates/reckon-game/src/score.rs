/// Points for an exact answer.
pub const EXACT_POINTS: u32 = 100;

/// Returns the points earned by an answer `diff` away from the target.
///
/// | difference | points        |
/// |------------|---------------|
/// | 0          | 100           |
/// | 1 to 5     | `80 - 10 * d` |
/// | 6 to 10    | `50 - 3 * d`  |
/// | 11 to 20   | `20 - d`      |
/// | above 20   | 0             |
///
/// # Examples
///
/// ```
/// use reckon_game::score_for_difference;
///
/// assert_eq!(score_for_difference(0), 100);
/// assert_eq!(score_for_difference(3), 50);
/// assert_eq!(score_for_difference(21), 0);
/// ```
#[must_use]
pub fn score_for_difference(diff: u64) -> u32 {
    let diff = u32::try_from(diff).unwrap_or(u32::MAX);
    match diff {
        0 => EXACT_POINTS,
        1..=5 => 80 - 10 * diff,
        6..=10 => 50 - 3 * diff,
        11..=20 => 20 - diff,
        _ => 0,
    }
}
