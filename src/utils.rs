//! Assorted helpers for input checks and token handling.

use crate::error::SolveError;
use crate::ops::Operation;

/// Reject `n == 0`; every strategy calls this before doing any work.
#[inline]
pub fn ensure_positive(n: u64) -> Result<u64, SolveError> {
    if n == 0 {
        Err(SolveError::NonPositive(0))
    } else {
        Ok(n)
    }
}

/// Convert a signed user-supplied value into a valid `n`.
pub fn positive_from_i64(raw: i64) -> Result<u64, SolveError> {
    match u64::try_from(raw) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SolveError::NonPositive(raw)),
    }
}

/// Render a sequence as space-separated tokens, e.g. `-1 /3 /3`.
pub fn format_sequence(operations: &[Operation]) -> String {
    operations
        .iter()
        .map(Operation::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse whitespace-separated tokens back into operations.
///
/// Returns the first unrecognised token on failure.
pub fn parse_sequence(text: &str) -> Result<Vec<Operation>, String> {
    text.split_whitespace()
        .map(|tok| tok.parse::<Operation>().map_err(|_| tok.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(ensure_positive(0), Err(SolveError::NonPositive(0)));
        assert_eq!(ensure_positive(1), Ok(1));
    }

    #[test]
    fn signed_input_conversion() {
        assert_eq!(positive_from_i64(10), Ok(10));
        assert_eq!(positive_from_i64(0), Err(SolveError::NonPositive(0)));
        assert_eq!(positive_from_i64(-5), Err(SolveError::NonPositive(-5)));
    }

    #[test]
    fn format_and_parse_tokens() {
        let ops = vec![Decrement, DivideBy3, DivideBy3];
        assert_eq!(format_sequence(&ops), "-1 /3 /3");
        assert_eq!(format_sequence(&[]), "");
        assert_eq!(parse_sequence("-1  /3\t/3"), Ok(ops));
        assert_eq!(parse_sequence(""), Ok(vec![]));
        assert_eq!(parse_sequence("-1 x2"), Err("x2".to_string()));
    }
}
