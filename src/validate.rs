//! Replay a claimed operation sequence against its starting value.

use crate::error::ValidationError;
use crate::ops::Operation;

/// Replay `operations` from `n` and check that the run ends exactly at 1.
///
/// Division steps are checked against the running value at the moment they
/// are applied. Once the value hits 0 no operation can bring it back to 1,
/// so a decrement of 0 is rejected immediately.
pub fn validate(n: u64, operations: &[Operation]) -> Result<(), ValidationError> {
    let mut value = n;
    for (step, &operation) in operations.iter().enumerate() {
        value = match operation.apply(value) {
            Some(next) => next,
            None if operation == Operation::Decrement => {
                return Err(ValidationError::Underflow { step })
            }
            None => {
                return Err(ValidationError::NotDivisible {
                    step,
                    value,
                    operation,
                })
            }
        };
    }
    if value == 1 {
        Ok(())
    } else {
        Err(ValidationError::WrongEndpoint { value })
    }
}

/// Boolean form of [`validate`].
#[inline]
pub fn is_valid(n: u64, operations: &[Operation]) -> bool {
    validate(n, operations).is_ok()
}
