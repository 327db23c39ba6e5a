/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, plus the integer
/// helpers used by rational arithmetic.
///
/// All fallible functions return a `Result`, which is `Ok` if the conversion
/// is lossless and valid, or an error otherwise.
pub mod num;
