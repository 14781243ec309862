/// Safely converts an `i64` to `usize` if and only if it is non-negative and
/// fits.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or too large for `usize`.
///
/// ## Example
/// ```
/// use duocalc::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3, "negative!"), Ok(3));
/// assert!(i64_to_usize_checked(-1, "negative!").is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

