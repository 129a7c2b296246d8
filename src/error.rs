use core::fmt::{Display, Formatter};

/// The error returned by checked index operations ([`crate::Array::at`],
/// [`crate::Array::insert`], [`crate::Array::remove`], ...).
///
/// Carries the rejected index and the container length at the time of the
/// call, so the failure reads back in full:
///
/// ```
/// use dskit::Array;
/// let a = Array::from([1, 2, 3]);
/// let err = a.at(5).unwrap_err();
/// assert_eq!(err.index, 5);
/// assert_eq!(err.len, 3);
/// assert_eq!(err.to_string(), "index 5 out of range for length 3");
/// ```
///
/// A rejected operation never touches the container; it is left exactly as
/// it was before the call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutOfRange {
    /// The index the caller asked for.
    pub index: usize,
    /// The container length at the time of the call.
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl core::error::Error for OutOfRange {}
