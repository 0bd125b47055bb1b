use thiserror::Error;

/// Returned by the checked accessors [`at`](crate::SimpleVector::at) and
/// [`at_mut`](crate::SimpleVector::at_mut) when `index >= len`.
///
/// # Examples
///
/// ```
/// # use simplevec::{simplevec, OutOfRange};
/// let vec = simplevec![1, 2, 3];
///
/// let err = vec.at(3).unwrap_err();
/// assert_eq!(err, OutOfRange { index: 3, len: 3 });
/// assert_eq!(err.to_string(), "index 3 is out of range for length 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("index {index} is out of range for length {len}")]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The length of the vector at the time of the request.
    pub len: usize,
}
