use thiserror::Error;

/// Errors reported by [`RingBuffer`](crate::RingBuffer).
///
/// Every failing operation leaves the buffer exactly as it was; there is no
/// partially applied mutation to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    /// `len` is exact when the input reports its length, otherwise it is
    /// the number of values seen before rejecting (`capacity + 1`).
    #[error("Too many initial values: got at least {len}, capacity is {capacity}")]
    TooManyValues { len: usize, capacity: usize },

    #[error("Index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RingBufferError>;
