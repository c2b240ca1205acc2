//! Fixed-capacity ring buffer with overwrite-on-full semantics.
//!
//! Storage is an inline array of `N` slots addressed through a wrapping
//! start offset and an element count. Logical index 0 is always the oldest
//! live element; pushing into a full buffer slides the window forward and
//! discards the oldest element.
//!
//! Indexed access is bounds-checked against the live element count, not the
//! capacity. `at`/`at_mut` return [`RingBufferError::IndexOutOfRange`],
//! `get`/`get_mut` return `None`, and `buffer[i]` panics like slice indexing.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::errors::{Result, RingBufferError};
use crate::wrapping_index::WrappingIndex;

/// Position of the live window inside the storage array.
///
/// `first` and `count` only change together through buffer methods, so the
/// logical-to-physical mapping and the fullness check always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor<const N: usize> {
    first: WrappingIndex<N>,
    count: usize,
}

impl<const N: usize> Cursor<N> {
    /// Physical slot of logical index `index`, if it is live.
    #[inline]
    fn slot(&self, index: usize) -> Option<usize> {
        (index < self.count).then(|| self.first.offset(index))
    }
}

/// A circular buffer holding at most `N` elements of `T`.
///
/// `T` needs no `Default`; unused slots are simply empty.
///
/// ```
/// use ringfence::RingBuffer;
///
/// let mut history: RingBuffer<u32, 3> = RingBuffer::new();
/// for sample in [1, 2, 3, 99] {
///     history.push_back(sample);
/// }
/// assert_eq!(history.len(), 3);
/// assert_eq!(history[0], 2);
/// assert_eq!(history[2], 99);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T, const N: usize> {
    storage: [Option<T>; N],
    cursor: Cursor<N>,
}

impl<T, const N: usize> RingBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "RingBuffer capacity must be non-zero");

    /// Create an empty buffer. The first push lands in slot 0.
    pub fn new() -> Self {
        let () = Self::NONZERO_CAPACITY;
        Self {
            storage: std::array::from_fn(|_| None),
            cursor: Cursor::default(),
        }
    }

    /// Create a full buffer with every slot set to `value`.
    ///
    /// The next push overwrites slot 0.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        let () = Self::NONZERO_CAPACITY;
        Self {
            storage: std::array::from_fn(|_| Some(value.clone())),
            cursor: Cursor {
                first: WrappingIndex::new(0),
                count: N,
            },
        }
    }

    /// Create a buffer prefilled in order from `values`.
    ///
    /// With fewer than `N` values the buffer is partially filled and the next
    /// push goes right after the last prefilled value. More than `N` values
    /// is rejected with [`RingBufferError::TooManyValues`] as soon as value
    /// `N + 1` arrives; the rest of the input is not consumed, so unbounded
    /// iterators are rejected too.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut buffer = Self::new();
        let mut values = values.into_iter();

        while buffer.cursor.count < N {
            match values.next() {
                Some(value) => {
                    buffer.storage[buffer.cursor.count] = Some(value);
                    buffer.cursor.count += 1;
                }
                None => return Ok(buffer),
            }
        }

        if values.next().is_some() {
            let seen = N + 1;
            let len = match values.size_hint() {
                (_, Some(remaining)) => seen.saturating_add(remaining),
                (_, None) => seen,
            };
            return Err(too_many_values(len, N));
        }
        Ok(buffer)
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.cursor.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cursor.count == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.cursor.count == N
    }

    /// Append `value` as the newest element.
    ///
    /// When the buffer is full the oldest element is overwritten and returned;
    /// it is no longer reachable through the buffer. Otherwise returns `None`.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        let slot = self.cursor.first.offset(self.cursor.count);
        if self.is_full() {
            let evicted = self.storage[slot].replace(value);
            self.cursor.first.increment();
            trace!(
                slot,
                first = self.cursor.first.get(),
                "Ring buffer full, overwrote oldest element"
            );
            evicted
        } else {
            self.storage[slot] = Some(value);
            self.cursor.count += 1;
            None
        }
    }

    /// Remove and return the newest element. No-op on an empty buffer.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            trace!("pop_back on empty ring buffer");
            return None;
        }
        self.cursor.count -= 1;
        let slot = self.cursor.first.offset(self.cursor.count);
        self.storage[slot].take()
    }

    /// Drop the live window. Slot contents are left in place until
    /// overwritten by later pushes, so values owning heap memory or handles
    /// stay alive until then; `pop_back` until empty releases them instead.
    pub fn clear(&mut self) {
        self.cursor = Cursor::default();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.cursor
            .slot(index)
            .and_then(|slot| self.storage[slot].as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.cursor
            .slot(index)
            .and_then(|slot| self.storage[slot].as_mut())
    }

    /// Bounds-checked access to logical index `index` (0 is the oldest).
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.get(index).ok_or_else(|| out_of_range(index, len))
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.get_mut(index).ok_or_else(|| out_of_range(index, len))
    }

    /// Oldest live element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Newest live element.
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len().checked_sub(1).and_then(|last| self.get_mut(last))
    }
}

fn too_many_values(len: usize, capacity: usize) -> RingBufferError {
    debug!(len, capacity, "Rejected ring buffer prefill");
    RingBufferError::TooManyValues { len, capacity }
}

fn out_of_range(index: usize, len: usize) -> RingBufferError {
    debug!(index, len, "Ring buffer index out of range");
    RingBufferError::IndexOutOfRange { index, len }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", RingBufferError::IndexOutOfRange { index, len }),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", RingBufferError::IndexOutOfRange { index, len }),
        }
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for RingBuffer<T, N> {
    type Error = RingBufferError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        if values.len() > N {
            return Err(too_many_values(values.len(), N));
        }
        Self::from_values(values)
    }
}

impl<T, const N: usize, const K: usize> TryFrom<[T; K]> for RingBuffer<T, N> {
    type Error = RingBufferError;

    fn try_from(values: [T; K]) -> Result<Self> {
        if K > N {
            return Err(too_many_values(K, N));
        }
        Self::from_values(values)
    }
}

/// Equal when both buffers hold the same live elements in the same logical
/// order, regardless of where the window sits in storage.
impl<T: PartialEq, const N: usize> PartialEq for RingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self.get(i) == other.get(i))
    }
}

impl<T: Eq, const N: usize> Eq for RingBuffer<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len()).filter_map(|i| self.get(i)))
            .finish()
    }
}
