//! Modular counter used to address ring buffer slots.
//!
//! A `WrappingIndex<N>` always holds a value in `[0, N)`. Construction,
//! assignment, stepping and offsetting all reduce modulo `N`, so no code path
//! can leave the counter out of range.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrappingIndex<const N: usize> {
    value: usize,
}

impl<const N: usize> WrappingIndex<N> {
    const NONZERO_MODULUS: () = assert!(N > 0, "WrappingIndex modulus must be non-zero");

    /// Largest value the counter can hold.
    pub const MAX: usize = N - 1;

    /// Create an index from an arbitrary integer, reduced modulo `N`.
    #[inline]
    pub const fn new(value: usize) -> Self {
        let () = Self::NONZERO_MODULUS;
        Self { value: value % N }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.value
    }

    /// Assign an arbitrary integer, reduced modulo `N`.
    #[inline]
    pub fn set(&mut self, value: usize) {
        self.value = value % N;
    }

    /// Step forward; `MAX` wraps to 0.
    #[inline]
    pub fn increment(&mut self) {
        if self.value == Self::MAX {
            self.value = 0;
        } else {
            self.value += 1;
        }
    }

    /// Step backward; 0 wraps to `MAX`.
    #[inline]
    pub fn decrement(&mut self) {
        if self.value == 0 {
            self.value = Self::MAX;
        } else {
            self.value -= 1;
        }
    }

    /// `(self + delta) mod N` without modifying `self`.
    #[inline]
    pub const fn offset(self, delta: usize) -> usize {
        // value + delta may overflow usize; compare against the room left instead
        let delta = delta % N;
        let room = N - self.value;
        if delta < room {
            self.value + delta
        } else {
            delta - room
        }
    }
}

impl<const N: usize> Default for WrappingIndex<N> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const N: usize> From<WrappingIndex<N>> for usize {
    fn from(index: WrappingIndex<N>) -> usize {
        index.value
    }
}

impl<const N: usize> fmt::Display for WrappingIndex<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
