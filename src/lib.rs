//! Ringfence - fixed-capacity ring buffers
//!
//! A [`RingBuffer<T, N>`] keeps at most `N` elements inline, in FIFO order.
//! Once full, every push discards the oldest element instead of growing.
//!
//! - **Construction**: empty, filled from one value, or prefilled from a sequence
//! - **Mutation**: `push_back` (overwrite-on-full), `pop_back`, `clear`
//! - **Access**: logical indexing where 0 is always the oldest element
//!
//! # Quick Start
//!
//! ```
//! use ringfence::RingBuffer;
//!
//! let mut window = RingBuffer::<i32, 5>::from_values([1, 2, 3])?;
//! window.push_back(99);
//! window.push_back(100);
//! assert_eq!(window.len(), 5);
//! assert_eq!(window[3], 99);
//! assert!(window.at(5).is_err());
//! # Ok::<(), ringfence::RingBufferError>(())
//! ```
//!
//! A capacity of zero does not compile:
//!
//! ```compile_fail
//! let _ = ringfence::RingBuffer::<u8, 0>::new();
//! ```

pub mod errors;
pub mod ring_buffer;
pub mod wrapping_index;

pub use errors::{Result, RingBufferError};
pub use ring_buffer::RingBuffer;
pub use wrapping_index::WrappingIndex;
