//! ## Intro
//!
//! A growable sequence of `i64` built around a small buffer optimization.
//!
//! Every [`SequenceStore`] starts on a fixed inline buffer and only moves to a
//! separately allocated buffer once its element count would exceed the inline
//! capacity. Shrinking far enough moves the data back inline, so the capacity
//! never falls below the inline floor.
//!
//! Unlike [`Vec`], every operation is bounds checked and returns a [`Result`]:
//! nothing panics on a bad index, and a failed call (including a failed
//! allocation) leaves the store exactly as it was.
//!
//! ```
//! # use seqstore::{SequenceStore, Error};
//! let mut store: SequenceStore = SequenceStore::new();
//! assert_eq!(store.capacity(), 10);
//!
//! store.insert_many(0, &[10, 20, 30, 40, 50])?;
//! store.erase(1, 2)?;
//! assert_eq!(store, [10, 40, 50]);
//!
//! assert_eq!(store.set(3, 0), Err(Error::OutOfRange { index: 3, bound: 3 }));
//! assert_eq!(store.pop()?, 50);
//! # Ok::<(), seqstore::Error>(())
//! ```
//!
//! ## Storage
//!
//! | State | Buffer | Capacity |
//! |-------|--------|----------|
//! | `len <= N` | inline `[i64; N]` | `N` |
//! | grown past `N` | allocated | `capacity * 2 + additional` on each growth |
//! | `resize(n)`, `n > N` | allocated | exactly `n` |
//! | `resize(n)`, `n <= N`, `clear` | inline | `N` |
//!
//! The inline capacity is the const generic `N`, [`INLINE_CAPACITY`] by default.
//!
//! ## Optional features
//!
//! ### `std` (default)
//!
//! Enables [`SequenceStore::write_to`], which renders a store into any [`std::io::Write`].
//! Without it the crate needs only `core` and `alloc`.
//!
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod policy;
mod utils;

pub mod display;
pub mod error;
pub mod handle;
pub mod store;

#[cfg(feature = "std")]
mod std_io;

#[doc(inline)]
pub use buffer::StorageKind;
#[doc(inline)]
pub use display::{DisplayMode, Rendered};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use handle::StoreHandle;
#[doc(inline)]
pub use store::SequenceStore;

/// The element type of every store.
pub type Element = i64;

/// Inline slots of a [`SequenceStore`] when no capacity is named.
pub const INLINE_CAPACITY: usize = 10;

/// Value returned by [`SequenceStore::get_or_sentinel`] for out of range reads.
pub const SENTINEL: Element = Element::MAX;
