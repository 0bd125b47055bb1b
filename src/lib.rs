//! ## Intro
//!
//! A growable array written from first principles over a manually managed
//! heap block, instead of wrapping [`Vec`].
//!
//! The crate has two layers:
//!
//! - [`ArrayPtr`] exclusively owns one contiguous block of `T`. It can be
//!   moved, swapped or released, never copied, and frees the block on drop.
//! - [`SimpleVector`] tracks how many slots of its `ArrayPtr` are live and
//!   implements the container on top of it.
//!
//! ```
//! # use simplevec::{SimpleVector, simplevec};
//! let mut vec: SimpleVector<i32> = SimpleVector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.insert(1, 9);
//! assert_eq!(vec, [1, 9, 2, 3]);
//!
//! assert_eq!(vec.at(1), Ok(&9));
//! assert!(vec.at(4).is_err());
//! ```
//!
//! ## Growth
//!
//! Appending to a full vector at least doubles its capacity
//! (`max(1, 2 * capacity)`), so `n` appends cost O(n) element moves in total.
//! [`reserve`](SimpleVector::reserve) grows to exactly the requested
//! capacity because the caller states an exact need.
//!
//! Growth always constructs the complete new block before touching the old
//! one. Every slot of a block is constructed, which is why the allocating
//! operations require `T: Default`.
//!
//! ## Access tiers
//!
//! | Access | Out of range |
//! |--------|--------------|
//! | [`at`](SimpleVector::at) / [`at_mut`](SimpleVector::at_mut) | [`OutOfRange`] error |
//! | `vec[i]` | panic |
//! | [`get_unchecked`](SimpleVector::get_unchecked) | undefined behavior (`unsafe`) |
//!
//! ## Positions
//!
//! `insert` and `erase` take indices. Raw pointer positions are available
//! through [`as_ptr_range`](SimpleVector::as_ptr_range); any reallocating
//! call invalidates them.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `std`
//!
//! Enabled by default. Implements [`std::io::Write`] for `SimpleVector<u8>`.
//!
//! ### `serde`
//!
//! When this optional dependency is enabled,
//! [`SimpleVector`] implements the [`serde::Serialize`] and [`serde::Deserialize`] traits.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;

mod utils;

pub mod array_ptr;
#[doc(inline)]
pub use array_ptr::ArrayPtr;

mod error;
pub use error::OutOfRange;

pub mod simple_vector;
#[doc(inline)]
pub use simple_vector::SimpleVector;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;
