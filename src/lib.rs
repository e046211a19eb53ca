//! # Bit Index Producers
//!
//! *Two views of the same set bits.*
//!
//! ## Intuition First
//!
//! A Bloom filter is a row of light switches. Hashing a key tells you which
//! switches to flip; asking about a key tells you which switches to look at.
//! There are two natural ways to write down which switches are on:
//!
//! - a short list of switch numbers (`[3, 5, 9]`), handy when a hasher has
//!   just produced them;
//! - the whole row packed into 64-bit words (`[552]`), handy when the filter
//!   is stored, merged or counted.
//!
//! This crate moves between the two without losing anything and gives both
//! the same way of being read: a callback that can say "stop".
//!
//! ## The Contract
//!
//! An [`IndexProducer`] calls a predicate once per set position, in strictly
//! ascending order with no duplicates. A [`BitMapProducer`] does the same for
//! words, in chunk order. Both return `true` if every call returned `true`,
//! and `false` the moment one did not.
//!
//! ```text
//!  hasher ─► [5, 3, 5, 9, 3] ─► from_index_array ─► IndexArray [3, 5, 9]
//!                                                      │   ▲
//!                                     to_bit_map_array │   │ from_bit_map_producer
//!                                                      ▼   │
//!  stored filter ─────────────────────────────────► BitMapArray [552]
//! ```
//!
//! ## Layout
//!
//! Bit `b` lives in word `b / 64` at offset `b % 64`, bit 0 being the least
//! significant. See [`bitmap`].
//!
//! ## What Could Go Wrong
//!
//! 1. **Negative indices**: rejected with [`Error::InvalidIndex`], never dropped.
//! 2. **Short storage**: addressing a missing word fails with
//!    [`Error::IndexOutOfRange`] instead of growing the storage.
//! 3. **Padding bits**: a bitmap with bits set past its logical length is
//!    rejected by [`BitMapArray::with_bit_count`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitmap;
pub mod bitmap_producer;
pub mod convert;
pub mod error;
pub mod index_producer;

pub use bitmap_producer::{BitMapArray, BitMapProducer};
pub use convert::{from_bit_map_producer, from_index_array, to_bit_map_array};
pub use error::{Error, Result};
pub use index_producer::{BitMapIndices, EmptyIndices, IndexArray, IndexProducer};
