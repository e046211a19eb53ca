//! Conversions between the sparse index view and the dense bitmap view.
//!
//! | From | To | Function |
//! |------|----|----------|
//! | raw index list | [`IndexArray`] | [`from_index_array`] |
//! | [`BitMapProducer`] | [`BitMapIndices`] | [`from_bit_map_producer`] |
//! | [`IndexProducer`] | [`BitMapArray`] | [`to_bit_map_array`] |
//!
//! Converting an index set to a bitmap wide enough to hold it and back
//! yields the same sorted, deduplicated positions.

use crate::bitmap::{mask, word_index, words_needed};
use crate::bitmap_producer::{BitMapArray, BitMapProducer};
use crate::error::{Error, Result};
use crate::index_producer::{BitMapIndices, IndexArray, IndexProducer};

/// Sort ascending and drop duplicates.
pub(crate) fn normalize(mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Build an [`IndexArray`] from an arbitrary list of indices.
///
/// The input may be unsorted and contain duplicates. Any negative element
/// fails the whole conversion with [`Error::InvalidIndex`].
///
/// ```
/// use bitidx::{convert, IndexProducer};
///
/// let producer = convert::from_index_array(&[5, 3, 5, 9, 3]).unwrap();
/// assert_eq!(producer.as_index_array(), vec![3, 5, 9]);
/// ```
pub fn from_index_array<T>(indices: &[T]) -> Result<IndexArray>
where
    T: Copy + Into<i64>,
{
    let mut positions = Vec::with_capacity(indices.len());
    for &raw in indices {
        let value: i64 = raw.into();
        let position = usize::try_from(value).map_err(|_| {
            log::debug!("rejecting index array: element {} is negative", value);
            Error::InvalidIndex(value)
        })?;
        positions.push(position);
    }

    let normalized = normalize(positions);
    log::trace!(
        "normalized {} indices to {} unique positions",
        indices.len(),
        normalized.len()
    );
    Ok(IndexArray::from_normalized(normalized))
}

/// View the set bits of `bit_maps` as an [`IndexProducer`].
///
/// Word `w` bit `o` becomes position `w * 64 + o`. Scanning happens when the
/// result is enumerated, not here.
pub fn from_bit_map_producer<P: BitMapProducer>(bit_maps: P) -> BitMapIndices<P> {
    BitMapIndices::new(bit_maps)
}

/// Pack the positions of `indices` into a bitmap of `bit_count` bits.
///
/// The result always has `words_needed(bit_count)` words. A position
/// `>= bit_count` fails with [`Error::IndexOutOfRange`].
pub fn to_bit_map_array<P>(indices: &P, bit_count: usize) -> Result<BitMapArray>
where
    P: IndexProducer + ?Sized,
{
    let mut words = vec![0u64; words_needed(bit_count)];
    let mut out_of_range = None;

    indices.for_each_index(|index| {
        if index >= bit_count {
            out_of_range = Some(index);
            return false;
        }
        words[word_index(index)] |= mask(index);
        true
    });

    if let Some(index) = out_of_range {
        log::debug!(
            "rejecting bitmap conversion: position {} does not fit in {} bits",
            index,
            bit_count
        );
        return Err(Error::IndexOutOfRange(index));
    }

    log::trace!("packed indices into {} words", words.len());
    Ok(BitMapArray::new(words))
}
