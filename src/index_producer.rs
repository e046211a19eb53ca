//! Producers of set-bit positions.
//!
//! Every [`IndexProducer`] enumerates its positions in strictly ascending
//! order with no duplicates. Consumers rely on this to merge producers or
//! rebuild bitmaps without sorting.
//!
//! Variants:
//! - [`IndexArray`]: a normalized array of positions.
//! - [`EmptyIndices`]: produces nothing.
//! - [`BitMapIndices`]: scans the words of a [`BitMapProducer`] lazily.

use crate::bitmap::BITS_PER_WORD;
use crate::bitmap_producer::BitMapProducer;

/// A finite, ascending, duplicate-free source of bit positions.
pub trait IndexProducer {
    /// Call `predicate` once per position, in ascending order.
    ///
    /// Returns `false` as soon as `predicate` does (no further positions are
    /// visited), otherwise `true`. A producer with no positions returns `true`
    /// without calling `predicate`.
    fn for_each_index<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize) -> bool;

    /// Collect every position.
    fn as_index_array(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        self.for_each_index(|index| {
            indices.push(index);
            true
        });
        indices
    }

    /// Number of positions produced.
    fn count(&self) -> usize {
        let mut n = 0;
        self.for_each_index(|_| {
            n += 1;
            true
        });
        n
    }

    /// Return true if `index` is produced.
    ///
    /// Enumeration stops at the first position `>= index`.
    fn contains(&self, index: usize) -> bool {
        let mut found = false;
        self.for_each_index(|i| {
            found = i == index;
            i < index
        });
        found
    }
}

impl<P: IndexProducer + ?Sized> IndexProducer for &P {
    fn for_each_index<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        (**self).for_each_index(predicate)
    }
}

/// Produces no positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyIndices;

impl IndexProducer for EmptyIndices {
    fn for_each_index<F>(&self, _predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        true
    }
}

/// Array-backed producer over sorted, deduplicated positions.
///
/// Built through [`crate::convert::from_index_array`] or by collecting an
/// iterator of positions; both normalize the input once, up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexArray {
    indices: Vec<usize>,
}

impl IndexArray {
    /// Wrap positions that are already sorted and unique.
    pub(crate) fn from_normalized(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// The normalized positions.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the producer, returning its positions.
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Return true if there are no positions.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromIterator<usize> for IndexArray {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_normalized(crate::convert::normalize(iter.into_iter().collect()))
    }
}

impl IndexProducer for IndexArray {
    fn for_each_index<F>(&self, predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.indices.iter().copied().all(predicate)
    }

    fn as_index_array(&self) -> Vec<usize> {
        self.indices.clone()
    }

    fn count(&self) -> usize {
        self.indices.len()
    }

    fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}

/// Positions of the set bits in a [`BitMapProducer`].
///
/// Nothing is materialized: each enumeration rescans the words, and stops
/// pulling words as soon as the predicate returns `false`.
#[derive(Debug, Clone)]
pub struct BitMapIndices<P> {
    bit_maps: P,
}

impl<P: BitMapProducer> BitMapIndices<P> {
    pub(crate) fn new(bit_maps: P) -> Self {
        Self { bit_maps }
    }

    /// The underlying bitmap producer.
    pub fn bit_maps(&self) -> &P {
        &self.bit_maps
    }

    /// Consume the producer, returning the underlying bitmap producer.
    pub fn into_inner(self) -> P {
        self.bit_maps
    }
}

impl<P: BitMapProducer> IndexProducer for BitMapIndices<P> {
    fn for_each_index<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        let mut base = 0usize;
        self.bit_maps.for_each_bit_map(|word| {
            let mut remaining = word;
            while remaining != 0 {
                let offset = remaining.trailing_zeros() as usize;
                if !predicate(base + offset) {
                    return false;
                }
                // clear lowest set bit
                remaining &= remaining - 1;
            }
            base += BITS_PER_WORD;
            true
        })
    }

    fn count(&self) -> usize {
        let mut n = 0;
        self.bit_maps.for_each_bit_map(|word| {
            n += word.count_ones() as usize;
            true
        });
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap_producer::BitMapArray;

    #[test]
    fn test_empty_laws() {
        let mut calls = 0;
        assert!(EmptyIndices.for_each_index(|_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 0);
        assert!(EmptyIndices.as_index_array().is_empty());
        assert_eq!(EmptyIndices.count(), 0);
        assert!(!EmptyIndices.contains(0));
    }

    #[test]
    fn test_index_array_collect_normalizes() {
        let producer: IndexArray = vec![9, 1, 9, 4, 1].into_iter().collect();
        assert_eq!(producer.indices(), &[1, 4, 9]);
        assert_eq!(producer.count(), 3);
        assert!(producer.contains(4));
        assert!(!producer.contains(5));
    }

    #[test]
    fn test_index_array_short_circuit() {
        let producer: IndexArray = (0..10).collect();
        let mut calls = 0;
        assert!(!producer.for_each_index(|_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_bit_map_indices_scan() {
        let producer = BitMapIndices::new(BitMapArray::new(vec![0b1001, 0, 1 << 63]));
        assert_eq!(producer.as_index_array(), vec![0, 3, 191]);
        assert_eq!(producer.count(), 3);
        assert!(producer.contains(191));
        assert!(!producer.contains(64));
    }

    #[test]
    fn test_bit_map_indices_stops_mid_word() {
        let producer = BitMapIndices::new(BitMapArray::new(vec![u64::MAX, u64::MAX]));
        let mut seen = Vec::new();
        assert!(!producer.for_each_index(|i| {
            seen.push(i);
            i < 2
        }));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_default_contains_stops_early() {
        struct Counting<'a>(&'a std::cell::Cell<usize>);
        impl IndexProducer for Counting<'_> {
            fn for_each_index<F>(&self, mut predicate: F) -> bool
            where
                F: FnMut(usize) -> bool,
            {
                (0..100).all(|i| {
                    self.0.set(self.0.get() + 1);
                    predicate(i * 2)
                })
            }
        }

        let visited = std::cell::Cell::new(0);
        let producer = Counting(&visited);
        assert!(!producer.contains(7));
        assert_eq!(visited.get(), 5);
        visited.set(0);
        assert!(producer.contains(8));
        assert_eq!(visited.get(), 5);
    }
}
