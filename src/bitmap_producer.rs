//! Producers of packed bitmap words.
//!
//! A [`BitMapProducer`] yields the words of a packed bit vector in chunk
//! order: word `i` covers bit positions `[i * 64, (i + 1) * 64)`.

use crate::bitmap::{bit_offset, words_needed};
use crate::error::{Error, Result};

/// A finite, ordered source of bitmap words with early termination.
pub trait BitMapProducer {
    /// Call `predicate` once per word, in chunk order.
    ///
    /// Returns `false` as soon as `predicate` does (no further words are
    /// visited), otherwise `true`. An empty producer returns `true`.
    fn for_each_bit_map<F>(&self, predicate: F) -> bool
    where
        F: FnMut(u64) -> bool;

    /// Collect every word.
    fn as_bit_map_array(&self) -> Vec<u64> {
        let mut words = Vec::new();
        self.for_each_bit_map(|word| {
            words.push(word);
            true
        });
        words
    }

    /// Walk this producer and `other` chunk by chunk.
    ///
    /// The shorter side is padded with zero words, so `predicate` sees every
    /// chunk position present in either producer. Returns `false` if
    /// `predicate` stops early.
    fn for_each_bit_map_pair<O, F>(&self, other: &O, mut predicate: F) -> bool
    where
        O: BitMapProducer + ?Sized,
        F: FnMut(u64, u64) -> bool,
    {
        let theirs = other.as_bit_map_array();
        let mut pos = 0;
        let completed = self.for_each_bit_map(|word| {
            let other_word = theirs.get(pos).copied().unwrap_or(0);
            pos += 1;
            predicate(word, other_word)
        });
        if !completed {
            return false;
        }
        theirs
            .get(pos..)
            .unwrap_or(&[])
            .iter()
            .all(|&other_word| predicate(0, other_word))
    }
}

impl<P: BitMapProducer + ?Sized> BitMapProducer for &P {
    fn for_each_bit_map<F>(&self, predicate: F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        (**self).for_each_bit_map(predicate)
    }
}

impl BitMapProducer for [u64] {
    fn for_each_bit_map<F>(&self, predicate: F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        self.iter().copied().all(predicate)
    }
}

/// Array-backed bitmap producer. Words are enumerated verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitMapArray {
    words: Vec<u64>,
}

impl BitMapArray {
    /// Wrap `words` without validation.
    pub fn new(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Wrap `words` as the storage for exactly `bit_count` bits.
    ///
    /// Fails with [`Error::MalformedSource`] if the word count does not match
    /// `bit_count` or if a padding bit past `bit_count` is set.
    pub fn with_bit_count(words: Vec<u64>, bit_count: usize) -> Result<Self> {
        let expected = words_needed(bit_count);
        if words.len() != expected {
            log::debug!(
                "rejecting bitmap: {} words supplied for {} bits",
                words.len(),
                bit_count
            );
            return Err(Error::MalformedSource(format!(
                "{} bits need {} words, got {}",
                bit_count,
                expected,
                words.len()
            )));
        }

        let used = bit_offset(bit_count);
        if used != 0 {
            let padding = !((1u64 << used) - 1);
            if let Some(&last) = words.last() {
                if last & padding != 0 {
                    log::debug!("rejecting bitmap: padding bits set past bit {}", bit_count);
                    return Err(Error::MalformedSource(format!(
                        "bits set past bit count {}",
                        bit_count
                    )));
                }
            }
        }

        Ok(Self { words })
    }

    /// The backing words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Consume the producer, returning its words.
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return true if there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<u64>> for BitMapArray {
    fn from(words: Vec<u64>) -> Self {
        Self::new(words)
    }
}

impl BitMapProducer for BitMapArray {
    fn for_each_bit_map<F>(&self, predicate: F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        self.words.as_slice().for_each_bit_map(predicate)
    }

    fn as_bit_map_array(&self) -> Vec<u64> {
        self.words.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_verbatim() {
        let producer = BitMapArray::new(vec![7, 0, u64::MAX]);
        assert_eq!(producer.as_bit_map_array(), vec![7, 0, u64::MAX]);

        let mut seen = Vec::new();
        assert!(producer.for_each_bit_map(|w| {
            seen.push(w);
            true
        }));
        assert_eq!(seen, vec![7, 0, u64::MAX]);
    }

    #[test]
    fn test_short_circuit() {
        let producer = BitMapArray::new(vec![1, 2, 3]);
        let mut calls = 0;
        assert!(!producer.for_each_bit_map(|_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_empty() {
        let producer = BitMapArray::default();
        assert!(producer.for_each_bit_map(|_| panic!("no words expected")));
        assert!(producer.as_bit_map_array().is_empty());
    }

    #[test]
    fn test_with_bit_count() {
        assert!(BitMapArray::with_bit_count(vec![0b111], 3).is_ok());
        assert!(BitMapArray::with_bit_count(vec![u64::MAX], 64).is_ok());
        assert!(BitMapArray::with_bit_count(Vec::new(), 0).is_ok());

        assert!(matches!(
            BitMapArray::with_bit_count(vec![0b1000], 3),
            Err(Error::MalformedSource(_))
        ));
        assert!(matches!(
            BitMapArray::with_bit_count(vec![0, 0], 64),
            Err(Error::MalformedSource(_))
        ));
        assert!(matches!(
            BitMapArray::with_bit_count(Vec::new(), 1),
            Err(Error::MalformedSource(_))
        ));
    }

    #[test]
    fn test_pair_pads_shorter_side() {
        let a = BitMapArray::new(vec![0b1100, 0b1]);
        let b = BitMapArray::new(vec![0b1010]);

        let mut pairs = Vec::new();
        assert!(a.for_each_bit_map_pair(&b, |x, y| {
            pairs.push((x, y));
            true
        }));
        assert_eq!(pairs, vec![(0b1100, 0b1010), (0b1, 0)]);

        pairs.clear();
        assert!(b.for_each_bit_map_pair(&a, |x, y| {
            pairs.push((x, y));
            true
        }));
        assert_eq!(pairs, vec![(0b1010, 0b1100), (0, 0b1)]);
    }

    #[test]
    fn test_pair_intersection_cardinality() {
        let a = BitMapArray::new(vec![0b1100, 0b1]);
        let b = BitMapArray::new(vec![0b1010, 0b1, 0b1111]);
        let mut shared = 0;
        a.for_each_bit_map_pair(&b, |x, y| {
            shared += (x & y).count_ones();
            true
        });
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_pair_short_circuit() {
        let a = BitMapArray::new(vec![1]);
        let b = BitMapArray::new(vec![1, 2, 3]);
        let mut calls = 0;
        assert!(!a.for_each_bit_map_pair(&b, |_, _| {
            calls += 1;
            calls < 2
        }));
        assert_eq!(calls, 2);
    }
}
