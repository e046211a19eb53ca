//! Addressing arithmetic for packed `u64` bit vectors.
//!
//! Bit `b` of the vector lives in word `b / 64` at offset `b % 64`, with
//! offset 0 being the least-significant bit of the word.
//!
//! ```text
//! word 0                      word 1
//! [63 ........... 2  1  0]    [127 ......... 65 64]
//! ```
//!
//! The functions here hold no state. Growing storage is the caller's job:
//! [`set_bit`], [`clear_bit`] and [`is_bit_set`] refuse to touch a word that
//! is not already present.

use crate::error::{Error, Result};

/// Number of bits packed into one word.
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// `log2(BITS_PER_WORD)`.
pub const WORD_SHIFT: u32 = BITS_PER_WORD.trailing_zeros();

/// Mask selecting the in-word offset of a bit position.
pub const WORD_MASK: usize = BITS_PER_WORD - 1;

/// Word index holding `bit_position`.
#[inline]
pub const fn word_index(bit_position: usize) -> usize {
    bit_position >> WORD_SHIFT
}

/// Offset of `bit_position` inside its word.
#[inline]
pub const fn bit_offset(bit_position: usize) -> usize {
    bit_position & WORD_MASK
}

/// Single-bit mask for `bit_position` within its word.
#[inline]
pub const fn mask(bit_position: usize) -> u64 {
    1u64 << bit_offset(bit_position)
}

/// Number of words needed to hold `bit_count` bits. Zero bits need zero words.
#[inline]
pub const fn words_needed(bit_count: usize) -> usize {
    bit_count.div_ceil(BITS_PER_WORD)
}

#[inline]
fn checked_word(words_len: usize, bit_position: usize) -> Result<usize> {
    let idx = word_index(bit_position);
    if idx >= words_len {
        return Err(Error::IndexOutOfRange(bit_position));
    }
    Ok(idx)
}

/// Set `bit_position` in `words`.
pub fn set_bit(words: &mut [u64], bit_position: usize) -> Result<()> {
    let idx = checked_word(words.len(), bit_position)?;
    words[idx] |= mask(bit_position);
    Ok(())
}

/// Clear `bit_position` in `words`.
pub fn clear_bit(words: &mut [u64], bit_position: usize) -> Result<()> {
    let idx = checked_word(words.len(), bit_position)?;
    words[idx] &= !mask(bit_position);
    Ok(())
}

/// Return true if `bit_position` is set in `words`.
pub fn is_bit_set(words: &[u64], bit_position: usize) -> Result<bool> {
    let idx = checked_word(words.len(), bit_position)?;
    Ok(words[idx] & mask(bit_position) != 0)
}
