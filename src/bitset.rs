//! Bit set of minterm values.
//!
//! Used by the reducer to track which minterms the chosen implicants
//! already cover. A minterm over `n` variables is below `2^n`, so the set
//! is sized once from the alphabet width.

/// A set of minterms backed by a vector of u64 words.
///
/// Bit `m` is set iff minterm `m` is in the set. The set grows on demand
/// when inserting beyond the current capacity.
#[derive(Debug, Clone, Default)]
pub struct MintermSet {
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl MintermSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set able to hold every minterm over `width` variables.
    pub fn for_width(width: usize) -> Self {
        let num_words = (1usize << width).div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            count: 0,
        }
    }

    #[inline]
    fn word_and_bit(minterm: u32) -> (usize, usize) {
        let index = minterm as usize;
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, minterm: u32) -> bool {
        let (word, bit) = Self::word_and_bit(minterm);
        self.words.get(word).is_some_and(|w| w & (1u64 << bit) != 0)
    }

    /// Adds a minterm. Returns true if it was not already present.
    pub fn insert(&mut self, minterm: u32) -> bool {
        let (word, bit) = Self::word_and_bit(minterm);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }

        let mask = 1u64 << bit;
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.count += 1;
        true
    }
}

impl Extend<u32> for MintermSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for m in iter {
            self.insert(m);
        }
    }
}
