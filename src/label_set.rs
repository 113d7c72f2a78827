// src/label_set.rs
//! A growable bit set over `usize` labels, used to track label deficiencies.

/// A set of labels backed by `u64` words.
///
/// Grows on demand, so alphabets are not capped at the machine word size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    words: Vec<u64>,
    /// Number of set bits.
    len: usize,
}

impl LabelSet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates a new set with capacity for labels below `labels`.
    #[must_use]
    pub fn with_capacity(labels: usize) -> Self {
        let words = (labels + 63) / 64;
        Self {
            words: Vec::with_capacity(words),
            len: 0,
        }
    }

    /// Returns the number of labels in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no labels.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a label to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, label: usize) -> bool {
        let word_idx = label / 64;
        let mask = 1u64 << (label % 64);

        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let word = &mut self.words[word_idx];
        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Removes a label from the set. Returns `true` if it was present.
    pub fn remove(&mut self, label: usize) -> bool {
        let word_idx = label / 64;
        if word_idx >= self.words.len() {
            return false;
        }

        let mask = 1u64 << (label % 64);
        let word = &mut self.words[word_idx];
        if *word & mask != 0 {
            *word &= !mask;
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the set contains the label.
    #[must_use]
    pub fn contains(&self, label: usize) -> bool {
        let word_idx = label / 64;
        if word_idx >= self.words.len() {
            return false;
        }
        self.words[word_idx] & (1u64 << (label % 64)) != 0
    }

    /// Returns the smallest label in the set, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<usize> {
        for (idx, &word) in self.words.iter().enumerate() {
            if word != 0 {
                return Some(idx * 64 + word.trailing_zeros() as usize);
            }
        }
        None
    }

    /// Iterates over the labels in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: self.words.iter().enumerate(),
            current_word: 0,
            word_idx: 0,
        }
    }
}

impl FromIterator<usize> for LabelSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

pub struct Iter<'a> {
    words: std::iter::Enumerate<std::slice::Iter<'a, u64>>,
    current_word: u64,
    word_idx: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros();
                self.current_word &= self.current_word - 1; // clear lowest bit
                return Some(self.word_idx * 64 + trailing as usize);
            }

            match self.words.next() {
                Some((idx, &word)) => {
                    self.word_idx = idx;
                    self.current_word = word;
                }
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = LabelSet::new();
        assert!(set.is_empty());

        assert!(set.insert(1));
        assert!(set.insert(100));
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(100));
        assert!(!set.contains(2));

        assert!(!set.insert(1)); // Already present
        assert_eq!(set.len(), 2);

        assert!(set.remove(1));
        assert_eq!(set.len(), 1);
        assert!(!set.contains(1));
        assert!(!set.remove(1));
    }

    #[test]
    fn test_grows_past_word_boundary() {
        let mut set = LabelSet::new();
        set.insert(0);
        set.insert(63);
        set.insert(64);
        set.insert(200);

        assert_eq!(set.len(), 4);
        assert!(set.contains(63));
        assert!(set.contains(64));
        assert!(set.contains(200));
        assert!(!set.contains(199));
    }

    #[test]
    fn test_lowest_tracks_removals() {
        let mut set: LabelSet = [5, 2, 70].into_iter().collect();
        assert_eq!(set.lowest(), Some(2));

        set.remove(2);
        assert_eq!(set.lowest(), Some(5));

        set.remove(5);
        assert_eq!(set.lowest(), Some(70));

        set.remove(70);
        assert_eq!(set.lowest(), None);
    }

    #[test]
    fn test_iter_ascending() {
        let set: LabelSet = [128, 1, 64, 5].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 5, 64, 128]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut set = LabelSet::new();
        set.insert(3);
        assert!(!set.remove(1000));
        assert_eq!(set.len(), 1);
    }
}
