//! Lazy enumeration of every string over an alphabet within a length range.
//!
//! Strings come out shortest first. Within one length the candidates follow
//! the Cartesian-product order of the alphabet: the cursor is a mixed-radix
//! odometer whose rightmost digit advances fastest.

use std::iter::FusedIterator;

use num_bigint::BigUint;

use passio_core::{Alphabet, LengthRange};

use crate::counter::count_combinations;

/// Position of a [`SequenceGenerator`]: the length tier being enumerated and
/// one alphabet index per character of the next candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    length: usize,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Cursor {
    /// Cursor pointing at the first candidate of `range`.
    pub fn start(range: LengthRange) -> Self {
        Self {
            length: range.min(),
            digits: vec![0; range.min()],
            exhausted: false,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn advance(&mut self, radix: usize, max_len: usize) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }

        // Every digit wrapped around: this tier is done.
        if self.length == max_len {
            self.exhausted = true;
        } else {
            self.length += 1;
            self.digits.clear();
            self.digits.resize(self.length, 0);
        }
    }
}

/// Deterministic producer of candidate strings.
///
/// Inputs are validated by construction of [`Alphabet`] and [`LengthRange`],
/// so building a generator cannot fail.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    alphabet: Alphabet,
    range: LengthRange,
    cursor: Cursor,
}

impl SequenceGenerator {
    pub fn new(alphabet: Alphabet, range: LengthRange) -> Self {
        let cursor = Cursor::start(range);
        Self {
            alphabet,
            range,
            cursor,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn range(&self) -> LengthRange {
        self.range
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Total number of strings a fresh generator yields.
    pub fn total(&self) -> BigUint {
        count_combinations(self.alphabet.len(), self.range)
    }

    /// Rewind to the first candidate.
    pub fn restart(&mut self) {
        self.cursor = Cursor::start(self.range);
    }

    /// Write the next candidate into `buf`, replacing its contents.
    ///
    /// Returns `false` once the sequence is exhausted; `buf` is left untouched
    /// in that case.
    pub fn next_into(&mut self, buf: &mut String) -> bool {
        if self.cursor.exhausted {
            return false;
        }

        let symbols = self.alphabet.symbols();
        buf.clear();
        buf.extend(self.cursor.digits.iter().map(|&digit| symbols[digit]));

        self.cursor.advance(symbols.len(), self.range.max());
        true
    }

    /// Produce the next candidate, or `None` at the end of the sequence.
    pub fn try_next(&mut self) -> Option<String> {
        let mut buf = String::with_capacity(self.cursor.length);
        self.next_into(&mut buf).then_some(buf)
    }
}

impl Iterator for SequenceGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next()
    }
}

impl FusedIterator for SequenceGenerator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(charset: &str, min: i64, max: i64) -> SequenceGenerator {
        SequenceGenerator::new(
            Alphabet::new(charset).expect("valid alphabet"),
            LengthRange::new(min, max).expect("valid range"),
        )
    }

    #[test]
    fn cursor_starts_at_first_candidate() {
        let generator = generator("abc", 2, 3);
        let cursor = generator.cursor();
        assert_eq!(cursor.length(), 2);
        assert_eq!(cursor.digits(), &[0, 0]);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn cursor_carries_into_next_tier() {
        let mut generator = generator("ab", 1, 2);
        assert_eq!(generator.try_next().as_deref(), Some("a"));
        assert_eq!(generator.try_next().as_deref(), Some("b"));
        assert_eq!(generator.cursor().length(), 2);
        assert_eq!(generator.cursor().digits(), &[0, 0]);
    }

    #[test]
    fn exhausted_generator_keeps_returning_none() {
        let mut generator = generator("x", 1, 1);
        assert_eq!(generator.try_next().as_deref(), Some("x"));
        assert!(generator.cursor().is_exhausted());
        assert_eq!(generator.try_next(), None);
        assert_eq!(generator.try_next(), None);
    }

    #[test]
    fn next_into_leaves_buffer_alone_at_end() {
        let mut generator = generator("x", 1, 1);
        let mut buf = String::new();
        assert!(generator.next_into(&mut buf));
        assert!(!generator.next_into(&mut buf));
        assert_eq!(buf, "x");
    }

    #[test]
    fn restart_rewinds_cursor() {
        let mut generator = generator("01", 2, 2);
        let first: Vec<String> = generator.by_ref().collect();
        generator.restart();
        let second: Vec<String> = generator.collect();
        assert_eq!(first, vec!["00", "01", "10", "11"]);
        assert_eq!(first, second);
    }
}
