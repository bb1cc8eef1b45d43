//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! cell candidates.
//!
//! [DigitSet]: struct.DigitSet.html

use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// A set of Sudoku digits (1 to 9) that is implemented as a bit vector over a
/// single `u16`. Each digit is represented by one bit. This generally has
/// better performance than a `HashSet` and is `Copy`, which is convenient
/// since candidate sets are recomputed and discarded frequently.
///
/// Digits outside the range `[1, 9]` are never contained and are ignored by
/// [DigitSet::insert](#method.insert) and [DigitSet::remove](#method.remove).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DigitSet {
    content: u16
}

const ALL_DIGITS: u16 = 0b11_1111_1110;

fn mask(digit: usize) -> u16 {
    if (1..=9).contains(&digit) {
        1u16 << digit
    }
    else {
        0
    }
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn empty() -> DigitSet {
        DigitSet {
            content: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits from 1 to 9.
    pub fn all() -> DigitSet {
        DigitSet {
            content: ALL_DIGITS
        }
    }

    /// Creates a new `DigitSet` which contains only the given digit, or an
    /// empty set if the digit is outside the range `[1, 9]`.
    pub fn singleton(digit: usize) -> DigitSet {
        DigitSet {
            content: mask(digit)
        }
    }

    /// Indicates whether this set contains the given digit.
    pub fn contains(&self, digit: usize) -> bool {
        self.content & mask(digit) != 0
    }

    /// Inserts the given digit into this set, such that
    /// [DigitSet::contains](#method.contains) returns `true` for it
    /// afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.content & mask == 0 && mask != 0;
        self.content |= mask;
        changed
    }

    /// Removes the given digit from this set, such that
    /// [DigitSet::contains](#method.contains) returns `false` for it
    /// afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.content & mask != 0;
        self.content &= !mask;
        changed
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.content.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.content == 0
    }

    /// Returns the smallest digit contained in this set, or `None` if it is
    /// empty.
    pub fn min(&self) -> Option<usize> {
        if self.is_empty() {
            None
        }
        else {
            Some(self.content.trailing_zeros() as usize)
        }
    }

    /// Returns an iterator over the digits contained in this set in
    /// ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            content: self.content
        }
    }
}

/// An iterator over the digits contained in a [DigitSet] in ascending order.
///
/// [DigitSet]: struct.DigitSet.html
pub struct DigitSetIter {
    content: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.content == 0 {
            None
        }
        else {
            let digit = self.content.trailing_zeros() as usize;
            self.content &= self.content - 1;
            Some(digit)
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = usize;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

impl FromIterator<usize> for DigitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> DigitSet {
        let mut set = DigitSet::empty();

        for digit in iter {
            set.insert(digit);
        }

        set
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    /// Computes the union of this set and the given one.
    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content | rhs.content
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.content |= rhs.content;
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    /// Computes the intersection of this set and the given one.
    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content & rhs.content
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.content &= rhs.content;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    /// Computes the difference of this set and the given one, i.e. the set of
    /// all digits contained in this set but not in `rhs`.
    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content & !rhs.content
        }
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.content &= !rhs.content;
    }
}
