// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Sequence Cursor
//!
//! One position in the Fibonacci sequence, packaged as a `Copy` value type.
//! A cursor carries its position index together with the two most recent
//! sequence values, which is exactly the state needed to step one position
//! forward or backward in O(1) without recomputing from the start.
//!
//! ## Highlights
//!
//! - Total operations: dereference and stepping never fail; stepping
//!   backward at the start position is a no-op rather than an error.
//! - Index-only identity: equality, ordering, and hashing use the position
//!   index alone, so cursors built along different paths compare correctly.
//! - Wrapping arithmetic: values wrap at the boundary of `T`, and backward
//!   stepping inverts forward stepping exactly, including across a wrap.

use crate::seq::numeric::FibNumeric;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A cursor over the Fibonacci sequence: a position index plus the two most
/// recent sequence values.
///
/// The carried values follow the offset convention `fib(0) = 1`, with
/// `fib(-1) = 0` folded into the start state, so the first value the
/// sequence produces is 1. For every reachable cursor,
/// `value() == fib(index)` and the hidden companion value is
/// `fib(index - 1)`.
///
/// Identity and ordering are defined by the index alone: two cursors at the
/// same position compare equal regardless of how they were built, which
/// makes it safe to compare a forward-stepped cursor against one stepped
/// backward from the end of a range.
///
/// Stepping uses wrapping arithmetic: advancing past the largest value
/// representable in `T` wraps around silently. That wraparound is the
/// documented boundary behavior of the sequence, not an error, and backward
/// stepping undoes it exactly.
///
/// # Examples
///
/// ```rust
/// # use nacci_core::seq::cursor::FibCursor;
///
/// let mut cursor: FibCursor<u64> = FibCursor::new();
/// assert_eq!(cursor.value(), 1);
///
/// cursor.step_forward().step_forward().step_forward();
/// assert_eq!(cursor.index(), 3);
/// assert_eq!(cursor.value(), 3);
///
/// cursor.step_backward();
/// assert_eq!(cursor.value(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct FibCursor<T>
where
    T: FibNumeric,
{
    index: usize,
    previous: T,
    current: T,
}

impl<T> FibCursor<T>
where
    T: FibNumeric,
{
    /// Creates a cursor at the start of the sequence (index 0, value 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let cursor: FibCursor<u64> = FibCursor::new();
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.value(), 1);
    /// assert!(cursor.is_at_start());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            index: 0,
            previous: T::zero(),
            current: T::one(),
        }
    }

    /// Creates a cursor positioned at `index` by stepping forward from the
    /// start, so the carried values are the true sequence values at that
    /// position. O(index).
    ///
    /// Kept crate-private on purpose: callers obtain mid-sequence cursors
    /// only through a range's `begin`/`end` or by stepping.
    pub(crate) fn at_index(index: usize) -> Self {
        let mut cursor = Self::new();
        for _ in 0..index {
            cursor.step_forward();
        }
        cursor
    }

    /// Returns the sequence value at the cursor's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let mut cursor: FibCursor<u64> = FibCursor::new();
    /// cursor.step_forward().step_forward();
    /// assert_eq!(cursor.value(), 2);
    /// // Dereferencing has no side effects.
    /// assert_eq!(cursor.value(), 2);
    /// ```
    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    /// Returns the position index of the cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let mut cursor: FibCursor<u64> = FibCursor::new();
    /// cursor.step_forward();
    /// assert_eq!(cursor.index(), 1);
    /// ```
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Checks if the cursor is at the start position (index 0).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let mut cursor: FibCursor<u64> = FibCursor::new();
    /// assert!(cursor.is_at_start());
    /// cursor.step_forward();
    /// assert!(!cursor.is_at_start());
    /// ```
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// Advances the cursor by one position and returns it for chaining.
    ///
    /// The carried values shift by one recurrence step; the addition wraps
    /// at the numeric boundary of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let mut cursor: FibCursor<u64> = FibCursor::new();
    /// cursor.step_forward().step_forward().step_forward().step_forward();
    /// assert_eq!(cursor.value(), 5);
    ///
    /// // Narrow types wrap instead of overflowing: fib(13) = 377 = 121 mod 256.
    /// let mut narrow: FibCursor<u8> = FibCursor::new();
    /// for _ in 0..13 {
    ///     narrow.step_forward();
    /// }
    /// assert_eq!(narrow.value(), 121);
    /// ```
    #[inline]
    pub fn step_forward(&mut self) -> &mut Self {
        let next = self.previous.wrapping_add_val(self.current);
        self.previous = self.current;
        self.current = next;
        self.index += 1;
        self
    }

    /// Retreats the cursor by one position and returns it for chaining.
    ///
    /// This is the exact inverse of [`step_forward`](Self::step_forward) for
    /// any cursor with `index > 0`, including across a value wrap. At the
    /// start position it is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::cursor::FibCursor;
    ///
    /// let mut cursor: FibCursor<u64> = FibCursor::new();
    /// cursor.step_forward().step_forward();
    /// cursor.step_backward();
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.value(), 1);
    ///
    /// // Stepping backward at the start leaves the cursor unchanged.
    /// let mut start: FibCursor<u64> = FibCursor::new();
    /// start.step_backward();
    /// assert_eq!(start.index(), 0);
    /// assert_eq!(start.value(), 1);
    /// ```
    #[inline]
    pub fn step_backward(&mut self) -> &mut Self {
        if self.index == 0 {
            return self;
        }
        let previous = self.current.wrapping_sub_val(self.previous);
        self.current = self.previous;
        self.previous = previous;
        self.index -= 1;
        self
    }
}

impl<T> Default for FibCursor<T>
where
    T: FibNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for FibCursor<T>
where
    T: FibNumeric,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for FibCursor<T> where T: FibNumeric {}

impl<T> PartialOrd for FibCursor<T>
where
    T: FibNumeric,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FibCursor<T>
where
    T: FibNumeric,
{
    // Single source of truth for all six comparison operators: they cannot
    // disagree with each other or with equality.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for FibCursor<T>
where
    T: FibNumeric,
{
    // Must match the index-only equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> std::fmt::Debug for FibCursor<T>
where
    T: FibNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FibCursor")
            .field("index", &self.index)
            .field("previous", &self.previous)
            .field("current", &self.current)
            .finish()
    }
}

impl<T> std::fmt::Display for FibCursor<T>
where
    T: FibNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fib[{}] = {}", self.index, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// The first `len` sequence values under the offset convention
    /// (1, 1, 2, 3, 5, ...), computed independently of the cursor.
    fn reference_values(len: usize) -> Vec<u64> {
        let mut values = Vec::with_capacity(len);
        let (mut previous, mut current) = (0u64, 1u64);
        for _ in 0..len {
            values.push(current);
            let next = previous + current;
            previous = current;
            current = next;
        }
        values
    }

    #[test]
    fn test_new_is_start_state() {
        let cursor: FibCursor<u64> = FibCursor::new();
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.previous, 0);
        assert_eq!(cursor.current, 1);
        assert!(cursor.is_at_start());
    }

    #[test]
    fn test_default_matches_new() {
        let a: FibCursor<u32> = FibCursor::default();
        let b: FibCursor<u32> = FibCursor::new();
        assert_eq!(a.index, b.index);
        assert_eq!(a.previous, b.previous);
        assert_eq!(a.current, b.current);
    }

    #[test]
    fn test_step_forward_produces_sequence() {
        let expected = reference_values(16);
        let mut cursor: FibCursor<u64> = FibCursor::new();
        for (index, &value) in expected.iter().enumerate() {
            assert_eq!(cursor.index(), index);
            assert_eq!(cursor.value(), value);
            cursor.step_forward();
        }
        assert_eq!(cursor.index(), 16);
    }

    #[test]
    fn test_step_forward_chains() {
        let mut cursor: FibCursor<u64> = FibCursor::new();
        cursor.step_forward().step_forward().step_forward();
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.value(), 3);
    }

    #[test]
    fn test_at_index_carries_true_values() {
        let expected = reference_values(12);
        for (index, &value) in expected.iter().enumerate() {
            let cursor: FibCursor<u64> = FibCursor::at_index(index);
            assert_eq!(cursor.index(), index);
            assert_eq!(cursor.value(), value);
        }
    }

    #[test]
    fn test_step_backward_inverts_step_forward() {
        // Forward-then-backward must restore the full state, not just the
        // index, at every position we can cheaply reach.
        for target in 1..32usize {
            let before: FibCursor<u64> = FibCursor::at_index(target);
            let mut cursor = before;
            cursor.step_forward();
            cursor.step_backward();
            assert_eq!(cursor.index, before.index);
            assert_eq!(cursor.previous, before.previous);
            assert_eq!(cursor.current, before.current);
        }
    }

    #[test]
    fn test_step_backward_inverts_across_wraparound() {
        // fib(13) = 377 wraps to 121 in u8; the inverse must still hold on
        // both sides of that boundary and far beyond it.
        for target in 1..64usize {
            let before: FibCursor<u8> = FibCursor::at_index(target);
            let mut cursor = before;
            cursor.step_forward();
            cursor.step_backward();
            assert_eq!(cursor.index, before.index);
            assert_eq!(cursor.previous, before.previous);
            assert_eq!(cursor.current, before.current);
        }
    }

    #[test]
    fn test_step_backward_at_start_is_noop() {
        let mut cursor: FibCursor<u64> = FibCursor::new();
        cursor.step_backward();
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.previous, 0);
        assert_eq!(cursor.current, 1);

        // Still a no-op when chained.
        cursor.step_backward().step_backward();
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.current, 1);
    }

    #[test]
    fn test_wraparound_matches_wrapping_chain() {
        // The cursor must reproduce a plain wrapping_add recurrence exactly,
        // long after the first wrap.
        let (mut previous, mut current) = (0u8, 1u8);
        let mut cursor: FibCursor<u8> = FibCursor::new();
        for _ in 0..100 {
            assert_eq!(cursor.value(), current);
            let next = previous.wrapping_add(current);
            previous = current;
            current = next;
            cursor.step_forward();
        }
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let walked: FibCursor<u64> = {
            let mut cursor = FibCursor::new();
            for _ in 0..5 {
                cursor.step_forward();
            }
            cursor
        };
        let targeted: FibCursor<u64> = FibCursor::at_index(5);
        let overshot: FibCursor<u64> = {
            let mut cursor = FibCursor::at_index(7);
            cursor.step_backward().step_backward();
            cursor
        };

        assert_eq!(walked, targeted);
        assert_eq!(walked, overshot);
        assert_ne!(walked, FibCursor::at_index(6));
    }

    #[test]
    fn test_ordering_is_total_by_index() {
        let a: FibCursor<u64> = FibCursor::at_index(3);
        let b: FibCursor<u64> = FibCursor::at_index(7);

        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&a), Ordering::Equal);

        // Exactly one of <, ==, > holds for every pair.
        for left in 0..6usize {
            for right in 0..6usize {
                let x: FibCursor<u64> = FibCursor::at_index(left);
                let y: FibCursor<u64> = FibCursor::at_index(right);
                let relations =
                    [x < y, x == y, x > y].iter().filter(|&&held| held).count();
                assert_eq!(relations, 1);
                assert_eq!(x > y, y < x);
                assert_eq!(x >= y, !(x < y));
                assert_eq!(x <= y, !(x > y));
            }
        }
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set: HashSet<FibCursor<u64>> = HashSet::new();
        set.insert(FibCursor::at_index(5));
        set.insert({
            let mut cursor = FibCursor::new();
            for _ in 0..5 {
                cursor.step_forward();
            }
            cursor
        });
        assert_eq!(set.len(), 1);

        set.insert(FibCursor::at_index(6));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_copies_do_not_alias() {
        let mut original: FibCursor<u64> = FibCursor::at_index(4);
        let copy = original;
        original.step_forward();
        assert_eq!(copy.index(), 4);
        assert_eq!(original.index(), 5);
    }

    #[test]
    fn test_debug_and_display() {
        let cursor: FibCursor<u64> = FibCursor::at_index(5);
        assert_eq!(format!("{}", cursor), "fib[5] = 8");
        assert_eq!(
            format!("{:?}", cursor),
            "FibCursor { index: 5, previous: 5, current: 8 }"
        );
    }
}
