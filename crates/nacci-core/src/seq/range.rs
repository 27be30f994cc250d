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

use crate::seq::cursor::FibCursor;
use crate::seq::numeric::FibNumeric;
use std::iter::FusedIterator;

/// A bounded view over the Fibonacci sequence covering the half-open
/// position interval `[0, len)`.
///
/// The range owns two cursors: `begin` fixed at index 0 and `end` at index
/// `len`. The end cursor is built by stepping forward from the start, an
/// O(len) cost paid once at construction, so it carries the true sequence
/// values at its position. That is what makes traversal from the back
/// (`rev`, `next_back`) well-defined without any further bookkeeping.
///
/// Cursors handed out by [`begin`](Self::begin) and [`end`](Self::end) are
/// independent copies; nothing a caller does to them can affect the range.
///
/// # Examples
///
/// ```rust
/// # use nacci_core::seq::range::FibRange;
///
/// let range = FibRange::<u64>::new(10);
/// let values: Vec<u64> = range.iter().collect();
/// assert_eq!(values, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
///
/// // Generic adapters need no knowledge of the sequence.
/// assert_eq!(range.iter().min(), Some(1));
/// assert_eq!(range.iter().max(), Some(55));
/// assert_eq!(range.iter().rev().next(), Some(55));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FibRange<T>
where
    T: FibNumeric,
{
    begin: FibCursor<T>,
    end: FibCursor<T>,
}

impl<T> FibRange<T>
where
    T: FibNumeric,
{
    /// Creates a range producing the first `len` sequence values.
    ///
    /// Builds the end cursor by stepping forward `len` times from the
    /// start; O(len). There is deliberately no default constructor: a
    /// length must always be supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// let range = FibRange::<u64>::new(5);
    /// assert_eq!(range.len(), 5);
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 1, 2, 3, 5]);
    /// ```
    pub fn new(len: usize) -> Self {
        Self {
            begin: FibCursor::new(),
            end: FibCursor::at_index(len),
        }
    }

    /// Returns a copy of the cursor at the start of the range (index 0).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// let range = FibRange::<u64>::new(5);
    /// assert_eq!(range.begin().index(), 0);
    /// assert_eq!(range.begin().value(), 1);
    /// ```
    #[inline]
    pub fn begin(&self) -> FibCursor<T> {
        self.begin
    }

    /// Returns a copy of the cursor one past the last produced position
    /// (index `len`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// let range = FibRange::<u64>::new(5);
    /// assert_eq!(range.end().index(), 5);
    /// ```
    #[inline]
    pub fn end(&self) -> FibCursor<T> {
        self.end
    }

    /// Returns the number of values the range produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// assert_eq!(FibRange::<u64>::new(20).len(), 20);
    /// assert_eq!(FibRange::<u64>::new(0).len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.index() - self.begin.index()
    }

    /// Returns `true` if the range produces no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// assert!(FibRange::<u64>::new(0).is_empty());
    /// assert!(!FibRange::<u64>::new(1).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Creates an iterator over the values of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nacci_core::seq::range::FibRange;
    ///
    /// let range = FibRange::<u64>::new(4);
    /// let values: Vec<u64> = range.iter().collect();
    /// assert_eq!(values, vec![1, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> FibRangeIterator<T> {
        FibRangeIterator {
            front: self.begin,
            back: self.end,
        }
    }
}

impl<T> std::fmt::Debug for FibRange<T>
where
    T: FibNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FibRange")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for FibRange<T>
where
    T: FibNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fib[{}, {})", self.begin.index(), self.end.index())
    }
}

impl<T> IntoIterator for FibRange<T>
where
    T: FibNumeric,
{
    type Item = T;
    type IntoIter = FibRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &FibRange<T>
where
    T: FibNumeric,
{
    type Item = T;
    type IntoIter = FibRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`FibRange`].
///
/// Holds a front and a back cursor that converge toward each other; the
/// iterator is exhausted when they meet. Because both ends are real cursor
/// states, iteration works from either direction and the two directions can
/// be interleaved freely.
///
/// # Examples
///
/// ```rust
/// # use nacci_core::seq::range::FibRange;
///
/// let mut iter = FibRange::<u64>::new(5).into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(5));
/// assert_eq!(iter.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FibRangeIterator<T>
where
    T: FibNumeric,
{
    front: FibCursor<T>,
    back: FibCursor<T>,
}

impl<T> Iterator for FibRangeIterator<T>
where
    T: FibNumeric,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.front.value();
        self.front.step_forward();
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.index() - self.front.index();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for FibRangeIterator<T>
where
    T: FibNumeric,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward();
        Some(self.back.value())
    }
}

impl<T> ExactSizeIterator for FibRangeIterator<T>
where
    T: FibNumeric,
{
    #[inline]
    fn len(&self) -> usize {
        self.back.index() - self.front.index()
    }
}

impl<T> FusedIterator for FibRangeIterator<T> where T: FibNumeric {}
