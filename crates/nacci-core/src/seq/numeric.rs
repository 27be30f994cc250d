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

//! # Sequence Value Trait
//!
//! Unified numeric bounds for the sequence value type. `FibNumeric` collects
//! the integer capabilities the cursor state machine requires: intrinsic
//! traits (`PrimInt`, `Unsigned`) and by-value wrapping arithmetic from this
//! crate's `num` module.
//!
//! ## Motivation
//!
//! The cursor should remain generic over the unsigned integer width while
//! keeping predictable arithmetic semantics: advancing past the largest
//! representable value wraps around silently instead of failing, and the
//! matching wrapping subtraction makes backward stepping an exact inverse
//! even across a wrap. Collecting the bounds into one alias keeps generic
//! signatures short and the semantics uniform.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Unsigned` for numeric fundamentals.
//! - Adds by-value wrapping addition and subtraction.
//! - `Debug + Display` for diagnostics and rendering.
//! - `Send + Sync` so cursor copies travel freely across threads.

use crate::num::wrapping::{WrappingAddVal, WrappingSubVal};
use num_traits::{PrimInt, Unsigned};

/// A trait alias for numeric types that can carry sequence values.
/// This covers the unsigned integer types `u8`, `u16`, `u32`, `u64`,
/// `u128` and `usize`.
///
/// # Note
///
/// Signed integers are intentionally excluded: the sequence is defined over
/// non-negative values, and the wraparound contract is specified in terms of
/// unsigned modular arithmetic.
pub trait FibNumeric:
    PrimInt
    + Unsigned
    + WrappingAddVal
    + WrappingSubVal
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> FibNumeric for T where
    T: PrimInt
        + Unsigned
        + WrappingAddVal
        + WrappingSubVal
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fib_numeric<T: FibNumeric>() {}

    #[test]
    fn test_unsigned_primitives_satisfy_alias() {
        assert_fib_numeric::<u8>();
        assert_fib_numeric::<u16>();
        assert_fib_numeric::<u32>();
        assert_fib_numeric::<u64>();
        assert_fib_numeric::<u128>();
        assert_fib_numeric::<usize>();
    }
}
