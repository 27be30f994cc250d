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

use core::ops::{Add, Sub};

/// A trait for types that support wrapping addition by value (no references).
///
/// This mirrors the semantics of primitive integer `wrapping_add`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
///
/// # Examples
///
/// ```rust
/// # use nacci_core::num::wrapping::WrappingAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.wrapping_add_val(b), 44); // Wraps around at the type boundary
/// let c: u8 = 50;
/// assert_eq!(a.wrapping_add_val(c), 250); // No wrap
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value, wrapping around at the numeric boundary.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// A trait for types that support wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use nacci_core::num::wrapping::WrappingSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.wrapping_sub_val(b), 206); // Wraps around at the type boundary
/// let c: u8 = 20;
/// assert_eq!(a.wrapping_sub_val(c), 30); // No wrap
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value, wrapping around at the numeric boundary.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u8, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u16, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u32, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u64, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, usize, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u128, wrapping_add);

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, isize, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i128, wrapping_add);

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u8, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u16, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u32, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u64, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, usize, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u128, wrapping_sub);

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i8, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i16, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i32, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i64, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, isize, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i128, wrapping_sub);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_add_val<T: WrappingAddVal>(a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }
    fn wrapping_sub_val<T: WrappingSubVal>(a: T, b: T) -> T {
        a.wrapping_sub_val(b)
    }

    #[test]
    fn test_wrapping_add_val() {
        assert_eq!(wrapping_add_val(255u8, 1u8), 0u8);
        assert_eq!(wrapping_add_val(250u8, 10u8), 4u8);
        assert_eq!(wrapping_add_val(127i8, 1i8), -128i8);
        assert_eq!(wrapping_add_val(100u64, 20u64), 120u64);
    }

    #[test]
    fn test_wrapping_sub_val() {
        assert_eq!(wrapping_sub_val(0u8, 1u8), 255u8);
        assert_eq!(wrapping_sub_val(4u8, 10u8), 250u8);
        assert_eq!(wrapping_sub_val(-128i8, 1i8), 127i8);
        assert_eq!(wrapping_sub_val(120u64, 20u64), 100u64);
    }

    #[test]
    fn test_wrapping_sub_inverts_wrapping_add() {
        // The sequence stepping logic relies on subtraction undoing addition
        // even when the addition wrapped.
        let pairs: [(u8, u8); 4] = [(0, 0), (200, 100), (255, 255), (13, 21)];
        for (a, b) in pairs {
            assert_eq!(wrapping_sub_val(wrapping_add_val(a, b), b), a);
        }
    }
}
