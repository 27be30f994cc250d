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

//! # Numeric Foundations
//!
//! By-value numeric operation traits for integer primitives. The traits here
//! mirror Rust's intrinsic wrapping methods, but expose consistent
//! trait-based APIs suitable for generic code without references.
//!
//! ## Submodules
//!
//! - `wrapping`: Traits `WrappingAddVal` and `WrappingSubVal` that wrap at
//!   the numeric boundary of the type instead of overflowing, implemented
//!   for all core integer types.
//!
//! ## Motivation
//!
//! Sequence generation in this crate is deliberately total: advancing past
//! the largest representable value wraps around rather than failing. The
//! num_traits wrapping APIs take references, which is awkward for `Copy`
//! integer state; these traits provide the same semantics by value.
//!
//! Refer to the submodule for examples and trait lists.

pub mod wrapping;
