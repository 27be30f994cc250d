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

//! # Nacci Core
//!
//! Cursor and range primitives for bounded, bidirectional traversal of the
//! Fibonacci sequence. This crate packages the sequence as plain value types
//! that plug into Rust's iterator ecosystem, so generic algorithms consume
//! the sequence without knowing anything about how it is generated.
//!
//! ## Modules
//!
//! - `num`: By-value wrapping arithmetic traits (`WrappingAddVal`,
//!   `WrappingSubVal`) for the primitive integers, mirroring the intrinsic
//!   `wrapping_*` methods with a trait-based API usable in generic code.
//! - `seq`: The sequence primitives: the `FibNumeric` value-type alias, the
//!   `FibCursor` position/state pair, and the `FibRange` bounded view with
//!   its iterator (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`).
//!
//! ## Purpose
//!
//! A cursor bundles a position index with the two most recent sequence
//! values, which is all the state needed to step one position forward or
//! backward in O(1). A range owns a begin and an end cursor over the
//! half-open index interval `[0, len)` and hands out independent cursor
//! copies, keeping traversal free of shared mutable state.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod seq;
