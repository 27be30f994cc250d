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

//! # Sequence Primitives
//!
//! The Fibonacci sequence as a pair of plain value types: a cursor that
//! carries one position worth of state, and a range that bounds a half-open
//! span of positions and hands the cursor pair to Rust's iterator ecosystem.
//!
//! ## Submodules
//!
//! - `numeric`: The `FibNumeric` trait alias specifying the capabilities a
//!   sequence value type must provide (unsigned primitive integer with
//!   by-value wrapping arithmetic).
//! - `cursor`: `FibCursor<T>`, one position in the sequence. Supports O(1)
//!   forward and backward stepping, and compares by position index alone.
//! - `range`: `FibRange<T>`, a bounded view over positions `[0, len)` with
//!   `begin`/`end` cursor access and full iterator support (`Iterator`,
//!   `DoubleEndedIterator`, `ExactSizeIterator`, `FusedIterator`).
//!
//! ## Motivation
//!
//! Generic algorithms should not need to know how a sequence is produced.
//! Once stepping, dereference, and comparison are in place, `min`, `max`,
//! `collect`, `rev`, and every other adapter work against the range
//! unmodified. Everything here is `Copy` value state; cursor copies never
//! alias each other.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod cursor;
pub mod numeric;
pub mod range;
