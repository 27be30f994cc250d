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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nacci_core::seq::range::FibRange;
use std::hint::black_box;

const LENGTHS: [usize; 4] = [16, 256, 4096, 65536];

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_construction");

    for len in LENGTHS {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| FibRange::<u64>::new(black_box(len)))
        });
    }
    group.finish();
}

fn bench_forward_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_forward_traversal");

    for len in LENGTHS {
        let range = FibRange::<u64>::new(len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &range, |b, range| {
            b.iter(|| {
                range
                    .iter()
                    .fold(0u64, |acc, v| acc.wrapping_add(black_box(v)))
            })
        });
    }
    group.finish();
}

fn bench_reverse_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_reverse_traversal");

    for len in LENGTHS {
        let range = FibRange::<u64>::new(len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &range, |b, range| {
            b.iter(|| {
                range
                    .iter()
                    .rev()
                    .fold(0u64, |acc, v| acc.wrapping_add(black_box(v)))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_forward_traversal,
    bench_reverse_traversal
);
criterion_main!(benches);
