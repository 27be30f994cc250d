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

//! Command line front end that prints a bounded window of the Fibonacci
//! sequence together with a few derived views of it.

use clap::Parser;
use nacci_core::seq::range::FibRange;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints a bounded window of the Fibonacci sequence"
)]
struct Cli {
    /// Number of sequence values to produce
    #[arg(short = 'n', long = "count", default_value_t = 20)]
    count: usize,
}

fn print_table(range: &FibRange<u64>) {
    println!("{:<7} | {:<20}", "Index", "Value");
    println!("{}", "-".repeat(30));
    for (index, value) in range.iter().enumerate() {
        println!("{:<7} | {:<20}", index, value);
    }
    println!("{}", "-".repeat(30));
}

fn print_extrema(range: &FibRange<u64>) {
    match (range.iter().min(), range.iter().max()) {
        (Some(min), Some(max)) => println!("Extrema:   [ {} , {} ]", min, max),
        _ => println!("Extrema:   none (range is empty)"),
    }
}

fn main() {
    let cli = Cli::parse();
    let range = FibRange::<u64>::new(cli.count);

    println!("Traversing {}", range);
    print_table(&range);
    print_extrema(&range);

    let collected: Vec<u64> = range.iter().collect();
    println!("Collected: {:?}", collected);

    let reversed: Vec<u64> = range.iter().rev().collect();
    println!("Reversed:  {:?}", reversed);
}
