//! Hybrid quicksort over string and integer slices.
//!
//! Run with: cargo run --bin sort_demo

use bag_quicksort::{par_quick_sort, quick_sort, quick_sort_range};
use std::time::Instant;

fn main() {
    println!("=== Six Strings (insertion sort path) ===\n");
    let mut small = ["Z", "X", "R", "K", "F", "B"];
    println!("Before: {:?}", small);
    quick_sort(&mut small);
    println!("After:  {:?}", small);

    println!("\n=== Reverse Alphabet (quicksort path) ===\n");
    let mut alphabet: Vec<String> = ('A'..='Z').rev().map(String::from).collect();
    println!("Before: {}", alphabet.join(" "));
    quick_sort(&mut alphabet);
    println!("After:  {}", alphabet.join(" "));

    println!("\n=== Subrange Sort ===\n");
    let mut mixed = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    println!("Before:          {:?}", mixed);
    quick_sort_range(&mut mixed, 2, 6).expect("bounds are valid");
    println!("After [2..=6]:   {:?}", mixed);

    match quick_sort_range(&mut mixed, 7, 2) {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("Inverted bounds:  {}", err),
    }

    println!("\n=== Parallel Quicksort ===\n");
    let mut data: Vec<i64> = (0..1_000_000).rev().collect();
    let start = Instant::now();
    par_quick_sort(&mut data);
    println!("Sorted 1,000,000 integers in {:?}", start.elapsed());
    println!("Sorted: {}", data.windows(2).all(|w| w[0] <= w[1]));
}
