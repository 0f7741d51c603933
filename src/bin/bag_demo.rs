//! Bag container walkthrough.
//!
//! Run with: cargo run --bin bag_demo

use bag_quicksort::Bag;

fn main() {
    println!("=== Bounded Bag (capacity 6) ===\n");
    let mut bag = Bag::with_default_capacity();
    println!("capacity: {:?}", bag.capacity());
    println!("is_empty: {}", bag.is_empty());

    println!("\n=== Add ===");
    for item in ["one", "two", "three", "two", "four", "two"] {
        println!("add({:?}): {}", item, bag.add(item));
    }
    println!("add(\"overflow\"): {}", bag.add("overflow"));
    println!("len: {}", bag.len());
    println!("contents: {:?}", bag.to_vec());

    println!("\n=== Search ===");
    println!("contains(\"two\"): {}", bag.contains(&"two"));
    println!("contains(\"five\"): {}", bag.contains(&"five"));
    println!("frequency_of(\"two\"): {}", bag.frequency_of(&"two"));

    println!("\n=== Remove (swap-with-last) ===");
    println!("remove(\"one\"): {}", bag.remove(&"one"));
    println!("contents: {:?}", bag.to_vec());
    println!("remove(\"five\"): {}", bag.remove(&"five"));
    println!("len: {}", bag.len());

    println!("\n=== Clear ===");
    bag.clear();
    println!("len: {}", bag.len());
    println!("is_empty: {}", bag.is_empty());

    println!("\n=== Unbounded Bag ===");
    let counts: Bag<i32> = (0..100).map(|i| i % 3).collect();
    println!("len: {}", counts.len());
    println!("capacity: {:?}", counts.capacity());
    println!("frequency_of(0): {}", counts.frequency_of(&0));
}
