//! # Bag + Hybrid Quicksort
//!
//! Two small, self-contained components:
//!
//! 1. **Bag** - a multiset over any equality-comparable element type, with an
//!    optional capacity bound and swap-with-last O(1) removal
//! 2. **Sorting** - in-place insertion sort and hybrid quicksort
//!    (median-of-three pivot selection, insertion sort below 10 elements),
//!    plus a rayon fork-join variant for large slices
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --bin bag_demo
//! cargo run --bin sort_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the range-validation error type
//! - `rayon` - Fork-join parallelism for `par_quick_sort`

pub mod bag;
pub mod sort;

pub use bag::{Bag, DEFAULT_CAPACITY};
pub use sort::{insertion_sort, par_quick_sort, quick_sort, quick_sort_range, RangeError};
