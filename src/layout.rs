//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where the input, the list and the buttons were
//! last drawn, and `region_at()` maps a screen position back to one of
//! them for mouse handling.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
