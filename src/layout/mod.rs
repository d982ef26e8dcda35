//! Geometry helpers for positioning content on pages.
//!
//! PDF measures y up from the bottom of the page, while reports are laid out
//! top to bottom with a cursor that grows downward. The helpers here convert
//! between the two ([`from_top`], [`rect_from_top`], [`baseline_from_top`]) and
//! provide the approximate text measurement ([`width_of_text`]) and greedy word
//! wrapping ([`wrap_words`]) the table engine is built on.

mod margins;
mod text;

pub use margins::*;
pub use text::*;
