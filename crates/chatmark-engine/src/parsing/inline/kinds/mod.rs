//! # Inline Kinds
//!
//! One type per span kind, each owning its pattern. The resolver runs their
//! `find` scans; it never hardcodes a delimiter.

pub mod bold;
pub mod entity;
pub mod highlight;
pub mod link;
pub mod percent;

pub use bold::Bold;
pub use entity::EntityDictionary;
pub use highlight::Highlight;
pub use link::Link;
pub use percent::Percent;
