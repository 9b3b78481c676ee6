//! Render tree snapshot
//!
//! This module represents one consistent snapshot of a live page's render
//! tree: element tags and attributes, resolved computed styles, viewport
//! geometry, and direct text runs. It includes:
//! - RenderElement: one element of the snapshot, with its subtree
//! - ComputedStyle: the post-cascade property set read for one element
//! - Rect / TextRun: viewport geometry for elements and direct text nodes
//!
//! The snapshot is captured in a single synchronous pass inside the page, so
//! every geometry and style read is consistent with one layout state.

mod element;
mod style;

pub use element::{Rect, RenderElement, SelectOption, TextRun};
pub use style::ComputedStyle;
