//! Extraction: render snapshot -> canonical node tree
//!
//! This module turns one render-tree snapshot into the canonical node tree.
//! It includes:
//! - classify: fixed-precedence element classification
//! - style: normalized paint/typography parsing (StyleExtractor)
//! - svg: vector subtree inlining with resolved paint (SvgInliner)
//! - tree: the recursive-descent walk itself (TreeBuilder)
//!
//! The whole pass is a pure transformation; nothing here touches a browser.

pub mod classify;
pub mod style;
pub mod svg;
pub mod tree;

pub use classify::{classify, ElementClass};
pub use tree::extract;
