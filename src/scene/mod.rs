//! Reconstruction: canonical node tree -> scene graph
//!
//! This module materializes canonical nodes as typed design-tool objects.
//! It includes:
//! - graph: the destination scene objects (Frame, Text, Rectangle)
//! - font: style tiers, the async font-load capability, and the never-fail
//!   resolver with its fallback policy
//! - factory: per-kind constructors, including the container wrap for
//!   painted text
//!
//! Reconstruction is single-threaded and depth-first; it suspends only at
//! font loads, and those are recovered locally by fallback substitution.

pub mod factory;
pub mod font;
pub mod graph;

pub use factory::NodeFactory;
pub use font::{FontCatalog, FontLoader, FontName, FontResolver, FontStyle, DEFAULT_FAMILY};
pub use graph::{Frame, Rectangle, SceneNode, Text, TextAlignHorizontal};
