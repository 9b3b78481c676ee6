//! # dom2scene
//!
//! Converts a rendered web page into a portable, typed tree of visual
//! primitives, and rebuilds that tree as an editable scene graph of
//! design-tool objects.
//!
//! ## Pipeline
//!
//! ```text
//! live page --> render snapshot --> canonical node tree --> JSON payload
//!                                                               |
//!                                   scene graph <-- import <----+
//! ```
//!
//! Extraction walks one consistent render snapshot, classifies every visible
//! element into a small set of primitive kinds (frames, text, images,
//! vectors, form controls), and captures geometry, paint and content.
//! Reconstruction consumes the serialized tree and materializes typed scene
//! objects, wrapping painted text in containers and resolving fonts with a
//! deterministic fallback.
//!
//! ## Extracting a page
//!
//! ```rust,no_run
//! use dom2scene::{BrowserSession, LaunchOptions};
//!
//! # fn main() -> dom2scene::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://example.com")?;
//! session.wait_for_navigation()?;
//!
//! let tree = session.extract_scene_tree()?;
//! println!("{}", tree.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rebuilding a scene
//!
//! ```rust,no_run
//! use dom2scene::plugin;
//! use dom2scene::scene::{FontCatalog, FontResolver};
//!
//! # async fn run(payload: &str) -> dom2scene::Result<()> {
//! let fonts = FontResolver::new(FontCatalog::default());
//! let scene = plugin::import(payload, &fonts).await?;
//! println!("created {} objects", scene.count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: browser session management and snapshot capture
//! - [`render`]: the render-tree snapshot model
//! - [`extract`]: classification, style extraction, vector inlining, and the
//!   tree walk
//! - [`node`]: the canonical node tree exchanged between the two sides
//! - [`scene`]: destination scene objects, font resolution, and the node
//!   factory
//! - [`plugin`]: the reconstruction message protocol and import entry point
//! - [`error`]: error types and result alias

pub mod browser;
pub mod error;
pub mod extract;
pub mod node;
pub mod plugin;
pub mod render;
pub mod scene;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use error::{ConvertError, Result};
pub use node::{Color, Fill, Kind, Node, Stroke};
pub use plugin::{InboundMessage, OutboundMessage};
pub use render::{ComputedStyle, Rect, RenderElement};
pub use scene::SceneNode;
