//! Reconstruction message protocol and import entry point
//!
//! Mirrors the host plugin messaging surface: an `import` message carries the
//! serialized canonical tree as a single text payload, and the reply is
//! either a `success` with the created-object count or an `error`. A payload
//! that fails to parse aborts the whole import before any object is created;
//! per-node font trouble never surfaces here.

use crate::error::Result;
use crate::node::{Color, Fill, Node};
use crate::scene::{FontLoader, FontResolver, FontStyle, Frame, NodeFactory, DEFAULT_FAMILY};
use serde::{Deserialize, Serialize};

/// Message received from the triggering UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundMessage {
    Import {
        /// Serialized canonical tree
        data: String,
    },
}

/// Reply posted back to the triggering UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Success { count: usize },
    Error { message: String },
}

/// Result of a successful import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedScene {
    /// Root canvas frame holding the rebuilt tree
    pub root: Frame,
    /// Total number of canonical nodes materialized, root frame included
    pub count: usize,
}

/// Rebuild a scene graph from a serialized canonical tree
///
/// The root node's width/height double as canvas extent hints; non-positive
/// values fall back to 800x600.
pub async fn import<L: FontLoader>(payload: &str, fonts: &FontResolver<L>) -> Result<ImportedScene> {
    let data = Node::from_json(payload)?;

    // Warm the default family at every tier before any node needs it
    for style in [FontStyle::Regular, FontStyle::Medium, FontStyle::Bold] {
        let _ = fonts.resolve(DEFAULT_FAMILY, style).await;
    }

    let mut root = Frame::new("Imported Design");
    root.resize(canvas_extent(data.width, 800.0), canvas_extent(data.height, 600.0));
    root.fills = if data.fills.is_empty() {
        vec![Fill::solid(Color::WHITE)]
    } else {
        data.fills.clone()
    };

    let factory = NodeFactory::new(fonts);
    let mut count = 1;
    for child in &data.children {
        let (object, created) = factory.build(child).await;
        root.append_child(object);
        count += created;
    }

    log::debug!("Imported {} objects into '{}'", count, root.name);
    Ok(ImportedScene { root, count })
}

/// Handle one protocol message and produce the reply
pub async fn handle_message<L: FontLoader>(
    message: InboundMessage,
    fonts: &FontResolver<L>,
) -> OutboundMessage {
    match message {
        InboundMessage::Import { data } => match import(&data, fonts).await {
            Ok(scene) => OutboundMessage::Success { count: scene.count },
            Err(err) => OutboundMessage::Error { message: err.to_string() },
        },
    }
}

fn canvas_extent(hint: i32, default: f32) -> f32 {
    if hint > 0 { hint as f32 } else { default }
}
