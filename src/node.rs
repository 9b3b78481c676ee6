//! Canonical node tree
//!
//! The canonical node is the single entity exchanged between extraction and
//! reconstruction. It is produced once per extraction, serialized to JSON,
//! transmitted as a single text payload, and consumed once by the import
//! entry point. Coordinates are relative to the immediate parent's bounding
//! box; only the root is viewport-relative.

use serde::{Deserialize, Serialize};

/// An RGB color with channels normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray level
    pub fn gray(level: f32) -> Self {
        Self { r: level, g: level, b: level }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Paint type discriminant; only solid paint is supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    #[default]
    Solid,
}

/// A solid background fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(rename = "type", default)]
    pub paint_type: PaintType,
    pub color: Color,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self { paint_type: PaintType::Solid, color }
    }
}

/// A solid border stroke with an integer width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type", default)]
    pub paint_type: PaintType,
    pub color: Color,
    pub width: i32,
}

impl Stroke {
    pub fn solid(color: Color, width: i32) -> Self {
        Self { paint_type: PaintType::Solid, color, width }
    }
}

/// Typographic payload of a `TEXT` node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAttrs {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: i32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default = "default_text_align")]
    pub text_align: String,
}

/// Payload of an `INPUT` node (text inputs and textareas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InputAttrs {
    pub value: String,
    pub placeholder: String,
    #[serde(default = "default_font_size")]
    pub font_size: i32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
}

/// Payload of a `FILE_INPUT` node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FileInputAttrs {
    pub file_name: String,
    pub button_text: String,
    #[serde(default = "default_font_size")]
    pub font_size: i32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
}

/// Payload of a `SELECT` node; only the chosen option is captured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectAttrs {
    /// Label of the selected option
    pub value: String,
    /// Raw value of the selected option
    pub selected_value: String,
    #[serde(default = "default_font_size")]
    pub font_size: i32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
}

fn default_font_size() -> i32 {
    14
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_font_weight() -> String {
    "400".to_string()
}

fn default_text_align() -> String {
    "left".to_string()
}

/// Primitive kind of a canonical node, with the kind-specific payload
///
/// The set is closed: reconstruction dispatches with an exhaustive match, so
/// adding a kind is a compiler-enforced change. Unknown kinds on the wire
/// deserialize as [`Kind::Other`] and rebuild as plain frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Frame,
    Text(TextAttrs),
    Image,
    #[serde(rename_all = "camelCase")]
    Vector { svg_string: String },
    Input(InputAttrs),
    FileInput(FileInputAttrs),
    Select(SelectAttrs),
    Button,
    #[serde(other)]
    Other,
}

impl Kind {
    /// Whether nodes of this kind may carry children
    ///
    /// `TEXT` never has children; `SELECT` option elements are never
    /// traversed.
    pub fn is_container(&self) -> bool {
        !matches!(self, Kind::Text(_) | Kind::Select(_))
    }
}

/// One element of the canonical tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(flatten)]
    pub kind: Kind,

    /// Display label: first class name token, else tag name
    pub name: String,

    /// Offset relative to the parent's bounding box (viewport for the root)
    pub x: i32,
    pub y: i32,

    /// Rounded extent; zero-sized nodes never appear in the tree
    pub width: i32,
    pub height: i32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Fill>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Stroke>,

    #[serde(default)]
    pub corner_radius: i32,

    #[serde(default = "default_opacity")]
    pub opacity: f32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

fn default_opacity() -> f32 {
    1.0
}

impl Node {
    /// Create a node with neutral paint and no children
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            fills: Vec::new(),
            strokes: Vec::new(),
            corner_radius: 0,
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    /// Builder method: set position and size
    pub fn with_bounds(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Builder method: set fills
    pub fn with_fills(mut self, fills: Vec<Fill>) -> Self {
        self.fills = fills;
        self
    }

    /// Builder method: set strokes
    pub fn with_strokes(mut self, strokes: Vec<Stroke>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Builder method: set corner radius
    pub fn with_corner_radius(mut self, radius: i32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Builder method: append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Count this node and all of its descendants
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Serialize the tree to the wire payload
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a tree from the wire payload
    pub fn from_json(payload: &str) -> crate::error::Result<Node> {
        Ok(serde_json::from_str(payload)?)
    }
}
