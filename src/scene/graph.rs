//! Destination scene graph objects
//!
//! Typed stand-ins for the design tool's native objects. Frames are the only
//! containers; text and rectangles are leaves. The scene model has no layout
//! engine, so text extent comes from a deterministic character metric that
//! the centering math in the factory relies on.

use crate::node::{Color, Fill, Stroke};
use crate::scene::font::FontName;

/// Horizontal alignment of a text object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlignHorizontal {
    /// Fixed mapping from canonical alignment strings; unknown values align
    /// left
    pub fn from_css(align: &str) -> Self {
        match align {
            "center" => TextAlignHorizontal::Center,
            "right" | "end" => TextAlignHorizontal::Right,
            "justify" => TextAlignHorizontal::Justified,
            _ => TextAlignHorizontal::Left,
        }
    }
}

/// A container object; the only scene node that accepts children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fills: Vec<Fill>,
    pub strokes: Vec<Stroke>,
    pub stroke_weight: f32,
    pub corner_radius: f32,
    pub opacity: f32,
    pub children: Vec<SceneNode>,
}

impl Frame {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), opacity: 1.0, ..Default::default() }
    }

    /// Set the frame extent; dimensions are clamped to at least 1
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn append_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Count this frame and everything beneath it
    pub fn total_objects(&self) -> usize {
        1 + self.children.iter().map(SceneNode::total_objects).sum::<usize>()
    }
}

/// A leaf rectangle (image placeholders)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fills: Vec<Fill>,
    pub corner_radius: f32,
    pub opacity: f32,
}

impl Rectangle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), opacity: 1.0, ..Default::default() }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// A leaf text object with a loaded font handle
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub characters: String,
    pub font: FontName,
    pub font_size: f32,
    pub fills: Vec<Fill>,
    pub align: TextAlignHorizontal,
    pub opacity: f32,
}

impl Text {
    pub fn new(name: impl Into<String>, characters: impl Into<String>, font: FontName, font_size: f32) -> Self {
        let characters = characters.into();
        let (width, height) = Self::measure(&characters, font_size);
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
            characters,
            font,
            font_size,
            fills: Vec::new(),
            align: TextAlignHorizontal::Left,
            opacity: 1.0,
        }
    }

    /// Deterministic text extent: 0.6em advance per character, 1.2em line
    /// height
    pub fn measure(characters: &str, font_size: f32) -> (f32, f32) {
        let mut lines = 0usize;
        let mut longest = 0usize;
        for line in characters.lines() {
            lines += 1;
            longest = longest.max(line.chars().count());
        }
        let lines = lines.max(1);

        (longest as f32 * font_size * 0.6, lines as f32 * font_size * 1.2)
    }

    pub fn set_color(&mut self, color: Color) {
        self.fills = vec![Fill::solid(color)];
    }
}

/// One object of the destination scene graph
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Frame(Frame),
    Text(Text),
    Rectangle(Rectangle),
}

impl SceneNode {
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Frame(f) => &f.name,
            SceneNode::Text(t) => &t.name,
            SceneNode::Rectangle(r) => &r.name,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        match self {
            SceneNode::Frame(f) => {
                f.x = x;
                f.y = y;
            }
            SceneNode::Text(t) => {
                t.x = x;
                t.y = y;
            }
            SceneNode::Rectangle(r) => {
                r.x = x;
                r.y = y;
            }
        }
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        match self {
            SceneNode::Frame(f) => f.opacity = opacity,
            SceneNode::Text(t) => t.opacity = opacity,
            SceneNode::Rectangle(r) => r.opacity = opacity,
        }
    }

    /// Whether the object can hold children
    pub fn supports_children(&self) -> bool {
        matches!(self, SceneNode::Frame(_))
    }

    pub fn total_objects(&self) -> usize {
        match self {
            SceneNode::Frame(f) => f.total_objects(),
            SceneNode::Text(_) | SceneNode::Rectangle(_) => 1,
        }
    }

    /// The contained frame, if this is a container
    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            SceneNode::Frame(f) => Some(f),
            _ => None,
        }
    }
}
