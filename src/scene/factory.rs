//! Canonical node -> scene object construction
//!
//! Dispatches on the canonical kind with an exhaustive match and builds the
//! destination object(s) for each node, depth-first. A parent object always
//! exists and is sized before any child is appended. The only suspension
//! points are font resolutions, and those never fail.

use crate::node::{Color, Fill, FileInputAttrs, InputAttrs, Kind, Node, SelectAttrs, Stroke, TextAttrs};
use crate::scene::font::{FontLoader, FontResolver, FontStyle};
use crate::scene::graph::{Frame, Rectangle, SceneNode, Text, TextAlignHorizontal};
use std::future::Future;
use std::pin::Pin;

/// Left inset of the display text inside input boxes
const INPUT_TEXT_INSET: f32 = 12.0;

/// Fill of image placeholder rectangles
const IMAGE_PLACEHOLDER_FILL: Color = Color { r: 0.9, g: 0.9, b: 0.9 };

/// Default fill of button nodes that carry no paint of their own
const BUTTON_FILL: Color = Color { r: 0.23, g: 0.51, b: 0.96 };

/// Text color when a text node carries none
const TEXT_FALLBACK_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5 };

/// Gray used for placeholder text in input boxes
const PLACEHOLDER_COLOR: Color = Color { r: 0.6, g: 0.6, b: 0.6 };

/// Dark gray used for input values without an explicit color
const VALUE_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2 };

/// Light gray default stroke of input boxes
const INPUT_STROKE_COLOR: Color = Color { r: 0.8, g: 0.8, b: 0.8 };

/// Builds destination scene objects from canonical nodes
pub struct NodeFactory<'a, L> {
    fonts: &'a FontResolver<L>,
}

impl<'a, L: FontLoader> NodeFactory<'a, L> {
    pub fn new(fonts: &'a FontResolver<L>) -> Self {
        Self { fonts }
    }

    /// Build the object for one node and, depth-first, its descendants
    ///
    /// Returns the constructed object and the number of canonical nodes
    /// materialized (self plus all descendants). Children are only recursed
    /// into when the constructed object supports containment.
    pub async fn build(&self, node: &Node) -> (SceneNode, usize) {
        let mut object = match &node.kind {
            Kind::Text(attrs) => self.text_node(node, attrs).await,
            Kind::Image => SceneNode::Rectangle(image_placeholder(node)),
            Kind::Input(attrs) => SceneNode::Frame(self.input_node(node, attrs).await),
            Kind::FileInput(attrs) => SceneNode::Frame(self.file_input_node(node, attrs).await),
            Kind::Select(attrs) => SceneNode::Frame(self.select_node(node, attrs).await),
            Kind::Button => SceneNode::Frame(button_node(node)),
            // Vectors are plain boxes at this layer; unknown kinds degrade
            // to frames instead of failing the import
            Kind::Frame | Kind::Vector { .. } | Kind::Other => SceneNode::Frame(frame_node(node)),
        };

        object.set_position(node.x as f32, node.y as f32);
        if node.opacity < 1.0 {
            object.set_opacity(node.opacity);
        }

        let mut count = 1;
        if object.supports_children() {
            if let SceneNode::Frame(frame) = &mut object {
                for child in &node.children {
                    let (child_object, created) = self.build_boxed(child).await;
                    frame.append_child(child_object);
                    count += created;
                }
            }
        }

        (object, count)
    }

    fn build_boxed<'b>(
        &'b self,
        node: &'b Node,
    ) -> Pin<Box<dyn Future<Output = (SceneNode, usize)> + Send + 'b>> {
        Box::pin(self.build(node))
    }

    /// Text construction; styled text gets a wrapping container
    ///
    /// The destination text primitive cannot carry a background or border,
    /// so any fill, stroke, or positive corner radius forces a container
    /// frame with that paint, with the bare text centered inside it.
    async fn text_node(&self, node: &Node, attrs: &TextAttrs) -> SceneNode {
        let has_fills = !node.fills.is_empty();
        let has_strokes = !node.strokes.is_empty();
        let has_radius = node.corner_radius > 0;

        let mut text = self.bare_text(attrs).await;

        if !(has_fills || has_strokes || has_radius) {
            return SceneNode::Text(text);
        }

        let mut frame = Frame::new(label_for(&attrs.text, "TextBox"));
        frame.resize(or_default(node.width, 100) as f32, or_default(node.height, 30) as f32);
        frame.fills = node.fills.clone();
        if has_strokes {
            frame.strokes = node.strokes.clone();
            frame.stroke_weight = node.strokes[0].width as f32;
        }
        if has_radius {
            frame.corner_radius = node.corner_radius as f32;
        }

        // Center the text by the container/content size delta
        text.x = (frame.width - text.width) / 2.0;
        text.y = (frame.height - text.height) / 2.0;
        frame.append_child(SceneNode::Text(text));

        SceneNode::Frame(frame)
    }

    /// Bare text primitive with resolved font, color and alignment
    async fn bare_text(&self, attrs: &TextAttrs) -> Text {
        let style = FontStyle::from_weight(&attrs.font_weight);
        let font = self.fonts.resolve(&attrs.font_family, style).await;

        let mut text = Text::new(
            label_for(&attrs.text, "Text"),
            &attrs.text,
            font,
            or_default(attrs.font_size, 14) as f32,
        );
        text.set_color(attrs.text_color.unwrap_or(TEXT_FALLBACK_COLOR));
        text.align = TextAlignHorizontal::from_css(&attrs.text_align);
        text
    }

    async fn input_node(&self, node: &Node, attrs: &InputAttrs) -> Frame {
        let is_placeholder = attrs.value.is_empty() && !attrs.placeholder.is_empty();
        let display = if attrs.value.is_empty() { &attrs.placeholder } else { &attrs.value };

        self.input_box(
            node,
            "Input",
            display,
            is_placeholder,
            attrs.font_size,
            &attrs.font_family,
            attrs.text_color,
        )
        .await
    }

    async fn file_input_node(&self, node: &Node, attrs: &FileInputAttrs) -> Frame {
        // No chosen file shows the button label, styled like a placeholder
        let no_file = attrs.file_name.is_empty();
        let display = if no_file { &attrs.button_text } else { &attrs.file_name };

        self.input_box(
            node,
            "Input",
            display,
            no_file,
            attrs.font_size,
            &attrs.font_family,
            attrs.text_color,
        )
        .await
    }

    async fn select_node(&self, node: &Node, attrs: &SelectAttrs) -> Frame {
        let mut frame = self
            .input_box(
                node,
                "Select",
                &attrs.value,
                false,
                attrs.font_size,
                &attrs.font_family,
                attrs.text_color,
            )
            .await;

        if let Some(SceneNode::Text(text)) = frame.children.last_mut() {
            text.name = "selected-value".to_string();
        }
        frame
    }

    /// Shared input-box construction: white frame, light stroke, rounded
    /// corners, vertically centered display text with a fixed left inset
    async fn input_box(
        &self,
        node: &Node,
        default_name: &str,
        display: &str,
        is_placeholder: bool,
        font_size: i32,
        font_family: &str,
        text_color: Option<Color>,
    ) -> Frame {
        let name = if node.name.is_empty() { default_name } else { &node.name };
        let mut frame = Frame::new(name);
        frame.resize(or_default(node.width, 200) as f32, or_default(node.height, 40) as f32);

        frame.fills = if node.fills.is_empty() {
            vec![Fill::solid(Color::WHITE)]
        } else {
            node.fills.clone()
        };

        if node.strokes.is_empty() {
            frame.strokes = vec![Stroke::solid(INPUT_STROKE_COLOR, 1)];
            frame.stroke_weight = 1.0;
        } else {
            frame.strokes = node.strokes.clone();
            frame.stroke_weight = node.strokes[0].width as f32;
        }

        frame.corner_radius = if node.corner_radius > 0 { node.corner_radius as f32 } else { 4.0 };

        if !display.is_empty() {
            let font = self.fonts.resolve(font_family, FontStyle::Regular).await;
            let text_name = if is_placeholder { "placeholder" } else { "value" };
            let mut text = Text::new(text_name, display, font, or_default(font_size, 14) as f32);

            let color = if is_placeholder {
                PLACEHOLDER_COLOR
            } else {
                text_color.unwrap_or(VALUE_COLOR)
            };
            text.set_color(color);

            text.x = INPUT_TEXT_INSET;
            text.y = (frame.height - text.height) / 2.0;
            frame.append_child(SceneNode::Text(text));
        }

        frame
    }
}

/// Generic frame: the node's box with its own paint applied
fn frame_node(node: &Node) -> Frame {
    let mut frame = Frame::new(if node.name.is_empty() { "Frame" } else { &node.name });
    frame.resize(or_default(node.width, 100) as f32, or_default(node.height, 100) as f32);

    frame.fills = node.fills.clone();
    if !node.strokes.is_empty() {
        frame.strokes = node.strokes.clone();
        frame.stroke_weight = node.strokes[0].width as f32;
    }
    if node.corner_radius > 0 {
        frame.corner_radius = node.corner_radius as f32;
    }

    frame
}

/// Fixed-size neutral-gray stand-in for image content
fn image_placeholder(node: &Node) -> Rectangle {
    let mut rect = Rectangle::new("Image Placeholder");
    rect.resize(or_default(node.width, 100) as f32, or_default(node.height, 100) as f32);
    rect.fills = vec![Fill::solid(IMAGE_PLACEHOLDER_FILL)];
    rect.corner_radius = node.corner_radius.max(0) as f32;
    rect
}

/// Filled rounded rectangle container for button nodes
fn button_node(node: &Node) -> Frame {
    let mut frame = Frame::new("Button");
    frame.resize(or_default(node.width, 100) as f32, or_default(node.height, 40) as f32);

    frame.fills = if node.fills.is_empty() {
        vec![Fill::solid(BUTTON_FILL)]
    } else {
        node.fills.clone()
    };
    frame.corner_radius = if node.corner_radius > 0 { node.corner_radius as f32 } else { 6.0 };

    frame
}

/// First 20 characters of the content, or a fixed label when empty
fn label_for(text: &str, fallback: &str) -> String {
    let label: String = text.chars().take(20).collect();
    if label.is_empty() { fallback.to_string() } else { label }
}

fn or_default(value: i32, default: i32) -> i32 {
    if value > 0 { value } else { default }
}
