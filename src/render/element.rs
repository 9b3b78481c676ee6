use crate::error::{ConvertError, Result};
use crate::render::style::ComputedStyle;
use headless_chrome::Tab;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Viewport-relative bounding rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rect collapses to nothing once rounded to integers
    pub fn is_collapsed(&self) -> bool {
        self.width.round() as i64 == 0 || self.height.round() as i64 == 0
    }
}

/// A direct text node of an element, with its own range geometry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub rect: Rect,
}

/// One option of a select element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// One element of the render snapshot
///
/// Carries everything the extraction pass needs: tag identity, attributes,
/// the computed-style snapshot, viewport geometry, rendered text, direct text
/// runs, and form state for inputs and selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderElement {
    /// Lower-cased tag name (e.g., "div", "svg", "input")
    pub tag_name: String,

    /// Markup attributes in document order
    pub attributes: IndexMap<String, String>,

    /// Computed-style snapshot for this element
    pub style: ComputedStyle,

    /// Viewport-relative bounding box
    pub rect: Rect,

    /// Full rendered text of the subtree, as the page lays it out
    pub inner_text: String,

    /// Direct text node children with their own geometry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_runs: Vec<TextRun>,

    /// Current value for inputs, textareas and selects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Placeholder attribute for inputs and textareas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// The `type` property of input elements ("text", "file", "date", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// Names of files chosen in a file input
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Options of a select element, in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    /// Index of the selected option, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_index: Option<usize>,

    /// Child elements in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderElement>,
}

impl RenderElement {
    /// Create a bare element with the given tag
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self { tag_name: tag_name.into(), ..Default::default() }
    }

    /// Capture the render snapshot of a browser tab
    ///
    /// Runs the capture script inside the page so every style and geometry
    /// read happens against one consistent layout state.
    pub fn from_tab(tab: &Arc<Tab>) -> Result<Self> {
        // JavaScript code that snapshots the render tree as a JSON string
        let js_code = include_str!("snapshot.js");

        let result = tab.evaluate(js_code, false).map_err(|e| {
            ConvertError::SnapshotFailed(format!("Failed to execute capture script: {}", e))
        })?;

        let json_value = result.value.ok_or_else(|| {
            ConvertError::SnapshotFailed("No value returned from capture script".to_string())
        })?;

        // The script returns a JSON string, so unwrap the string first
        let json_str: String = serde_json::from_value(json_value)
            .map_err(|e| ConvertError::SnapshotFailed(format!("Failed to get JSON string: {}", e)))?;

        let root: RenderElement = serde_json::from_str(&json_str)
            .map_err(|e| ConvertError::SnapshotFailed(format!("Failed to parse snapshot: {}", e)))?;

        Ok(root)
    }

    /// Builder method: set the bounding box
    pub fn with_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::new(x, y, width, height);
        self
    }

    /// Builder method: set a computed-style property
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Builder method: set a markup attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder method: set the rendered text
    pub fn with_inner_text(mut self, text: impl Into<String>) -> Self {
        self.inner_text = text.into();
        self
    }

    /// Builder method: add a direct text run
    pub fn with_text_run(mut self, text: impl Into<String>, rect: Rect) -> Self {
        self.text_runs.push(TextRun { text: text.into(), rect });
        self
    }

    /// Builder method: append a child element
    pub fn with_child(mut self, child: RenderElement) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method: set the input value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// First class token of the element, if any
    pub fn first_class(&self) -> Option<&str> {
        self.get_attribute("class").and_then(|c| c.split_whitespace().next())
    }

    /// Whether any direct text node has non-whitespace content
    pub fn has_direct_text(&self) -> bool {
        self.text_runs.iter().any(|run| !run.text.trim().is_empty())
    }

    /// Whether any descendant element has the given tag
    pub fn has_descendant(&self, tag: &str) -> bool {
        self.children.iter().any(|c| c.is_tag(tag) || c.has_descendant(tag))
    }
}
