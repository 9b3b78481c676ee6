use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved computed-style snapshot for one element
///
/// Property names are the CSS property names as reported by the page
/// (`background-color`, `font-size`, ...). Values are kept verbatim; all
/// parsing happens in the extraction layer. Insertion order is preserved so
/// serialized snapshots stay readable and diffable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputedStyle {
    properties: IndexMap<String, String>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw property value, empty string when absent
    pub fn get(&self, property: &str) -> &str {
        self.properties.get(property).map(String::as_str).unwrap_or("")
    }

    /// Set a property value (snapshot construction and tests)
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Builder method: set a property value
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn display(&self) -> &str {
        self.get("display")
    }

    pub fn visibility(&self) -> &str {
        self.get("visibility")
    }

    pub fn background_color(&self) -> &str {
        self.get("background-color")
    }

    pub fn border_color(&self) -> &str {
        self.get("border-color")
    }

    pub fn border_width(&self) -> &str {
        self.get("border-width")
    }

    pub fn border_radius(&self) -> &str {
        self.get("border-radius")
    }

    pub fn opacity(&self) -> &str {
        self.get("opacity")
    }

    pub fn color(&self) -> &str {
        self.get("color")
    }

    pub fn font_size(&self) -> &str {
        self.get("font-size")
    }

    pub fn font_family(&self) -> &str {
        self.get("font-family")
    }

    pub fn font_weight(&self) -> &str {
        self.get("font-weight")
    }

    pub fn text_align(&self) -> &str {
        self.get("text-align")
    }

    pub fn padding_left(&self) -> &str {
        self.get("padding-left")
    }

    pub fn padding_right(&self) -> &str {
        self.get("padding-right")
    }

    pub fn padding_top(&self) -> &str {
        self.get("padding-top")
    }

    pub fn padding_bottom(&self) -> &str {
        self.get("padding-bottom")
    }

    pub fn fill(&self) -> &str {
        self.get("fill")
    }

    pub fn stroke(&self) -> &str {
        self.get("stroke")
    }

    pub fn stroke_width(&self) -> &str {
        self.get("stroke-width")
    }

    pub fn fill_opacity(&self) -> &str {
        self.get("fill-opacity")
    }

    pub fn stroke_opacity(&self) -> &str {
        self.get("stroke-opacity")
    }
}
