//! Element classification
//!
//! Maps each snapshot element onto a primitive class using a fixed tag
//! precedence. The decision is a pure function of the element, so repeated
//! classification of an unchanged element always agrees.

use crate::render::RenderElement;

/// Primitive class an element resolves to during extraction
///
/// `Button` exists only on the wire (hand-authored payloads); the classifier
/// treats button tags as text or frames like any other inline tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    Frame,
    Text,
    Image,
    Vector,
    Input,
    FileInput,
    Select,
}

/// Tags whose content is treated as text when they hold no child elements
/// or carry a direct text node
const TEXT_TAGS: &[&str] = &[
    "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "label", "a", "button", "li", "strong", "em",
    "b", "i",
];

/// Classify an element; first match in the fixed precedence wins
pub fn classify(el: &RenderElement) -> ElementClass {
    match el.tag_name.as_str() {
        "img" => return ElementClass::Image,
        "svg" => return ElementClass::Vector,
        "input" => {
            if el.input_type.as_deref() == Some("file") {
                return ElementClass::FileInput;
            }
            return ElementClass::Input;
        }
        "textarea" => return ElementClass::Input,
        "select" => return ElementClass::Select,
        // Structural containers are never reinterpreted as text, so layout
        // nesting survives the conversion
        "div" => return ElementClass::Frame,
        _ => {}
    }

    // A text tag wrapping a vector is forced to a frame so the vector is
    // extracted as a sibling instead of being swallowed into flattened text
    if TEXT_TAGS.contains(&el.tag_name.as_str()) && !el.has_descendant("svg") {
        if el.children.is_empty() && !el.inner_text.trim().is_empty() {
            return ElementClass::Text;
        }
        if el.has_direct_text() {
            return ElementClass::Text;
        }
    }

    ElementClass::Frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rect;

    #[test]
    fn test_classify_media_tags() {
        assert_eq!(classify(&RenderElement::new("img")), ElementClass::Image);
        assert_eq!(classify(&RenderElement::new("svg")), ElementClass::Vector);
    }

    #[test]
    fn test_classify_inputs() {
        let mut input = RenderElement::new("input");
        input.input_type = Some("text".to_string());
        assert_eq!(classify(&input), ElementClass::Input);

        input.input_type = Some("file".to_string());
        assert_eq!(classify(&input), ElementClass::FileInput);

        // Missing type property still classifies as a plain input
        assert_eq!(classify(&RenderElement::new("input")), ElementClass::Input);
        assert_eq!(classify(&RenderElement::new("textarea")), ElementClass::Input);
    }

    #[test]
    fn test_classify_select() {
        assert_eq!(classify(&RenderElement::new("select")), ElementClass::Select);
    }

    #[test]
    fn test_div_is_always_frame() {
        let div = RenderElement::new("div").with_inner_text("Some text");
        assert_eq!(classify(&div), ElementClass::Frame);
    }

    #[test]
    fn test_text_tag_leaf_with_text() {
        let span = RenderElement::new("span").with_inner_text("Hello");
        assert_eq!(classify(&span), ElementClass::Text);

        let empty = RenderElement::new("span").with_inner_text("   ");
        assert_eq!(classify(&empty), ElementClass::Frame);
    }

    #[test]
    fn test_text_tag_with_direct_text_and_children() {
        let p = RenderElement::new("p")
            .with_inner_text("Hello world")
            .with_text_run("Hello ", Rect::new(0.0, 0.0, 40.0, 14.0))
            .with_child(RenderElement::new("b").with_inner_text("world"));
        assert_eq!(classify(&p), ElementClass::Text);
    }

    #[test]
    fn test_text_tag_with_only_element_children() {
        let a = RenderElement::new("a")
            .with_child(RenderElement::new("span").with_inner_text("nested"));
        // innerText reflects the descendant, but there is no direct text node
        let a = a.with_inner_text("nested");
        assert_eq!(classify(&a), ElementClass::Frame);
    }

    #[test]
    fn test_text_tag_with_vector_descendant_is_frame() {
        let button = RenderElement::new("button")
            .with_inner_text("Save")
            .with_text_run("Save", Rect::new(20.0, 0.0, 30.0, 14.0))
            .with_child(RenderElement::new("svg"));
        assert_eq!(classify(&button), ElementClass::Frame);
    }

    #[test]
    fn test_unknown_tag_is_frame() {
        assert_eq!(classify(&RenderElement::new("section")), ElementClass::Frame);
        assert_eq!(classify(&RenderElement::new("td")), ElementClass::Frame);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let el = RenderElement::new("h2").with_inner_text("Title");
        assert_eq!(classify(&el), classify(&el));
    }
}
