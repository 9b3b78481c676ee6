//! Recursive-descent extraction of the canonical node tree
//!
//! Owns the visibility pruning rule, the mixed-content resolution rules, and
//! parent-relative coordinate computation. The walk is synchronous and pure
//! over one snapshot; an explicit inherited text color is threaded down the
//! recursion for `currentColor` resolution in vector subtrees.

use crate::extract::classify::{classify, ElementClass};
use crate::extract::style::{
    extract_color, extract_corner_radius, extract_fills, extract_font_size, extract_opacity,
    extract_strokes, first_font_family, normalize_text_align, parse_int_prefix,
};
use crate::extract::svg;
use crate::node::{FileInputAttrs, InputAttrs, Kind, Node, SelectAttrs, TextAttrs};
use crate::render::{Rect, RenderElement};

/// Default color context at the root of the walk
const ROOT_COLOR: &str = "rgb(0, 0, 0)";

/// Label shown on file-input buttons in the destination
const FILE_BUTTON_LABEL: &str = "Choose File";

/// Extract the canonical tree from a render snapshot
///
/// Returns `None` when the root itself is invisible or zero-sized.
pub fn extract(root: &RenderElement) -> Option<Node> {
    traverse(root, None, ROOT_COLOR)
}

fn traverse(el: &RenderElement, parent_rect: Option<&Rect>, inherited_color: &str) -> Option<Node> {
    // Invisible elements are pruned together with their whole subtree; the
    // children are never visited.
    if el.style.display() == "none"
        || el.style.visibility() == "hidden"
        || el.rect.is_collapsed()
    {
        return None;
    }

    let class = classify(el);

    // Text color context for this subtree
    let own_color = el.style.color();
    let current_color = if own_color.is_empty() { inherited_color } else { own_color };

    let kind = match class {
        ElementClass::Frame => Kind::Frame,
        ElementClass::Text => Kind::Text(text_attrs(el, el.inner_text.trim())),
        ElementClass::Image => Kind::Image,
        // currentColor inside the vector refers to the surrounding content's
        // color, not the svg element's own
        ElementClass::Vector => Kind::Vector { svg_string: svg::inline(el, inherited_color) },
        ElementClass::Input => Kind::Input(input_attrs(el)),
        ElementClass::FileInput => Kind::FileInput(file_input_attrs(el)),
        ElementClass::Select => Kind::Select(select_attrs(el)),
    };

    let (x, y) = match parent_rect {
        Some(parent) => (
            (el.rect.x - parent.x).round() as i32,
            (el.rect.y - parent.y).round() as i32,
        ),
        None => (el.rect.x.round() as i32, el.rect.y.round() as i32),
    };

    let mut node = Node {
        name: node_name(el),
        x,
        y,
        width: el.rect.width.round() as i32,
        height: el.rect.height.round() as i32,
        fills: extract_fills(&el.style),
        strokes: extract_strokes(&el.style),
        corner_radius: extract_corner_radius(&el.style),
        opacity: extract_opacity(&el.style),
        children: Vec::new(),
        kind,
    };

    if node.kind.is_container() {
        let mut children: Vec<Node> = el
            .children
            .iter()
            .filter_map(|child| traverse(child, Some(&el.rect), current_color))
            .collect();

        if el.has_direct_text() {
            let has_vector_child = children.iter().any(|c| matches!(c.kind, Kind::Vector { .. }));

            if has_vector_child {
                // Keep the traversed children and place each direct text run
                // by its own range geometry, so icon-adjacent labels land
                // where they rendered.
                for run in &el.text_runs {
                    let text = run.text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    children.push(Node {
                        x: (run.rect.x - el.rect.x).round() as i32,
                        y: (run.rect.y - el.rect.y).round() as i32,
                        width: run.rect.width.round() as i32,
                        height: run.rect.height.round() as i32,
                        ..synthesized_text(el, text)
                    });
                }
            } else {
                // Mixed text and plain inline elements collapse to a single
                // text node carrying the element's full rendered text.
                children.clear();
                children.push(padding_box_text(el));
            }
        } else if children.is_empty() && !el.inner_text.trim().is_empty() {
            // Rendered text without a direct text-node boundary
            children.push(padding_box_text(el));
        }

        if !children.is_empty() {
            node.children = children;
        }
    }

    Some(node)
}

fn node_name(el: &RenderElement) -> String {
    if let Some(class) = el.first_class() {
        return class.to_string();
    }
    if el.tag_name.is_empty() { "element".to_string() } else { el.tag_name.clone() }
}

fn text_attrs(el: &RenderElement, text: &str) -> TextAttrs {
    TextAttrs {
        text: text.to_string(),
        font_size: extract_font_size(&el.style),
        font_family: first_font_family(el.style.font_family()),
        font_weight: font_weight(el),
        text_color: Some(extract_color(el.style.color())),
        text_align: normalize_text_align(el.style.text_align()),
    }
}

fn font_weight(el: &RenderElement) -> String {
    let weight = el.style.font_weight();
    if weight.is_empty() { "400".to_string() } else { weight.to_string() }
}

/// A text node synthesized during mixed-content resolution; bounds are filled
/// in by the caller
fn synthesized_text(el: &RenderElement, text: &str) -> Node {
    Node::new(Kind::Text(text_attrs(el, text)), "text")
}

/// Single text node spanning the element's padding-adjusted content box
fn padding_box_text(el: &RenderElement) -> Node {
    let left = parse_int_prefix(el.style.padding_left()).unwrap_or(0);
    let right = parse_int_prefix(el.style.padding_right()).unwrap_or(0);
    let top = parse_int_prefix(el.style.padding_top()).unwrap_or(0);
    let bottom = parse_int_prefix(el.style.padding_bottom()).unwrap_or(0);

    Node {
        x: left,
        y: top,
        width: el.rect.width.round() as i32 - left - right,
        height: el.rect.height.round() as i32 - top - bottom,
        ..synthesized_text(el, el.inner_text.trim())
    }
}

fn input_attrs(el: &RenderElement) -> InputAttrs {
    let value = el.value.clone().unwrap_or_default();

    // Native date/time widgets live in shadow DOM the snapshot cannot reach,
    // so empty ones get a fixed placeholder per subtype.
    let placeholder = if value.is_empty() {
        match el.input_type.as_deref() {
            Some("date") => "yyyy-mm-dd".to_string(),
            Some("datetime-local") => "yyyy-mm-dd --:--".to_string(),
            Some("time") => "--:--".to_string(),
            Some("month") => "yyyy-mm".to_string(),
            Some("week") => "yyyy-W--".to_string(),
            _ => el.placeholder.clone().unwrap_or_default(),
        }
    } else {
        el.placeholder.clone().unwrap_or_default()
    };

    InputAttrs {
        value,
        placeholder,
        font_size: extract_font_size(&el.style),
        font_family: first_font_family(el.style.font_family()),
        text_color: Some(extract_color(el.style.color())),
    }
}

fn file_input_attrs(el: &RenderElement) -> FileInputAttrs {
    FileInputAttrs {
        file_name: el.files.first().cloned().unwrap_or_default(),
        button_text: FILE_BUTTON_LABEL.to_string(),
        font_size: extract_font_size(&el.style),
        font_family: first_font_family(el.style.font_family()),
        text_color: Some(extract_color(el.style.color())),
    }
}

fn select_attrs(el: &RenderElement) -> SelectAttrs {
    let selected = el.selected_index.and_then(|i| el.options.get(i));

    SelectAttrs {
        value: selected.map(|o| o.label.clone()).unwrap_or_default(),
        selected_value: el.value.clone().unwrap_or_default(),
        font_size: extract_font_size(&el.style),
        font_family: first_font_family(el.style.font_family()),
        text_color: Some(extract_color(el.style.color())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Rect, SelectOption};

    fn visible(tag: &str, x: f64, y: f64, w: f64, h: f64) -> RenderElement {
        RenderElement::new(tag).with_rect(x, y, w, h)
    }

    #[test]
    fn test_invisible_root_yields_nothing() {
        let el = visible("div", 0.0, 0.0, 100.0, 100.0).with_style("display", "none");
        assert!(extract(&el).is_none());

        let el = visible("div", 0.0, 0.0, 100.0, 100.0).with_style("visibility", "hidden");
        assert!(extract(&el).is_none());

        let el = visible("div", 0.0, 0.0, 0.0, 100.0);
        assert!(extract(&el).is_none());
    }

    #[test]
    fn test_hidden_subtree_is_fully_pruned() {
        let root = visible("div", 0.0, 0.0, 200.0, 100.0).with_child(
            visible("div", 0.0, 0.0, 100.0, 50.0)
                .with_style("display", "none")
                .with_child(visible("span", 0.0, 0.0, 40.0, 14.0).with_inner_text("ghost")),
        );

        let node = extract(&root).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_zero_size_children_pruned() {
        let root = visible("div", 0.0, 0.0, 200.0, 100.0)
            .with_child(visible("div", 0.0, 0.0, 100.0, 0.0))
            .with_child(visible("div", 0.0, 0.0, 100.0, 50.0));

        let node = extract(&root).unwrap();
        assert_eq!(node.children.len(), 1);
        assert!(node.children.iter().all(|c| c.width > 0 && c.height > 0));
    }

    #[test]
    fn test_coordinates_are_parent_relative() {
        let root = visible("div", 10.0, 20.0, 300.0, 200.0)
            .with_child(visible("div", 40.0, 50.0, 100.0, 60.0));

        let node = extract(&root).unwrap();
        assert_eq!((node.x, node.y), (10, 20));
        let child = &node.children[0];
        assert_eq!((child.x, child.y), (30, 30));
        assert!(child.x >= 0 && child.x <= node.width);
    }

    #[test]
    fn test_name_prefers_first_class() {
        let el = visible("div", 0.0, 0.0, 10.0, 10.0).with_attribute("class", "card shadow");
        assert_eq!(extract(&el).unwrap().name, "card");

        let el = visible("section", 0.0, 0.0, 10.0, 10.0);
        assert_eq!(extract(&el).unwrap().name, "section");
    }

    #[test]
    fn test_text_node_has_no_children() {
        let el = visible("span", 0.0, 0.0, 50.0, 14.0)
            .with_inner_text("Hello")
            .with_style("font-size", "16px")
            .with_style("font-weight", "700")
            .with_style("color", "rgb(255, 0, 0)")
            .with_style("text-align", "start");

        let node = extract(&el).unwrap();
        assert!(node.children.is_empty());
        match node.kind {
            Kind::Text(attrs) => {
                assert_eq!(attrs.text, "Hello");
                assert_eq!(attrs.font_size, 16);
                assert_eq!(attrs.font_weight, "700");
                assert_eq!(attrs.text_align, "left");
                assert_eq!(attrs.text_color.unwrap().r, 1.0);
            }
            other => panic!("expected TEXT, got {:?}", other),
        }
    }

    #[test]
    fn test_select_options_never_traversed() {
        let mut select = visible("select", 0.0, 0.0, 120.0, 28.0)
            .with_child(visible("option", 0.0, 0.0, 120.0, 20.0).with_inner_text("One"))
            .with_child(visible("option", 0.0, 0.0, 120.0, 20.0).with_inner_text("Two"));
        select.options = vec![
            SelectOption { label: "One".to_string(), value: "1".to_string() },
            SelectOption { label: "Two".to_string(), value: "2".to_string() },
        ];
        select.selected_index = Some(1);
        select.value = Some("2".to_string());

        let node = extract(&select).unwrap();
        assert!(node.children.is_empty());
        match node.kind {
            Kind::Select(attrs) => {
                assert_eq!(attrs.value, "Two");
                assert_eq!(attrs.selected_value, "2");
            }
            other => panic!("expected SELECT, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_content_collapses_to_full_text() {
        let root = visible("div", 0.0, 0.0, 200.0, 40.0)
            .with_inner_text("Hello world")
            .with_text_run("Hello", Rect::new(0.0, 0.0, 40.0, 14.0))
            .with_child(visible("b", 44.0, 0.0, 40.0, 14.0).with_inner_text("world"));

        let node = extract(&root).unwrap();
        assert_eq!(node.children.len(), 1);
        match &node.children[0].kind {
            Kind::Text(attrs) => assert_eq!(attrs.text, "Hello world"),
            other => panic!("expected TEXT, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_content_with_vector_keeps_children() {
        let root = visible("div", 10.0, 10.0, 200.0, 40.0)
            .with_inner_text("Save")
            .with_text_run("Save", Rect::new(40.0, 12.0, 32.0, 16.0))
            .with_child(visible("svg", 14.0, 14.0, 16.0, 16.0));

        let node = extract(&root).unwrap();
        assert_eq!(node.children.len(), 2);
        assert!(matches!(node.children[0].kind, Kind::Vector { .. }));

        let text = &node.children[1];
        match &text.kind {
            Kind::Text(attrs) => assert_eq!(attrs.text, "Save"),
            other => panic!("expected TEXT, got {:?}", other),
        }
        // Positioned by the run's own geometry, relative to the container
        assert_eq!((text.x, text.y), (30, 2));
        assert_eq!((text.width, text.height), (32, 16));
    }

    #[test]
    fn test_childless_frame_with_rendered_text_synthesizes_text() {
        let root = visible("div", 0.0, 0.0, 120.0, 48.0)
            .with_inner_text("Injected")
            .with_style("padding-left", "8px")
            .with_style("padding-right", "8px")
            .with_style("padding-top", "4px")
            .with_style("padding-bottom", "4px");

        let node = extract(&root).unwrap();
        assert_eq!(node.children.len(), 1);
        let text = &node.children[0];
        assert_eq!((text.x, text.y), (8, 4));
        assert_eq!((text.width, text.height), (104, 40));
        assert_eq!(text.name, "text");
    }

    #[test]
    fn test_vector_inherits_surrounding_color() {
        let root = visible("div", 0.0, 0.0, 100.0, 40.0)
            .with_style("color", "rgb(9, 8, 7)")
            .with_child(visible("svg", 0.0, 0.0, 16.0, 16.0).with_style("fill", "currentColor"));

        let node = extract(&root).unwrap();
        match &node.children[0].kind {
            Kind::Vector { svg_string } => assert!(svg_string.contains("rgb(9, 8, 7)")),
            other => panic!("expected VECTOR, got {:?}", other),
        }
    }

    #[test]
    fn test_date_input_placeholder() {
        let mut input = visible("input", 0.0, 0.0, 160.0, 32.0);
        input.input_type = Some("date".to_string());
        input.value = Some(String::new());

        let node = extract(&input).unwrap();
        match node.kind {
            Kind::Input(attrs) => assert_eq!(attrs.placeholder, "yyyy-mm-dd"),
            other => panic!("expected INPUT, got {:?}", other),
        }

        // A filled date input keeps its value and native placeholder
        let mut filled = visible("input", 0.0, 0.0, 160.0, 32.0);
        filled.input_type = Some("date".to_string());
        filled.value = Some("2024-01-01".to_string());
        match extract(&filled).unwrap().kind {
            Kind::Input(attrs) => {
                assert_eq!(attrs.value, "2024-01-01");
                assert_eq!(attrs.placeholder, "");
            }
            other => panic!("expected INPUT, got {:?}", other),
        }
    }

    #[test]
    fn test_file_input_attrs() {
        let mut input = visible("input", 0.0, 0.0, 200.0, 32.0);
        input.input_type = Some("file".to_string());
        input.files = vec!["report.pdf".to_string()];

        let node = extract(&input).unwrap();
        match node.kind {
            Kind::FileInput(attrs) => {
                assert_eq!(attrs.file_name, "report.pdf");
                assert_eq!(attrs.button_text, "Choose File");
            }
            other => panic!("expected FILE_INPUT, got {:?}", other),
        }
    }

    #[test]
    fn test_paint_extraction_on_frame() {
        let el = visible("div", 0.0, 0.0, 100.0, 40.0)
            .with_style("background-color", "rgb(255, 0, 0)")
            .with_style("border-width", "1px")
            .with_style("border-color", "rgb(0, 0, 0)")
            .with_style("border-radius", "6px")
            .with_style("opacity", "0.75");

        let node = extract(&el).unwrap();
        assert_eq!(node.fills.len(), 1);
        assert_eq!(node.strokes.len(), 1);
        assert_eq!(node.corner_radius, 6);
        assert_eq!(node.opacity, 0.75);
    }
}
