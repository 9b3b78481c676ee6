//! Vector subtree inlining
//!
//! The destination cannot evaluate inherited or computed style, so a vector
//! subtree is serialized with its resolved paint baked onto every node as
//! literal attributes. The snapshot tree is owned, so the serialization walks
//! the original elements directly; there is no clone-to-original matching
//! step that could pair elements up wrongly.

use crate::render::RenderElement;
use std::fmt::Write;

/// Serialize a vector element to self-contained markup
///
/// `inherited_color` is the resolved text color of the surrounding content,
/// substituted wherever a paint property is `currentColor`.
pub fn inline(svg: &RenderElement, inherited_color: &str) -> String {
    let mut out = String::new();
    write_element(&mut out, svg, inherited_color);
    out
}

fn write_element(out: &mut String, el: &RenderElement, inherited_color: &str) {
    let _ = write!(out, "<{}", el.tag_name);

    // Markup attributes first; resolved paint overrides same-named ones below
    let overrides = resolve_paint(el, inherited_color);
    for (key, value) in &el.attributes {
        if overrides.iter().any(|(name, _)| name == key) {
            continue;
        }
        let _ = write!(out, " {}=\"{}\"", key, escape(value));
    }
    for (key, value) in &overrides {
        let _ = write!(out, " {}=\"{}\"", key, escape(value));
    }

    if el.children.is_empty() && el.text_runs.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for run in &el.text_runs {
        out.push_str(&escape(run.text.trim()));
    }
    for child in &el.children {
        write_element(out, child, inherited_color);
    }
    let _ = write!(out, "</{}>", el.tag_name);
}

/// Resolved paint attributes for one element, in output order
fn resolve_paint(el: &RenderElement, inherited_color: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let style = &el.style;

    let fill = style.fill();
    if fill == "none" {
        attrs.push(("fill".to_string(), "none".to_string()));
    } else if let Some(resolved) = resolve_color(fill, inherited_color) {
        attrs.push(("fill".to_string(), resolved));
    }

    let stroke = style.stroke();
    if stroke != "none" {
        if let Some(resolved) = resolve_color(stroke, inherited_color) {
            attrs.push(("stroke".to_string(), resolved));
        }
    }

    let stroke_width = style.stroke_width();
    if !stroke_width.is_empty() && stroke_width != "0px" {
        attrs.push(("stroke-width".to_string(), stroke_width.to_string()));
    }

    let fill_opacity = style.fill_opacity();
    if !fill_opacity.is_empty() && fill_opacity != "1" {
        attrs.push(("fill-opacity".to_string(), fill_opacity.to_string()));
    }

    let stroke_opacity = style.stroke_opacity();
    if !stroke_opacity.is_empty() && stroke_opacity != "1" {
        attrs.push(("stroke-opacity".to_string(), stroke_opacity.to_string()));
    }

    attrs
}

/// Resolve a computed paint value to a literal color, if it names one
fn resolve_color(value: &str, inherited_color: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case("currentcolor") || value.to_lowercase().contains("currentcolor") {
        return Some(inherited_color.to_string());
    }
    if value.starts_with("rgb") {
        return Some(value.to_string());
    }
    None
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
