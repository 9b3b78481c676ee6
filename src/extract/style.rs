//! Normalized paint and typography parsing over raw computed-style values

use crate::node::{Color, Fill, Stroke};
use crate::render::ComputedStyle;
use regex::Regex;
use std::sync::LazyLock;

/// Matches the leading numeric triple of an rgb()/rgba() function
static RGB_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)").unwrap());

/// Parse a CSS color string into a normalized color triple
///
/// Only the rgb()/rgba() form is recognized; anything else (including the
/// empty string) resolves to black.
pub fn extract_color(color: &str) -> Color {
    match RGB_TRIPLE.captures(color) {
        Some(caps) => Color {
            r: channel(&caps[1]),
            g: channel(&caps[2]),
            b: channel(&caps[3]),
        },
        None => Color::BLACK,
    }
}

fn channel(digits: &str) -> f32 {
    let value: u32 = digits.parse().unwrap_or(0);
    value.min(255) as f32 / 255.0
}

/// Background color as a fill list; transparent backgrounds yield nothing
pub fn extract_fills(style: &ComputedStyle) -> Vec<Fill> {
    let bg = style.background_color();
    if bg.is_empty() || bg == "transparent" || bg == "rgba(0, 0, 0, 0)" {
        return Vec::new();
    }

    vec![Fill::solid(extract_color(bg))]
}

/// Border as a stroke list; zero or unparsable width yields nothing
pub fn extract_strokes(style: &ComputedStyle) -> Vec<Stroke> {
    let width = parse_int_prefix(style.border_width()).unwrap_or(0);
    if width == 0 {
        return Vec::new();
    }

    vec![Stroke::solid(extract_color(style.border_color()), width)]
}

/// Border radius as a non-negative integer; unparsable input yields 0
pub fn extract_corner_radius(style: &ComputedStyle) -> i32 {
    parse_int_prefix(style.border_radius()).unwrap_or(0).max(0)
}

/// Element opacity in (0, 1]; zero or unparsable input yields 1
pub fn extract_opacity(style: &ComputedStyle) -> f32 {
    style
        .opacity()
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| *v > 0.0)
        .unwrap_or(1.0)
}

/// Map logical alignment keywords onto physical ones
pub fn normalize_text_align(align: &str) -> String {
    match align {
        "start" => "left".to_string(),
        "end" => "right".to_string(),
        "" => "left".to_string(),
        other => other.to_string(),
    }
}

/// First comma segment of a font-family list, quotes stripped
pub fn first_font_family(family: &str) -> String {
    let first = family
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim();

    if first.is_empty() { "Inter".to_string() } else { first.to_string() }
}

/// Font size in pixels, defaulting to 14
pub fn extract_font_size(style: &ComputedStyle) -> i32 {
    match parse_int_prefix(style.font_size()) {
        Some(size) if size > 0 => size,
        _ => 14,
    }
}

/// Integer prefix of a CSS length value ("12px" -> 12), like parseInt
pub fn parse_int_prefix(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c == '-' && i == 0 {
            end = 1;
        } else if c.is_ascii_digit() {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }

    trimmed[..end].parse().ok()
}
