//! Font style tiers and the never-fail font resolver

use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Family substituted when a requested font cannot be loaded
pub const DEFAULT_FAMILY: &str = "Inter";

/// Named style tier of a font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Medium,
    Bold,
}

impl FontStyle {
    /// Map a CSS font weight onto a style tier
    ///
    /// Numeric weights are parsed by prefix; keywords and other unparsable
    /// values land in the regular tier.
    pub fn from_weight(weight: &str) -> Self {
        let numeric: i32 = crate::extract::style::parse_int_prefix(weight).unwrap_or(400);
        if numeric >= 700 {
            FontStyle::Bold
        } else if numeric >= 500 {
            FontStyle::Medium
        } else {
            FontStyle::Regular
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Regular => "Regular",
            FontStyle::Medium => "Medium",
            FontStyle::Bold => "Bold",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded font handle: family plus style tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontName {
    pub family: String,
    pub style: FontStyle,
}

/// The requested family/style pair could not be loaded
#[derive(Debug, Error)]
#[error("Font {family} {style} is not available")]
pub struct FontUnavailable {
    pub family: String,
    pub style: FontStyle,
}

/// Asynchronous font-load capability of the destination host
#[async_trait]
pub trait FontLoader: Send + Sync {
    async fn load(&self, family: &str, style: FontStyle) -> Result<(), FontUnavailable>;
}

/// Resolves font requests with a deterministic fallback
///
/// `resolve` never fails: the exact request is attempted first, and on
/// failure the default family is substituted at the same tier. Callers need
/// no failure branch of their own.
pub struct FontResolver<L> {
    loader: L,
}

impl<L: FontLoader> FontResolver<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Resolve a family at a style tier, falling back to the default family
    pub async fn resolve(&self, family: &str, style: FontStyle) -> FontName {
        let family = if family.trim().is_empty() { DEFAULT_FAMILY } else { family };

        match self.loader.load(family, style).await {
            Ok(()) => FontName { family: family.to_string(), style },
            Err(err) => {
                log::debug!("{}, substituting {}", err, DEFAULT_FAMILY);
                FontName { family: DEFAULT_FAMILY.to_string(), style }
            }
        }
    }
}

/// In-process font inventory implementing [`FontLoader`]
///
/// Stands in for the design tool's font service in tests and the CLI. The
/// default catalog carries the default family at every tier.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    available: HashSet<(String, FontStyle)>,
}

impl FontCatalog {
    pub fn empty() -> Self {
        Self { available: HashSet::new() }
    }

    /// Builder method: register a family at all three tiers
    pub fn with_family(mut self, family: &str) -> Self {
        for style in [FontStyle::Regular, FontStyle::Medium, FontStyle::Bold] {
            self.available.insert((family.to_string(), style));
        }
        self
    }

    /// Builder method: register a single family/style pair
    pub fn with_font(mut self, family: &str, style: FontStyle) -> Self {
        self.available.insert((family.to_string(), style));
        self
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::empty().with_family(DEFAULT_FAMILY)
    }
}

#[async_trait]
impl FontLoader for FontCatalog {
    async fn load(&self, family: &str, style: FontStyle) -> Result<(), FontUnavailable> {
        if self.available.contains(&(family.to_string(), style)) {
            Ok(())
        } else {
            Err(FontUnavailable { family: family.to_string(), style })
        }
    }
}
