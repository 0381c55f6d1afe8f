use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display label for items whose feed entry carries no source.
pub const UNKNOWN_SOURCE: &str = "unknown";

// ============================================================================
// Error Types
// ============================================================================

/// A category key outside the closed set of three.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category key: {0:?} (expected ai_biomed, microfluidics or bioinfo)")]
pub struct UnknownCategory(pub String);

// ============================================================================
// Category
// ============================================================================

/// Topic partition of the digest.
///
/// The set is closed: documents and UI state can only ever refer to these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    AiBiomed,
    Microfluidics,
    Bioinfo,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [
        Category::AiBiomed,
        Category::Microfluidics,
        Category::Bioinfo,
    ];

    /// Key used in the JSON document, element ids and `data-cat` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Category::AiBiomed => "ai_biomed",
            Category::Microfluidics => "microfluidics",
            Category::Bioinfo => "bioinfo",
        }
    }

    /// Human-readable tab and section label.
    pub fn label(self) -> &'static str {
        match self {
            Category::AiBiomed => "AI (Biomedical)",
            Category::Microfluidics => "Microfluidics",
            Category::Bioinfo => "Bioinformatics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Item
// ============================================================================

/// One article or paper from the digest.
///
/// Every field tolerates being absent, `null` or of the wrong JSON type in the
/// source; such values read as absent. Display fallbacks are applied by the
/// accessors at render time, not at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub time: Option<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub cover: Option<String>,
}

impl Item {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Raw source, empty when absent. Used for search.
    pub fn source_text(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// Source for display, falling back to [`UNKNOWN_SOURCE`].
    pub fn source_label(&self) -> &str {
        non_blank(self.source.as_deref()).unwrap_or(UNKNOWN_SOURCE)
    }

    pub fn published(&self) -> Option<&str> {
        non_blank(self.time.as_deref())
    }

    pub fn cover_url(&self) -> Option<&str> {
        non_blank(self.cover.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Feed Document
// ============================================================================

/// Items of one document, keyed by category.
///
/// Keys outside the closed set are dropped during deserialization. A category
/// value that is not a list reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryItems {
    #[serde(deserialize_with = "lenient_items")]
    pub ai_biomed: Vec<Item>,
    #[serde(deserialize_with = "lenient_items")]
    pub microfluidics: Vec<Item>,
    #[serde(deserialize_with = "lenient_items")]
    pub bioinfo: Vec<Item>,
}

impl CategoryItems {
    pub fn get(&self, category: Category) -> &[Item] {
        match category {
            Category::AiBiomed => &self.ai_biomed,
            Category::Microfluidics => &self.microfluidics,
            Category::Bioinfo => &self.bioinfo,
        }
    }

    /// Total number of items across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// One day's digest as published under `data/<date>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedDocument {
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(deserialize_with = "lenient_category_items")]
    pub items: CategoryItems,
}

impl FeedDocument {
    /// Document mounted when neither the requested day nor the day before could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.total() == 0
    }
}

// ============================================================================
// Lenient Field Readers
// ============================================================================
//
// The document is produced by an external job and is rendered as-is. A field
// of the wrong type degrades to its default instead of failing the whole day.

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Keeps the string elements of a list; anything else is no tags.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Non-object entries keep their slot as an all-default item.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|v| Item::deserialize(v).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_category_items<'de, D>(deserializer: D) -> Result<CategoryItems, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => CategoryItems::deserialize(value).unwrap_or_default(),
        _ => CategoryItems::default(),
    })
}

// ============================================================================
// Tests
// ============================================================================
