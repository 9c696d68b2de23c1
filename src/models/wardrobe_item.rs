use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single clothing or accessory record supplied by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WardrobeItem {
    /// Unique identifier within the catalog; empty until assigned
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Free-text category from the catalog; unreliable, never used for classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, alias = "wearCount", skip_serializing_if = "Option::is_none")]
    pub wear_count: Option<u32>,
}

impl WardrobeItem {
    /// Creates an item with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_wear_count(mut self, wear_count: u32) -> Self {
        self.wear_count = Some(wear_count);
        self
    }

    /// Missing wear counts are treated as never worn
    pub fn is_unworn(&self) -> bool {
        self.wear_count.unwrap_or(0) == 0
    }

    /// Lower-cased `name + description`, used by the occasion and weather rules
    pub fn descriptive_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if let Some(description) = &self.description {
            text.push(' ');
            text.push_str(&description.to_lowercase());
        }
        text
    }

    /// Lower-cased `name + description + tags`, used by the categorizer
    pub fn search_text(&self) -> String {
        let mut text = self.descriptive_text();
        for tag in &self.tags {
            text.push(' ');
            text.push_str(&tag.to_lowercase());
        }
        text
    }
}

/// Closed set of garment categories derived from item text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Dress,
    Shoes,
    Accessory,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Top,
        Category::Bottom,
        Category::Outerwear,
        Category::Dress,
        Category::Shoes,
        Category::Accessory,
        Category::Other,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Outerwear => "Outerwear",
            Category::Dress => "Dress",
            Category::Shoes => "Shoes",
            Category::Accessory => "Accessory",
            Category::Other => "Other",
        };
        write!(f, "{}", label)
    }
}
