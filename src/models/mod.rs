use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod context;
pub mod wardrobe_item;

pub use context::{RecommendationContext, StylePreference, StylePreferences, TimeOfDay, Weather};
pub use wardrobe_item::{Category, WardrobeItem};

/// An unscored outfit: an ordered list of items with no repeated id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutfitCandidate {
    items: Vec<WardrobeItem>,
}

impl OutfitCandidate {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a candidate, silently dropping any item whose id is already present
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = WardrobeItem>,
    {
        let mut candidate = Self::new();
        for item in items {
            candidate.push(item);
        }
        candidate
    }

    /// Appends an item; returns false if its id was already in the outfit
    pub fn push(&mut self, item: WardrobeItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[WardrobeItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<WardrobeItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set of item ids, used to compare outfits regardless of order
    pub fn id_set(&self) -> HashSet<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }
}

/// Classification of an outfit's palette
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HarmonyType {
    Monochromatic,
    Neutral,
    Balanced,
    Complementary,
    Mixed,
    Unknown,
}

impl HarmonyType {
    /// Fixed score attached to each harmony type
    pub fn score(self) -> f64 {
        match self {
            HarmonyType::Unknown => 0.5,
            HarmonyType::Monochromatic => 0.9,
            HarmonyType::Neutral => 1.0,
            HarmonyType::Balanced => 0.95,
            HarmonyType::Complementary => 0.85,
            HarmonyType::Mixed => 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorHarmony {
    /// In `[0, 1]`, determined by `harmony_type`
    pub score: f64,
    #[serde(rename = "type")]
    pub harmony_type: HarmonyType,
    /// Flavor text; never affects `score` or `harmony_type`
    pub description: String,
}

/// A scored outfit returned to the consumer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub items: Vec<WardrobeItem>,
    /// Additive points, non-negative, no fixed upper bound
    pub score: f64,
    pub reasoning: Vec<String>,
    pub color_harmony: ColorHarmony,
}

impl OutfitRecommendation {
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}
