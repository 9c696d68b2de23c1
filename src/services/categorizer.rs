use std::collections::HashMap;

use crate::models::{Category, WardrobeItem};

const SHOE_KEYWORDS: &[&str] = &[
    "shoe", "boot", "sneaker", "sandal", "heel", "pump", "loafer", "oxford", "ankle boot",
    "footwear",
];

const DRESS_KEYWORDS: &[&str] = &["dress", "gown", "maxi", "midi dress", "mini dress"];

const OUTERWEAR_KEYWORDS: &[&str] = &[
    "jacket",
    "coat",
    "blazer",
    "cardigan",
    "sweater",
    "hoodie",
    "parka",
    "trench",
    "bomber",
    "denim jacket",
    "leather jacket",
    "outerwear",
];

const BOTTOM_KEYWORDS: &[&str] = &[
    "pant", "jean", "trouser", "short", "skirt", "legging", "bottom", "cargo", "chino",
];

const ACCESSORY_KEYWORDS: &[&str] = &[
    "bag",
    "purse",
    "belt",
    "scarf",
    "hat",
    "jewelry",
    "necklace",
    "bracelet",
    "earring",
    "watch",
    "sunglasses",
    "accessory",
];

const TOP_KEYWORDS: &[&str] = &[
    "shirt", "blouse", "top", "tee", "t-shirt", "tank", "cami", "polo", "tunic", "crop",
];

/// Keyword groups in priority order; the first group with a hit wins
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Shoes, SHOE_KEYWORDS),
    (Category::Dress, DRESS_KEYWORDS),
    (Category::Outerwear, OUTERWEAR_KEYWORDS),
    (Category::Bottom, BOTTOM_KEYWORDS),
    (Category::Accessory, ACCESSORY_KEYWORDS),
    (Category::Top, TOP_KEYWORDS),
];

/// Classifies an item from its name, description and tags
///
/// Total and pure: the same text always yields the same category, and text that
/// matches no keyword group falls through to `Category::Other`.
pub fn categorize(item: &WardrobeItem) -> Category {
    categorize_text(&item.search_text())
}

/// Classifies an already lower-cased search string
pub fn categorize_text(text: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Items grouped by derived category, preserving catalog order within each group
#[derive(Debug, Clone, Default)]
pub struct CategorizedItems {
    groups: HashMap<Category, Vec<WardrobeItem>>,
}

impl CategorizedItems {
    pub fn from_items(items: &[WardrobeItem]) -> Self {
        let mut groups: HashMap<Category, Vec<WardrobeItem>> = HashMap::new();
        for item in items {
            groups.entry(categorize(item)).or_default().push(item.clone());
        }
        Self { groups }
    }

    pub fn get(&self, category: Category) -> &[WardrobeItem] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn tops(&self) -> &[WardrobeItem] {
        self.get(Category::Top)
    }

    pub fn bottoms(&self) -> &[WardrobeItem] {
        self.get(Category::Bottom)
    }

    pub fn dresses(&self) -> &[WardrobeItem] {
        self.get(Category::Dress)
    }

    pub fn shoes(&self) -> &[WardrobeItem] {
        self.get(Category::Shoes)
    }

    pub fn outerwear(&self) -> &[WardrobeItem] {
        self.get(Category::Outerwear)
    }

    /// Number of items per category, for logging
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.get(*category).len()))
            .collect()
    }
}
