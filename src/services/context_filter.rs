use crate::models::{Category, WardrobeItem, Weather};
use crate::services::categorizer::categorize;

/// Below this temperature (°F) warm items are favored
pub const COLD_THRESHOLD_F: f64 = 50.0;
/// Above this temperature (°F) summer items are favored
pub const HOT_THRESHOLD_F: f64 = 75.0;

const WARM_KEYWORDS: &[&str] = &["sweater", "long sleeve", "boot", "closed"];
const SUMMER_KEYWORDS: &[&str] = &["tank", "shorts", "sandal"];
const HEAVY_KEYWORDS: &[&str] = &["heavy", "sweater", "winter"];
const RAIN_READY_KEYWORDS: &[&str] = &["rain", "waterproof"];
const RAIN_SENSITIVE_KEYWORDS: &[&str] = &["suede", "canvas"];

/// Occasion buckets recognised by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccasionKind {
    Work,
    Casual,
    Evening,
    Workout,
    /// Anything else: no filtering
    Unrestricted,
}

impl OccasionKind {
    pub fn from_occasion(occasion: &str) -> Self {
        match occasion.trim().to_lowercase().as_str() {
            "work" | "professional" | "business" => OccasionKind::Work,
            "casual" | "weekend" | "relaxed" => OccasionKind::Casual,
            "date" | "dinner" | "evening" => OccasionKind::Evening,
            "workout" | "gym" | "athletic" => OccasionKind::Workout,
            _ => OccasionKind::Unrestricted,
        }
    }

    /// Whether an item's lower-cased `name + description` suits this occasion
    fn accepts(self, text: &str) -> bool {
        match self {
            OccasionKind::Work => {
                contains_any(
                    text,
                    &["work", "professional", "business", "formal", "blazer", "dress pants"],
                ) || !contains_any(text, &["casual", "athletic"])
            }
            OccasionKind::Casual => {
                contains_any(text, &["casual", "jeans", "t-shirt", "sneaker"])
                    || !text.contains("formal")
            }
            OccasionKind::Evening => {
                contains_any(text, &["elegant", "dress", "nice"])
                    || !contains_any(text, &["casual", "athletic"])
            }
            OccasionKind::Workout => {
                contains_any(text, &["athletic", "sport", "workout", "gym", "running"])
            }
            OccasionKind::Unrestricted => true,
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Drops items unsuitable for the weather; absent weather passes everything through
pub fn filter_by_weather(items: &[WardrobeItem], weather: Option<&Weather>) -> Vec<WardrobeItem> {
    let Some(weather) = weather else {
        return items.to_vec();
    };

    let rainy = weather.is_rainy();
    items
        .iter()
        .filter(|item| suits_temperature(item, weather.temperature))
        .filter(|item| !rainy || suits_rain(item))
        .cloned()
        .collect()
}

fn suits_temperature(item: &WardrobeItem, temperature: f64) -> bool {
    let text = item.descriptive_text();
    if temperature < COLD_THRESHOLD_F {
        categorize(item) == Category::Outerwear
            || contains_any(&text, WARM_KEYWORDS)
            || !contains_any(&text, SUMMER_KEYWORDS)
    } else if temperature > HOT_THRESHOLD_F {
        contains_any(&text, SUMMER_KEYWORDS) || !contains_any(&text, HEAVY_KEYWORDS)
    } else {
        true
    }
}

fn suits_rain(item: &WardrobeItem) -> bool {
    let text = item.descriptive_text();
    categorize(item) == Category::Outerwear
        || contains_any(&text, RAIN_READY_KEYWORDS)
        || !contains_any(&text, RAIN_SENSITIVE_KEYWORDS)
}

/// Keeps items that suit the occasion; absent or unrecognised occasions pass everything through
pub fn filter_by_occasion(items: &[WardrobeItem], occasion: Option<&str>) -> Vec<WardrobeItem> {
    let kind = occasion
        .map(OccasionKind::from_occasion)
        .unwrap_or(OccasionKind::Unrestricted);

    if kind == OccasionKind::Unrestricted {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| kind.accepts(&item.descriptive_text()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> WardrobeItem {
        WardrobeItem::new(id, name)
    }

    fn names(items: &[WardrobeItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_no_weather_passes_through() {
        let items = vec![item("1", "Wool Sweater"), item("2", "Tank Top")];
        assert_eq!(filter_by_weather(&items, None), items);
    }

    #[test]
    fn test_hot_weather_drops_sweaters() {
        let items = vec![
            item("1", "Wool Sweater"),
            item("2", "Linen Shirt"),
            item("3", "Winter Boots"),
            item("4", "Denim Shorts"),
        ];
        let weather = Weather::new(85.0, "Clear");
        let filtered = filter_by_weather(&items, Some(&weather));
        assert_eq!(names(&filtered), vec!["Linen Shirt", "Denim Shorts"]);
    }

    #[test]
    fn test_cold_weather_drops_summer_wear() {
        let items = vec![
            item("1", "Tank Top"),
            item("2", "Leather Sandals"),
            item("3", "Wool Sweater"),
            item("4", "Blue Jeans"),
        ];
        let weather = Weather::new(40.0, "Snow");
        let filtered = filter_by_weather(&items, Some(&weather));
        assert_eq!(names(&filtered), vec!["Wool Sweater", "Blue Jeans"]);
    }

    #[test]
    fn test_mild_weather_keeps_everything() {
        let items = vec![item("1", "Tank Top"), item("2", "Wool Sweater")];
        let weather = Weather::new(65.0, "Cloudy");
        assert_eq!(filter_by_weather(&items, Some(&weather)).len(), 2);
    }

    #[test]
    fn test_rain_drops_suede_but_keeps_outerwear() {
        let items = vec![
            item("1", "Suede Loafers"),
            item("2", "Suede Jacket"),
            item("3", "Canvas Sneakers"),
            item("4", "Waterproof Canvas Boots"),
            item("5", "Cotton Tee"),
        ];
        let weather = Weather::new(60.0, "Light Rain");
        let filtered = filter_by_weather(&items, Some(&weather));
        assert_eq!(
            names(&filtered),
            vec!["Suede Jacket", "Waterproof Canvas Boots", "Cotton Tee"]
        );
    }

    #[test]
    fn test_occasion_buckets() {
        assert_eq!(OccasionKind::from_occasion("Business"), OccasionKind::Work);
        assert_eq!(OccasionKind::from_occasion("weekend"), OccasionKind::Casual);
        assert_eq!(OccasionKind::from_occasion("DINNER"), OccasionKind::Evening);
        assert_eq!(OccasionKind::from_occasion("gym"), OccasionKind::Workout);
        assert_eq!(OccasionKind::from_occasion("wedding"), OccasionKind::Unrestricted);
    }

    #[test]
    fn test_work_drops_casual_and_athletic() {
        let items = vec![
            item("1", "Casual Hoodie"),
            item("2", "Athletic Shorts"),
            item("3", "Casual Blazer"),
            item("4", "White Blouse"),
        ];
        let filtered = filter_by_occasion(&items, Some("work"));
        assert_eq!(names(&filtered), vec!["Casual Blazer", "White Blouse"]);
    }

    #[test]
    fn test_casual_drops_formal() {
        let items = vec![
            item("1", "Formal Gown"),
            item("2", "Formal Sneakers"),
            item("3", "Grey Tee"),
        ];
        let filtered = filter_by_occasion(&items, Some("casual"));
        assert_eq!(names(&filtered), vec!["Formal Sneakers", "Grey Tee"]);
    }

    #[test]
    fn test_date_keeps_elegant() {
        let items = vec![
            item("1", "Casual Dress"),
            item("2", "Athletic Tee"),
            item("3", "Silk Blouse").with_description("nice and elegant"),
        ];
        let filtered = filter_by_occasion(&items, Some("date"));
        assert_eq!(names(&filtered), vec!["Casual Dress", "Silk Blouse"]);
    }

    #[test]
    fn test_workout_requires_sport_keywords() {
        let items = vec![
            item("1", "Running Shoes"),
            item("2", "Gym Shorts"),
            item("3", "Silk Blouse"),
        ];
        let filtered = filter_by_occasion(&items, Some("workout"));
        assert_eq!(names(&filtered), vec!["Running Shoes", "Gym Shorts"]);
    }

    #[test]
    fn test_unknown_or_missing_occasion_passes_through() {
        let items = vec![item("1", "Athletic Tee"), item("2", "Formal Gown")];
        assert_eq!(filter_by_occasion(&items, None).len(), 2);
        assert_eq!(filter_by_occasion(&items, Some("wedding")).len(), 2);
    }
}
