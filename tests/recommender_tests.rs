use std::collections::HashSet;

use outfit_api::models::{
    Category, HarmonyType, OutfitRecommendation, RecommendationContext, WardrobeItem, Weather,
};
use outfit_api::services::{
    categorize,
    categorizer::CategorizedItems,
    colors_compatible,
    combinations::CombinationGenerator,
    context_filter::{filter_by_occasion, filter_by_weather},
    harmony,
    ranking::{rank, select_diverse},
    Recommender,
};
use rand::{rngs::StdRng, SeedableRng};

fn item(id: &str, name: &str, color: &str) -> WardrobeItem {
    WardrobeItem::new(id, name).with_color(color)
}

fn mixed_wardrobe() -> Vec<WardrobeItem> {
    vec![
        item("t1", "White Shirt", "white"),
        item("t2", "Red Tee", "red"),
        item("t3", "Yellow Blouse", "yellow"),
        item("b1", "Blue Jeans", "dark blue"),
        item("b2", "Green Skirt", "green"),
        item("b3", "Beige Chinos", "beige"),
        item("d1", "Black Midi Dress", "black"),
        item("s1", "White Sneakers", "white").with_wear_count(4),
        item("s2", "Brown Loafers", "brown"),
        item("o1", "Navy Blazer", "navy"),
        item("o2", "Wool Sweater", "gray"),
        item("a1", "Leather Belt", "brown"),
    ]
}

fn contexts() -> Vec<RecommendationContext> {
    vec![
        RecommendationContext::new(),
        RecommendationContext::new().with_occasion("work"),
        RecommendationContext::new().with_occasion("casual"),
        RecommendationContext::new().with_weather(Weather::new(40.0, "Rain")),
        RecommendationContext::new()
            .with_occasion("date")
            .with_weather(Weather::new(85.0, "Clear")),
    ]
}

#[test]
fn test_end_to_end_work_example() {
    let items = vec![
        item("1", "Black Blazer", "Black"),
        item("2", "White Blouse", "White"),
        item("3", "Black Trousers", "Black"),
        item("4", "Black Heels", "Black"),
    ];
    let categories: Vec<Category> = items.iter().map(categorize).collect();
    assert_eq!(
        categories,
        vec![
            Category::Outerwear,
            Category::Top,
            Category::Bottom,
            Category::Shoes
        ]
    );

    let context = RecommendationContext::new().with_occasion("work");
    for seed in 0..10 {
        let outfit = Recommender::seeded(seed)
            .generate_smart_outfit(&items, &context)
            .unwrap();
        let ids: HashSet<&str> = outfit.item_ids().collect();
        assert!(ids.is_superset(&HashSet::from(["2", "3", "4"])));
        assert_eq!(outfit.color_harmony.harmony_type, HarmonyType::Neutral);
        assert_eq!(outfit.color_harmony.score, 1.0);
    }
}

#[test]
fn test_null_on_empty_input() {
    let mut recommender = Recommender::seeded(0);
    for context in contexts() {
        assert!(recommender.generate_smart_outfit(&[], &context).is_none());
        assert!(recommender.generate_multiple_outfits(&[], &context, 3).is_empty());
    }
}

#[test]
fn test_generated_candidates_never_repeat_items() {
    let items = mixed_wardrobe();
    for context in contexts() {
        let pool = filter_by_occasion(
            &filter_by_weather(&items, context.weather.as_ref()),
            context.occasion(),
        );
        let categorized = CategorizedItems::from_items(&pool);
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let candidates = CombinationGenerator::new(&pool, &categorized, &context)
                .with_max_combinations(10)
                .generate(&mut rng);
            assert!(candidates.len() <= 10);
            for candidate in candidates {
                assert_eq!(candidate.id_set().len(), candidate.len());
            }
        }
    }
}

#[test]
fn test_recommendations_never_repeat_items() {
    let items = mixed_wardrobe();
    for context in contexts() {
        let outfits = Recommender::seeded(17).generate_multiple_outfits(&items, &context, 4);
        assert!(outfits.len() <= 4);
        for outfit in outfits {
            let ids: HashSet<&str> = outfit.item_ids().collect();
            assert_eq!(ids.len(), outfit.items.len());
            assert!(outfit.score >= 0.0);
        }
    }
}

#[test]
fn test_color_compatibility_symmetry() {
    let colors = [
        "black", "white", "gray", "light gray", "beige", "navy", "brown", "cream", "red",
        "dark red", "blue", "light blue", "yellow", "green", "dark green", "pink", "purple",
        "orange", "teal", "",
    ];
    for a in colors {
        for b in colors {
            assert_eq!(colors_compatible(Some(a), Some(b)), colors_compatible(Some(b), Some(a)));
        }
        assert_eq!(colors_compatible(Some(a), None), colors_compatible(None, Some(a)));
    }
}

#[test]
fn test_neutral_palettes_score_one() {
    let neutrals = ["black", "white", "gray", "beige", "navy", "brown", "cream"];
    let mut rng = StdRng::seed_from_u64(3);
    for a in neutrals {
        for b in neutrals {
            let items = vec![item("1", "Shirt", a), item("2", "Jeans", b)];
            let result = harmony::analyze(&items, &mut rng);
            assert_eq!(result.harmony_type, HarmonyType::Neutral);
            assert_eq!(result.score, 1.0);
        }
    }
}

#[test]
fn test_diversity_bound() {
    let items = mixed_wardrobe();
    let context = RecommendationContext::new();
    let mut rng = StdRng::seed_from_u64(8);
    let categorized = CategorizedItems::from_items(&items);
    let candidates = CombinationGenerator::new(&items, &categorized, &context)
        .with_max_combinations(9)
        .generate(&mut rng);
    let ranked: Vec<OutfitRecommendation> = rank(
        candidates
            .into_iter()
            .map(|c| outfit_api::services::scoring::score_outfit(c, &context, &mut rng))
            .collect(),
    );
    assert!(!ranked.is_empty());
    for count in 1..12 {
        assert_eq!(select_diverse(&ranked, count).len(), count.min(ranked.len()));
    }
}

#[test]
fn test_hot_weather_pool_excludes_sweaters() {
    let items = mixed_wardrobe();
    let weather = Weather::new(85.0, "Clear");
    let pool = filter_by_weather(&items, Some(&weather));
    assert!(pool
        .iter()
        .all(|item| !item.name.to_lowercase().contains("sweater")));

    let context = RecommendationContext::new().with_weather(weather);
    for seed in 0..5 {
        for outfit in Recommender::seeded(seed).generate_multiple_outfits(&items, &context, 3) {
            assert!(outfit.items.iter().all(|item| item.id != "o2"));
        }
    }
}

#[test]
fn test_same_seed_reproduces_recommendations() {
    let items = mixed_wardrobe();
    for context in contexts() {
        let first = Recommender::seeded(99).generate_multiple_outfits(&items, &context, 3);
        let second = Recommender::seeded(99).generate_multiple_outfits(&items, &context, 3);
        assert_eq!(first, second);
    }
}
