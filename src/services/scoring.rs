use std::collections::HashSet;

use rand::Rng;

use crate::models::{Category, OutfitCandidate, OutfitRecommendation, RecommendationContext};
use crate::services::{categorizer::categorize, harmony};

const HARMONY_WEIGHT: f64 = 30.0;
const OCCASION_POINTS: f64 = 20.0;
const WEATHER_POINTS: f64 = 20.0;
const UNWORN_ITEM_POINTS: f64 = 10.0;
const CORE_PIECES_POINTS: f64 = 20.0;

/// Categories that make an outfit complete
const CORE_PIECES: [Category; 3] = [Category::Top, Category::Bottom, Category::Shoes];

/// Scores a candidate and explains the score
pub fn score_outfit<R: Rng>(
    candidate: OutfitCandidate,
    context: &RecommendationContext,
    rng: &mut R,
) -> OutfitRecommendation {
    let color_harmony = harmony::analyze(candidate.items(), rng);
    let mut score = color_harmony.score * HARMONY_WEIGHT;
    let mut reasoning = vec![color_harmony.description.clone()];

    if let Some(occasion) = context.occasion() {
        score += OCCASION_POINTS;
        reasoning.push(format!("Perfect for {}", occasion));
    }

    if let Some(weather) = &context.weather {
        score += WEATHER_POINTS;
        reasoning.push(format!("Suitable for {}°F weather", weather.temperature));
    }

    let unworn = candidate.items().iter().filter(|item| item.is_unworn()).count();
    score += unworn as f64 * UNWORN_ITEM_POINTS;
    if unworn > 0 {
        reasoning.push(format!("Includes {} unworn item(s)", unworn));
    }

    let categories: HashSet<Category> = candidate.items().iter().map(categorize).collect();
    if CORE_PIECES.iter().all(|category| categories.contains(category)) {
        score += CORE_PIECES_POINTS;
    }

    OutfitRecommendation {
        items: candidate.into_items(),
        score,
        reasoning,
        color_harmony,
    }
}
