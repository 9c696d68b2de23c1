use crate::models::{RecommendationContext, WardrobeItem};
use crate::services::palette::colors_compatible;

const COLOR_MATCH_POINTS: u32 = 50;
const OCCASION_MATCH_POINTS: u32 = 30;
const UNWORN_POINTS: u32 = 20;
const SAME_BRAND_POINTS: u32 = 10;

/// Scores how well `candidate` pairs with `reference`
///
/// Only the candidate's wear count is considered, so the score is not symmetric.
pub fn match_score(
    reference: &WardrobeItem,
    candidate: &WardrobeItem,
    context: &RecommendationContext,
) -> u32 {
    let mut score = 0;

    if colors_compatible(reference.color.as_deref(), candidate.color.as_deref()) {
        score += COLOR_MATCH_POINTS;
    }

    if let Some(occasion) = context.occasion() {
        let occasion = occasion.to_lowercase();
        if reference.name.to_lowercase().contains(&occasion)
            || candidate.name.to_lowercase().contains(&occasion)
        {
            score += OCCASION_MATCH_POINTS;
        }
    }

    if candidate.is_unworn() {
        score += UNWORN_POINTS;
    }

    if let (Some(a), Some(b)) = (&reference.brand, &candidate.brand) {
        if a == b {
            score += SAME_BRAND_POINTS;
        }
    }

    score
}

/// Returns the candidate with the highest `match_score`; the first maximum wins ties
pub fn find_best_match<'a>(
    reference: &WardrobeItem,
    candidates: &'a [WardrobeItem],
    context: &RecommendationContext,
) -> Option<&'a WardrobeItem> {
    let mut best: Option<(&WardrobeItem, u32)> = None;

    for candidate in candidates {
        let score = match_score(reference, candidate, context);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(item, _)| item)
}
