use std::collections::HashSet;

use crate::models::OutfitRecommendation;

/// Candidates sharing this fraction of items (or more) with earlier picks are deferred
pub const MAX_OVERLAP_RATIO: f64 = 0.5;

/// Stable sort by score, highest first
pub fn rank(mut recommendations: Vec<OutfitRecommendation>) -> Vec<OutfitRecommendation> {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations
}

/// Picks up to `count` ranked outfits, preferring ones that reuse few items
///
/// A first pass accepts outfits whose overlap with already-used items is below
/// `MAX_OVERLAP_RATIO`. If that leaves fewer than `count`, the skipped outfits are
/// appended in rank order. Returns `min(count, ranked.len())` outfits.
pub fn select_diverse(ranked: &[OutfitRecommendation], count: usize) -> Vec<OutfitRecommendation> {
    let mut selected: Vec<usize> = Vec::with_capacity(count.min(ranked.len()));
    let mut used_ids: HashSet<&str> = HashSet::new();

    for (index, outfit) in ranked.iter().enumerate() {
        if selected.len() >= count {
            break;
        }
        if overlap_ratio(outfit, &used_ids) < MAX_OVERLAP_RATIO {
            used_ids.extend(outfit.item_ids());
            selected.push(index);
        }
    }

    if selected.len() < count {
        for index in 0..ranked.len() {
            if selected.len() >= count {
                break;
            }
            if !selected.contains(&index) {
                selected.push(index);
            }
        }
    }

    tracing::debug!(
        available = ranked.len(),
        requested = count,
        selected = selected.len(),
        "Selected diverse outfits"
    );

    selected
        .into_iter()
        .take(count)
        .map(|index| ranked[index].clone())
        .collect()
}

fn overlap_ratio(outfit: &OutfitRecommendation, used_ids: &HashSet<&str>) -> f64 {
    if outfit.items.is_empty() {
        return 0.0;
    }
    let overlapping = outfit.item_ids().filter(|id| used_ids.contains(id)).count();
    overlapping as f64 / outfit.items.len() as f64
}
