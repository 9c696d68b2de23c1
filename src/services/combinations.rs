use rand::{seq::SliceRandom, Rng};

use crate::models::{OutfitCandidate, RecommendationContext, WardrobeItem};
use crate::services::categorizer::CategorizedItems;
use crate::services::matching::find_best_match;
use crate::services::palette::colors_compatible;

pub const DEFAULT_MAX_COMBINATIONS: usize = 10;

/// Dresses get a layer below this temperature (°F)
const DRESS_LAYER_BELOW_F: f64 = 60.0;
/// Top + bottom outfits get a layer below this temperature (°F)
const SEPARATES_LAYER_BELOW_F: f64 = 65.0;

/// Fallback draws allowed per missing candidate before giving up
const FALLBACK_ATTEMPTS_PER_SLOT: usize = 3;
/// Hard ceiling on fallback draws regardless of the requested quota
const MAX_FALLBACK_ATTEMPTS: usize = 256;

/// Builds candidate outfits from a filtered pool
///
/// Strategies run in order (dress-based, top + bottom, random fallback) and the
/// combined output never exceeds `max_combinations`.
pub struct CombinationGenerator<'a> {
    items: &'a [WardrobeItem],
    categorized: &'a CategorizedItems,
    context: &'a RecommendationContext,
    max_combinations: usize,
}

impl<'a> CombinationGenerator<'a> {
    pub fn new(
        items: &'a [WardrobeItem],
        categorized: &'a CategorizedItems,
        context: &'a RecommendationContext,
    ) -> Self {
        Self {
            items,
            categorized,
            context,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }

    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<OutfitCandidate> {
        let mut candidates = Vec::new();

        self.dress_outfits(&mut candidates);
        let after_dresses = candidates.len();

        self.separates_outfits(&mut candidates);
        let after_separates = candidates.len();

        self.fallback_outfits(&mut candidates, rng);

        tracing::debug!(
            pool = self.items.len(),
            dress_based = after_dresses,
            top_bottom = after_separates - after_dresses,
            fallback = candidates.len() - after_separates,
            "Generated outfit candidates"
        );

        candidates
    }

    fn is_full(&self, candidates: &[OutfitCandidate]) -> bool {
        candidates.len() >= self.max_combinations
    }

    fn below(&self, threshold: f64) -> bool {
        self.context
            .temperature()
            .map(|temperature| temperature < threshold)
            .unwrap_or(false)
    }

    /// Adds the best outerwear for `reference` when the weather calls for a layer
    fn add_layer(&self, outfit: &mut OutfitCandidate, reference: &WardrobeItem, threshold: f64) {
        if !self.below(threshold) {
            return;
        }
        if let Some(layer) = find_best_match(reference, self.categorized.outerwear(), self.context)
        {
            outfit.push(layer.clone());
        }
    }

    fn dress_outfits(&self, candidates: &mut Vec<OutfitCandidate>) {
        let dress_limit = self.max_combinations / 2;

        for dress in self.categorized.dresses().iter().take(dress_limit) {
            if self.is_full(candidates) {
                break;
            }

            let Some(shoes) = find_best_match(dress, self.categorized.shoes(), self.context) else {
                continue;
            };

            let mut outfit = OutfitCandidate::from_items([dress.clone(), shoes.clone()]);
            self.add_layer(&mut outfit, dress, DRESS_LAYER_BELOW_F);
            candidates.push(outfit);
        }
    }

    fn separates_outfits(&self, candidates: &mut Vec<OutfitCandidate>) {
        let tops = self.categorized.tops();
        let bottoms = self.categorized.bottoms();
        let limit = tops
            .len()
            .saturating_mul(bottoms.len())
            .min(self.max_combinations);
        let mut produced = 0;

        'outer: for top in tops {
            for bottom in bottoms {
                if produced >= limit || self.is_full(candidates) {
                    break 'outer;
                }
                if !colors_compatible(top.color.as_deref(), bottom.color.as_deref()) {
                    continue;
                }

                let mut outfit = OutfitCandidate::from_items([top.clone(), bottom.clone()]);
                if let Some(shoes) = find_best_match(top, self.categorized.shoes(), self.context) {
                    outfit.push(shoes.clone());
                }
                self.add_layer(&mut outfit, top, SEPARATES_LAYER_BELOW_F);

                candidates.push(outfit);
                produced += 1;
            }
        }
    }

    /// Random 2-3 item outfits drawn from the whole pool
    ///
    /// Categories are not balanced here: an outfit may hold two tops and no bottom.
    fn fallback_outfits<R: Rng>(
        &self,
        candidates: &mut Vec<OutfitCandidate>,
        rng: &mut R,
    ) {
        if self.is_full(candidates) || self.items.len() < 2 {
            return;
        }

        let missing = self.max_combinations - candidates.len();
        let mut attempts = missing
            .saturating_mul(FALLBACK_ATTEMPTS_PER_SLOT)
            .min(MAX_FALLBACK_ATTEMPTS);

        while !self.is_full(candidates) && attempts > 0 {
            attempts -= 1;

            let size = rng.gen_range(2..=3usize).min(self.items.len());
            let outfit =
                OutfitCandidate::from_items(self.items.choose_multiple(rng, size).cloned());

            if outfit.len() < 2 {
                continue;
            }
            let ids = outfit.id_set();
            if candidates.iter().any(|existing| existing.id_set() == ids) {
                continue;
            }
            candidates.push(outfit);
        }
    }
}
