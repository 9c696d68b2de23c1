use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::AppResult,
    models::{OutfitRecommendation, RecommendationContext, WardrobeItem},
    services::{
        catalog::CatalogProvider,
        categorizer::CategorizedItems,
        combinations::{CombinationGenerator, DEFAULT_MAX_COMBINATIONS},
        context_filter::{filter_by_occasion, filter_by_weather},
        ranking::{rank, select_diverse},
        scoring::score_outfit,
    },
};

/// Raw candidates generated per requested outfit before diversity selection
const CANDIDATES_PER_OUTFIT: usize = 3;

/// Outfits returned when the caller does not ask for a specific number
pub const DEFAULT_OUTFIT_COUNT: usize = 3;
/// Largest number of outfits a single request may ask for
pub const MAX_OUTFIT_COUNT: usize = 20;

/// Tunables for the recommendation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderSettings {
    pub max_combinations: usize,
    pub default_outfit_count: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            default_outfit_count: DEFAULT_OUTFIT_COUNT,
        }
    }
}

/// Runs the full pipeline: filter, generate, score, rank and select
///
/// All randomness (fallback sampling and harmony descriptions) comes from the
/// injected `rng`, so a seeded recommender produces identical output for
/// identical input.
pub struct Recommender<R> {
    rng: R,
    settings: RecommenderSettings,
}

impl Recommender<StdRng> {
    /// Reproducible recommender
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Recommender seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise from entropy
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> Recommender<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            settings: RecommenderSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: RecommenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Best single outfit, or `None` when the catalog is empty or nothing could be assembled
    pub fn generate_smart_outfit(
        &mut self,
        items: &[WardrobeItem],
        context: &RecommendationContext,
    ) -> Option<OutfitRecommendation> {
        if items.is_empty() {
            tracing::debug!("Empty wardrobe, no outfit to recommend");
            return None;
        }

        let ranked = self.ranked_outfits(items, context, self.settings.max_combinations);
        ranked.into_iter().next()
    }

    /// Up to `count` diverse outfits, best first
    pub fn generate_multiple_outfits(
        &mut self,
        items: &[WardrobeItem],
        context: &RecommendationContext,
        count: usize,
    ) -> Vec<OutfitRecommendation> {
        if items.is_empty() || count == 0 {
            return Vec::new();
        }

        let quota = count.saturating_mul(CANDIDATES_PER_OUTFIT);
        let ranked = self.ranked_outfits(items, context, quota);
        select_diverse(&ranked, count)
    }

    fn ranked_outfits(
        &mut self,
        items: &[WardrobeItem],
        context: &RecommendationContext,
        max_combinations: usize,
    ) -> Vec<OutfitRecommendation> {
        let pool = filter_by_weather(items, context.weather.as_ref());
        let pool = filter_by_occasion(&pool, context.occasion());
        let categorized = CategorizedItems::from_items(&pool);

        tracing::debug!(
            catalog = items.len(),
            filtered = pool.len(),
            categories = ?categorized.counts(),
            "Filtered wardrobe for context"
        );

        let candidates = CombinationGenerator::new(&pool, &categorized, context)
            .with_max_combinations(max_combinations)
            .generate(&mut self.rng);

        let scored = candidates
            .into_iter()
            .map(|candidate| score_outfit(candidate, context, &mut self.rng))
            .collect();

        rank(scored)
    }
}

/// Recommends one outfit from the provider's current catalog
pub async fn recommend_outfit(
    catalog: &dyn CatalogProvider,
    context: &RecommendationContext,
    settings: RecommenderSettings,
    seed: Option<u64>,
) -> AppResult<Option<OutfitRecommendation>> {
    let items = catalog.list_items().await?;

    tracing::info!(
        provider = catalog.name(),
        items = items.len(),
        occasion = ?context.occasion(),
        temperature = ?context.temperature(),
        "Recommending outfit"
    );

    let outfit = Recommender::from_seed_option(seed)
        .with_settings(settings)
        .generate_smart_outfit(&items, context);

    if let Some(outfit) = &outfit {
        tracing::info!(
            score = outfit.score,
            item_count = outfit.items.len(),
            harmony = ?outfit.color_harmony.harmony_type,
            "Outfit recommended"
        );
    }

    Ok(outfit)
}

/// Recommends up to `count` diverse outfits from the provider's current catalog
pub async fn recommend_outfits(
    catalog: &dyn CatalogProvider,
    context: &RecommendationContext,
    count: usize,
    settings: RecommenderSettings,
    seed: Option<u64>,
) -> AppResult<Vec<OutfitRecommendation>> {
    let items = catalog.list_items().await?;

    tracing::info!(
        provider = catalog.name(),
        items = items.len(),
        requested = count,
        "Recommending multiple outfits"
    );

    let outfits = Recommender::from_seed_option(seed)
        .with_settings(settings)
        .generate_multiple_outfits(&items, context, count);

    tracing::info!(returned = outfits.len(), "Outfits recommended");

    Ok(outfits)
}
