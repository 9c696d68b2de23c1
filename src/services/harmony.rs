use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::models::{ColorHarmony, HarmonyType, WardrobeItem};
use crate::services::palette::{parsed_colors_compatible, Color};

const MONOCHROMATIC_PHRASES: [&str; 5] = [
    "A sleek monochromatic look in a single shade",
    "Tone-on-tone styling that reads clean and intentional",
    "One color head to toe for an elongated silhouette",
    "A cohesive single-hue outfit",
    "Monochrome done right: simple and striking",
];

const NEUTRAL_PHRASES: [&str; 5] = [
    "Timeless neutral palette that works anywhere",
    "Understated neutrals that are easy to wear",
    "A classic combination of neutral tones",
    "Clean, neutral colors for a polished look",
    "Neutral shades that always pair well together",
];

const BALANCED_PHRASES: [&str; 5] = [
    "Neutral base with a single pop of color",
    "A balanced palette anchored by neutrals",
    "One accent color set off by neutral pieces",
    "Well-balanced colors with a clear focal point",
    "Neutrals let the accent color stand out",
];

const COMPLEMENTARY_PHRASES: [&str; 5] = [
    "Complementary colors that play off each other",
    "A harmonious pairing of complementary shades",
    "Colors that balance and enhance one another",
    "A confident mix of colors that work together",
    "Complementary tones for a lively look",
];

const MIXED_PHRASES: [&str; 5] = [
    "An eclectic mix of colors",
    "A bold, playful combination of shades",
    "Mixed colors for an expressive outfit",
    "An unexpected color mix with personality",
    "A varied palette for a statement look",
];

const UNKNOWN_PHRASES: [&str; 5] = [
    "Color information unavailable for this outfit",
    "Add colors to your items for better matching",
    "Unable to assess the color palette",
    "Colors not specified for these pieces",
    "Palette unknown; tag item colors for smarter picks",
];

fn phrases(harmony_type: HarmonyType) -> &'static [&'static str; 5] {
    match harmony_type {
        HarmonyType::Monochromatic => &MONOCHROMATIC_PHRASES,
        HarmonyType::Neutral => &NEUTRAL_PHRASES,
        HarmonyType::Balanced => &BALANCED_PHRASES,
        HarmonyType::Complementary => &COMPLEMENTARY_PHRASES,
        HarmonyType::Mixed => &MIXED_PHRASES,
        HarmonyType::Unknown => &UNKNOWN_PHRASES,
    }
}

/// Classifies the palette formed by the items' colors
///
/// The type depends only on the multiset of normalized colors. An all-neutral
/// palette is `Neutral` even when every item shares the same neutral color.
pub fn classify(items: &[WardrobeItem]) -> HarmonyType {
    let colors: Vec<Color> = items
        .iter()
        .filter_map(|item| item.color.as_deref())
        .filter_map(Color::parse)
        .collect();

    if colors.is_empty() {
        return HarmonyType::Unknown;
    }

    if colors.iter().all(Color::is_neutral) {
        return HarmonyType::Neutral;
    }

    let distinct: HashSet<&Color> = colors.iter().collect();
    if distinct.len() == 1 {
        return HarmonyType::Monochromatic;
    }

    let accents: HashSet<&Color> = distinct
        .iter()
        .copied()
        .filter(|color| !color.is_neutral())
        .collect();
    if accents.len() == 1 && accents.len() < distinct.len() {
        return HarmonyType::Balanced;
    }

    let distinct: Vec<&Color> = distinct.into_iter().collect();
    let any_pair_compatible = distinct.iter().enumerate().any(|(i, a)| {
        distinct[i + 1..]
            .iter()
            .any(|b| parsed_colors_compatible(a, b))
    });
    if any_pair_compatible {
        HarmonyType::Complementary
    } else {
        HarmonyType::Mixed
    }
}

/// Classifies the palette and attaches a randomly chosen description
pub fn analyze<R: Rng>(items: &[WardrobeItem], rng: &mut R) -> ColorHarmony {
    let harmony_type = classify(items);
    let description = phrases(harmony_type)
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string();

    ColorHarmony {
        score: harmony_type.score(),
        harmony_type,
        description,
    }
}
