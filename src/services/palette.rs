//! Color taxonomy: normalization, the neutral set and the complementary table.

/// Prefixes folded away for the hues in `FOLDABLE_HUES` ("dark blue" -> "blue")
const SHADE_PREFIXES: &[&str] = &["dark ", "light "];

const FOLDABLE_HUES: &[NamedColor] = &[
    NamedColor::Blue,
    NamedColor::Gray,
    NamedColor::Green,
    NamedColor::Red,
];

/// Colors the engine knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    White,
    Gray,
    Beige,
    Navy,
    Brown,
    Cream,
    Red,
    Blue,
    Yellow,
    Green,
    Pink,
    Purple,
    Orange,
}

impl NamedColor {
    pub const ALL: [NamedColor; 14] = [
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Gray,
        NamedColor::Beige,
        NamedColor::Navy,
        NamedColor::Brown,
        NamedColor::Cream,
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Pink,
        NamedColor::Purple,
        NamedColor::Orange,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
            NamedColor::Beige => "beige",
            NamedColor::Navy => "navy",
            NamedColor::Brown => "brown",
            NamedColor::Cream => "cream",
            NamedColor::Red => "red",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Green => "green",
            NamedColor::Pink => "pink",
            NamedColor::Purple => "purple",
            NamedColor::Orange => "orange",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    pub fn is_neutral(self) -> bool {
        matches!(
            self,
            NamedColor::Black
                | NamedColor::White
                | NamedColor::Gray
                | NamedColor::Beige
                | NamedColor::Navy
                | NamedColor::Brown
                | NamedColor::Cream
        )
    }

    /// Colors this one is listed as complementing
    pub fn complements(self) -> &'static [NamedColor] {
        use NamedColor::*;
        match self {
            Red => &[Green, White, Black],
            Blue => &[Orange, Yellow, White],
            Yellow => &[Blue, Purple, Black],
            Green => &[Red, Pink, White],
            Pink => &[Green, White, Black],
            Purple => &[Yellow, White, Black],
            Orange => &[Blue, White, Black],
            Black | White | Gray | Beige | Navy | Brown | Cream => &[],
        }
    }
}

/// A normalized color; anything outside the taxonomy is kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Other(String),
}

impl Color {
    /// Normalizes free text; blank input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let folded = SHADE_PREFIXES
            .iter()
            .filter_map(|prefix| lowered.strip_prefix(prefix))
            .filter_map(NamedColor::from_name)
            .find(|hue| FOLDABLE_HUES.contains(hue));

        let color = match folded.or_else(|| NamedColor::from_name(&lowered)) {
            Some(named) => Color::Named(named),
            None => Color::Other(lowered),
        };
        Some(color)
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Color::Named(named) if named.is_neutral())
    }

    fn complements(&self, other: &Color) -> bool {
        match (self, other) {
            (Color::Named(a), Color::Named(b)) => a.complements().contains(b),
            _ => false,
        }
    }
}

/// Whether two item colors can be worn together
///
/// Missing colors are compatible with anything. Otherwise colors match when they
/// are equal after normalization, when either is neutral, or when the complementary
/// table lists the pair in either direction.
pub fn colors_compatible(first: Option<&str>, second: Option<&str>) -> bool {
    match (first.and_then(Color::parse), second.and_then(Color::parse)) {
        (Some(a), Some(b)) => parsed_colors_compatible(&a, &b),
        _ => true,
    }
}

pub fn parsed_colors_compatible(a: &Color, b: &Color) -> bool {
    a == b || a.is_neutral() || b.is_neutral() || a.complements(b) || b.complements(a)
}
