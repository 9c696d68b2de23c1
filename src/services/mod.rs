pub mod catalog;
pub mod categorizer;
pub mod combinations;
pub mod context_filter;
pub mod harmony;
pub mod matching;
pub mod palette;
pub mod ranking;
pub mod recommendations;
pub mod scoring;

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use categorizer::categorize;
pub use palette::colors_compatible;
pub use recommendations::{Recommender, RecommenderSettings};
