//! Ingestion module for building the tool catalog.
//!
//! This module turns the nested source catalog (categories, premium tools,
//! alternatives) into flat `Tool` records that the query engine filters.

pub mod catalog_data;
pub mod normalizer;
pub mod types;

pub use catalog_data::{builtin_source_catalog, load_source_catalog, parse_source_catalog};
pub use normalizer::{classify_price, normalize_catalog, slugify, synthesize_tags, RatingStrategy};
pub use types::{
    AlternativeSource, Platform, PremiumToolSource, PriceType, SourceCatalog, SourceCategory,
    Tool, ToolMetadata,
};
