//! AltFinder - catalog of free and low-cost alternatives to premium software
//!
//! This library exposes the catalog normalizer, the query engine and the
//! session state used by presentation front ends.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod persistence;
pub mod query;
pub mod state;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, Result};
pub use ingestion::{normalize_catalog, Platform, PriceType, RatingStrategy, SourceCatalog, Tool};
pub use persistence::{Theme, ThemeStore};
pub use query::{filter_tools, Criteria, PriceFilter};
pub use state::AppState;
