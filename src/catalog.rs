//! The immutable tool collection and the views derived from it.

use crate::error::Result;
use crate::ingestion::{normalize_catalog, Platform, PriceType, RatingStrategy, SourceCatalog, Tool};
use crate::query::{filter_tools, Criteria, PriceFilter};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Default number of featured tools shown on the landing view.
pub const DEFAULT_FEATURED_LIMIT: usize = 4;

/// Flat, read-only collection of normalized tools.
///
/// Built once per process; cloning shares the same underlying collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Arc<[Tool]>,
}

impl Catalog {
    /// Normalize a source catalog into a new collection.
    pub fn build(source: &SourceCatalog, ratings: RatingStrategy) -> Result<Self> {
        let tools = normalize_catalog(source, ratings)?;
        Ok(Self::from_tools(tools))
    }

    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools: tools.into(),
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Tools matching `criteria`, in catalog order.
    pub fn query(&self, criteria: &Criteria) -> Vec<&Tool> {
        filter_tools(&self.tools, criteria)
    }

    /// Distinct category names, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.tools
            .iter()
            .map(|tool| tool.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First free tool of each category, in catalog order, up to `limit`.
    ///
    /// Falls back to the first `limit` tools when the catalog has no free tool.
    pub fn featured(&self, limit: usize) -> Vec<&Tool> {
        let mut featured = Vec::with_capacity(limit);
        let mut seen: BTreeSet<&str> = BTreeSet::new();

        for tool in self.tools.iter() {
            if featured.len() >= limit {
                break;
            }
            if tool.price_type == PriceType::Free && seen.insert(tool.category.as_str()) {
                featured.push(tool);
            }
        }

        if featured.is_empty() {
            featured.extend(self.tools.iter().take(limit));
        }

        featured
    }

    pub fn price_filters(&self) -> &'static [PriceFilter] {
        &PriceFilter::OPTIONS
    }

    pub fn platforms(&self) -> &'static [Platform] {
        &Platform::ALL
    }
}
