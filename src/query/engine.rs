//! Query engine: filters the immutable tool collection by a `Criteria` set.
//!
//! Evaluation is a pure function of (tools, criteria). The collection is only
//! read, and the result keeps the collection's original order.

use crate::ingestion::Tool;
use crate::query::criteria::Criteria;
use std::time::Instant;

/// Return the tools matching every active criterion, in collection order.
///
/// An unconstrained `Criteria` returns the whole collection. No match is a
/// valid empty result.
pub fn filter_tools<'a>(tools: &'a [Tool], criteria: &Criteria) -> Vec<&'a Tool> {
    let start = Instant::now();

    let matched: Vec<&Tool> = tools.iter().filter(|tool| criteria.matches(tool)).collect();

    let elapsed = start.elapsed();
    tracing::debug!(
        search = %criteria.search,
        category = criteria.category.as_deref().unwrap_or("*"),
        price = %criteria.price,
        platforms = criteria.platforms.len(),
        total = tools.len(),
        matched = matched.len(),
        "Catalog query evaluated"
    );

    metrics::counter!("catalog_queries_total").increment(1);
    metrics::histogram!("catalog_query_latency_ms").record(elapsed.as_secs_f64() * 1000.0);

    matched
}

impl Criteria {
    /// Whether a single tool satisfies search AND category AND price AND platform.
    pub fn matches(&self, tool: &Tool) -> bool {
        self.matches_search(tool)
            && self.matches_category(tool)
            && self.price.accepts(tool.price_type)
            && self.matches_platform(tool)
    }

    fn matches_search(&self, tool: &Tool) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&term);

        hit(&tool.name)
            || hit(&tool.description)
            || hit(&tool.detailed_description)
            || tool.premium_tool_ref_name.as_deref().is_some_and(hit)
            || tool.tags.iter().any(|tag| hit(tag))
            || hit(&tool.use_case)
    }

    fn matches_category(&self, tool: &Tool) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| tool.category == category)
    }

    fn matches_platform(&self, tool: &Tool) -> bool {
        self.platforms.is_empty() || tool.supports_any(&self.platforms)
    }
}
