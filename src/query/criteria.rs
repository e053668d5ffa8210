//! Filter criteria and the interaction operations that change them.

use crate::error::AppError;
use crate::ingestion::{Platform, PriceType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price filter options. No `Paid` option is offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Cheap,
}

impl PriceFilter {
    /// Filter options in the order they are offered to the user.
    pub const OPTIONS: [PriceFilter; 3] = [PriceFilter::All, PriceFilter::Free, PriceFilter::Cheap];

    /// Whether a tool of the given tier passes this filter.
    ///
    /// `Free` tools also satisfy `Cheap`, but not the other way around.
    pub fn accepts(&self, price: PriceType) -> bool {
        match self {
            Self::All => true,
            Self::Free => price == PriceType::Free,
            Self::Cheap => matches!(price, PriceType::Cheap | PriceType::Free),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Free => "Free",
            Self::Cheap => "Cheap",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "free" => Ok(Self::Free),
            "cheap" => Ok(Self::Cheap),
            other => Err(AppError::ValidationError(format!(
                "Unknown price filter '{}' (expected all, free or cheap)",
                other
            ))),
        }
    }
}

/// The active search and filter selection for one session.
///
/// All criteria combine with AND. The default value constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Free-text search; blank means no constraint
    #[serde(default)]
    pub search: String,
    /// Exact category name, or `None` for all categories
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: PriceFilter,
    /// Selected platforms; empty means no constraint
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: PriceFilter) -> Self {
        self.price = price;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.toggle_platform(platform, true);
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Jump to a category and clear the search term.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
        self.search.clear();
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn set_price(&mut self, price: PriceFilter) {
        self.price = price;
    }

    /// Add (`checked`) or remove a platform from the selection.
    pub fn toggle_platform(&mut self, platform: Platform, checked: bool) {
        if checked {
            if !self.platforms.contains(&platform) {
                self.platforms.push(platform);
            }
        } else {
            self.platforms.retain(|p| *p != platform);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.price == PriceFilter::All
            && self.platforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_filter_accepts() {
        assert!(PriceFilter::All.accepts(PriceType::Paid));
        assert!(PriceFilter::Free.accepts(PriceType::Free));
        assert!(!PriceFilter::Free.accepts(PriceType::Cheap));
        assert!(PriceFilter::Cheap.accepts(PriceType::Cheap));
        assert!(PriceFilter::Cheap.accepts(PriceType::Free));
        assert!(!PriceFilter::Cheap.accepts(PriceType::Paid));
    }

    #[test]
    fn test_price_filter_parse() {
        assert_eq!("Cheap".parse::<PriceFilter>().unwrap(), PriceFilter::Cheap);
        assert_eq!("ALL".parse::<PriceFilter>().unwrap(), PriceFilter::All);
        assert!(matches!(
            "paid".parse::<PriceFilter>(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_toggle_platform() {
        let mut criteria = Criteria::new();
        criteria.toggle_platform(Platform::Linux, true);
        criteria.toggle_platform(Platform::Linux, true);
        criteria.toggle_platform(Platform::Web, true);
        assert_eq!(criteria.platforms, vec![Platform::Linux, Platform::Web]);

        criteria.toggle_platform(Platform::Linux, false);
        assert_eq!(criteria.platforms, vec![Platform::Web]);

        criteria.toggle_platform(Platform::Mobile, false);
        assert_eq!(criteria.platforms, vec![Platform::Web]);
    }

    #[test]
    fn test_select_category_clears_search() {
        let mut criteria = Criteria::new().with_search("gimp");
        criteria.select_category("Design Tools");

        assert_eq!(criteria.category.as_deref(), Some("Design Tools"));
        assert!(criteria.search.is_empty());
    }

    #[test]
    fn test_reset_and_unconstrained() {
        let mut criteria = Criteria::new()
            .with_search("pdf")
            .with_category("Office Tools")
            .with_price(PriceFilter::Free)
            .with_platform(Platform::Windows);
        assert!(!criteria.is_unconstrained());

        criteria.reset();
        assert!(criteria.is_unconstrained());
        assert!(Criteria::new().with_search("   ").is_unconstrained());
    }
}
