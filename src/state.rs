use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::ingestion::{builtin_source_catalog, load_source_catalog, Platform, Tool};
use crate::persistence::{Theme, ThemeStore};
use crate::query::{Criteria, PriceFilter};
use std::sync::Arc;

/// Session state owned by the presentation consumer.
///
/// Holds a shared handle to the catalog, the current criteria and the
/// display theme. The catalog itself never sees the theme.
pub struct AppState {
    pub catalog: Catalog,
    pub criteria: Criteria,
    theme: Theme,
    theme_store: ThemeStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// Initialize application state.
    ///
    /// Builds the catalog (built-in, or from `catalog_path`), restores the
    /// stored theme and writes the effective theme back.
    pub fn new(config: Config) -> Result<Self> {
        let source = match &config.catalog_path {
            Some(path) => load_source_catalog(path)?,
            None => builtin_source_catalog()?,
        };

        let catalog = Catalog::build(&source, config.ratings)?;
        tracing::info!(
            tools = catalog.len(),
            categories = catalog.categories().len(),
            "Catalog built"
        );

        let theme_store = ThemeStore::new(config.preferences_path.clone());
        let theme = theme_store.load_or(config.default_theme)?;
        theme_store.save(theme)?;

        Ok(Self::with_parts(catalog, theme, theme_store, config))
    }

    /// Assemble state from an already built catalog.
    pub fn with_parts(catalog: Catalog, theme: Theme, theme_store: ThemeStore, config: Config) -> Self {
        Self {
            catalog,
            criteria: config.initial_criteria.clone(),
            theme,
            theme_store,
            config: Arc::new(config),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggle();
        self.theme_store.save(next)?;
        self.theme = next;
        tracing::info!(theme = %self.theme, "Theme switched");
        Ok(self.theme)
    }

    /// Tools matching the current criteria.
    pub fn visible_tools(&self) -> Vec<&Tool> {
        self.catalog.query(&self.criteria)
    }

    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.catalog.featured(self.config.featured_limit)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.set_search(term);
    }

    pub fn select_category(&mut self, category: Option<String>) {
        match category {
            Some(category) => self.criteria.select_category(category),
            None => self.criteria.clear_category(),
        }
    }

    pub fn set_price(&mut self, price: PriceFilter) {
        self.criteria.set_price(price);
    }

    pub fn set_platform(&mut self, platform: Platform, checked: bool) {
        self.criteria.toggle_platform(platform, checked);
    }

    /// Heading for the result list.
    pub fn list_title(&self) -> String {
        match &self.criteria.category {
            Some(category) => format!("Tools for {}", category),
            None => "All Discoverable Tools".to_string(),
        }
    }
}
