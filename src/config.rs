use crate::catalog::DEFAULT_FEATURED_LIMIT;
use crate::ingestion::{Platform, RatingStrategy};
use crate::persistence::Theme;
use crate::query::{Criteria, PriceFilter};
use std::env;
use std::path::PathBuf;

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var("ALTFINDER_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

pub struct Config {
    /// Optional path to a catalog JSON file replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Where the theme preference is stored.
    pub preferences_path: PathBuf,
    /// Theme used when no preference has been stored yet.
    pub default_theme: Theme,
    /// How `user_rating` is assigned during normalization.
    pub ratings: RatingStrategy,
    /// Maximum number of featured tools.
    pub featured_limit: usize,
    /// Criteria applied at startup.
    pub initial_criteria: Criteria,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            preferences_path: PathBuf::from(".altfinder/preferences.json"),
            default_theme: Theme::Light,
            ratings: RatingStrategy::default(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
            initial_criteria: Criteria::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Ratings: `ALTFINDER_FIXED_RATING` wins over `ALTFINDER_RATING_SEED`;
    /// with neither set, ratings come from a generator seeded with 0.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let ratings = match (
            env::var("ALTFINDER_FIXED_RATING").ok(),
            env::var("ALTFINDER_RATING_SEED").ok(),
        ) {
            (Some(rating), _) => RatingStrategy::Fixed(rating.trim().parse()?),
            (None, Some(seed)) => RatingStrategy::Seeded(seed.trim().parse()?),
            (None, None) => defaults.ratings,
        };

        let default_theme = match env::var("ALTFINDER_DEFAULT_THEME") {
            Ok(theme) => theme.parse()?,
            Err(_) => defaults.default_theme,
        };

        Ok(Self {
            catalog_path: non_blank_path(env::var("ALTFINDER_CATALOG_PATH").ok()),
            preferences_path: env::var("ALTFINDER_PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            default_theme,
            ratings,
            featured_limit: env::var("ALTFINDER_FEATURED_LIMIT")
                .unwrap_or_else(|_| DEFAULT_FEATURED_LIMIT.to_string())
                .parse()?,
            initial_criteria: criteria_from_env()?,
        })
    }
}

fn criteria_from_env() -> anyhow::Result<Criteria> {
    let mut criteria = Criteria::new();

    if let Ok(term) = env::var("ALTFINDER_SEARCH") {
        criteria.set_search(term);
    }

    if let Ok(category) = env::var("ALTFINDER_CATEGORY") {
        if !category.trim().is_empty() {
            criteria.category = Some(category);
        }
    }

    if let Ok(price) = env::var("ALTFINDER_PRICE") {
        criteria.set_price(price.parse::<PriceFilter>()?);
    }

    if let Ok(platforms) = env::var("ALTFINDER_PLATFORMS") {
        for name in platforms.split(',').filter(|s| !s.trim().is_empty()) {
            criteria.toggle_platform(name.parse::<Platform>()?, true);
        }
    }

    Ok(criteria)
}

/// Treat an unset or blank path variable as absent.
fn non_blank_path(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}
