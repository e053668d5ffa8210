//! Normalization of the nested source catalog into flat `Tool` records.
//!
//! Traversal order is category, then premium tool, then alternative. That
//! order drives the identity counter, so it must stay stable for identities
//! to be reproducible between builds of the same source.

use crate::error::{AppError, Result};
use crate::ingestion::types::{
    AlternativeSource, Platform, PremiumToolSource, PriceType, SourceCatalog, SourceCategory,
    Tool,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tokens never kept as synthesized tags
const TAG_STOP_WORDS: [&str; 5] = ["free", "tier", "for", "and", "with"];

/// Tokens of this many chars or fewer are dropped from synthesized tags
const MIN_TAG_CHARS: usize = 2;

const MIN_RATING: u8 = 3;
const MAX_RATING: u8 = 5;

const DEFAULT_LIMITATIONS: &str =
    "Refer to the official website for details on limitations and usage tiers.";

const PLACEHOLDER_GALLERY: [&str; 2] = [
    "https://via.placeholder.com/400x250/e0e0e0?text=Screenshot+1",
    "https://via.placeholder.com/400x250/f0f0f0?text=Screenshot+2",
];

/// How `user_rating` is assigned to each normalized tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStrategy {
    /// Every tool gets the same rating, clamped into `3..=5`.
    Fixed(u8),
    /// Ratings drawn uniformly from `3..=5` by a generator seeded with the value.
    Seeded(u64),
}

impl Default for RatingStrategy {
    fn default() -> Self {
        Self::Seeded(0)
    }
}

enum RatingGenerator {
    Fixed(u8),
    Seeded(StdRng),
}

impl RatingGenerator {
    fn new(strategy: RatingStrategy) -> Self {
        match strategy {
            RatingStrategy::Fixed(rating) => Self::Fixed(rating.clamp(MIN_RATING, MAX_RATING)),
            RatingStrategy::Seeded(seed) => Self::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    fn next_rating(&mut self) -> u8 {
        match self {
            Self::Fixed(rating) => *rating,
            Self::Seeded(rng) => rng.gen_range(MIN_RATING..=MAX_RATING),
        }
    }
}

/// Flatten a source catalog into one `Tool` per (category, premium tool, alternative).
///
/// # Errors
/// Returns `AppError::MalformedSource` if any entry is missing a required
/// field. The build is all-or-nothing: no partial collection is returned.
pub fn normalize_catalog(source: &SourceCatalog, ratings: RatingStrategy) -> Result<Vec<Tool>> {
    let capacity = source
        .categories
        .iter()
        .flat_map(|c| c.tools.iter())
        .map(|t| t.alternatives.len())
        .sum();

    let mut tools = Vec::with_capacity(capacity);
    let mut ratings = RatingGenerator::new(ratings);
    let mut counter = 0usize;

    for category in &source.categories {
        validate_category(category)?;

        for premium in &category.tools {
            validate_premium_tool(&category.name, premium)?;

            for alternative in &premium.alternatives {
                validate_alternative(&premium.name, alternative)?;

                counter += 1;
                tools.push(normalize_alternative(
                    counter,
                    &category.name,
                    premium,
                    alternative,
                    ratings.next_rating(),
                ));
            }
        }
    }

    tracing::debug!(
        categories = source.categories.len(),
        tools = tools.len(),
        "Catalog normalization complete"
    );

    Ok(tools)
}

fn validate_category(category: &SourceCategory) -> Result<()> {
    if category.name.trim().is_empty() {
        return Err(AppError::MalformedSource(
            "Category is missing its name".into(),
        ));
    }
    Ok(())
}

fn validate_premium_tool(category: &str, premium: &PremiumToolSource) -> Result<()> {
    if premium.name.trim().is_empty() {
        return Err(AppError::MalformedSource(format!(
            "Premium tool in category '{}' is missing its name",
            category
        )));
    }
    if premium.use_case.trim().is_empty() {
        return Err(AppError::MalformedSource(format!(
            "Premium tool '{}' is missing its use case",
            premium.name
        )));
    }
    Ok(())
}

fn validate_alternative(premium: &str, alternative: &AlternativeSource) -> Result<()> {
    if alternative.name.trim().is_empty() {
        return Err(AppError::MalformedSource(format!(
            "Alternative to '{}' is missing its name",
            premium
        )));
    }
    if alternative.link.trim().is_empty() {
        return Err(AppError::MalformedSource(format!(
            "Alternative '{}' is missing its link",
            alternative.name
        )));
    }
    Ok(())
}

fn normalize_alternative(
    counter: usize,
    category: &str,
    premium: &PremiumToolSource,
    alternative: &AlternativeSource,
    user_rating: u8,
) -> Tool {
    let name = alternative.name.as_str();
    let price_type = classify_price(name);

    if let Some(hint) = premium.metadata.price_hint {
        if hint != price_type {
            tracing::debug!(
                tool = name,
                hint = %hint,
                inferred = %price_type,
                "Price hint disagrees with inferred tier, keeping inferred"
            );
        }
    }

    let tags = match &premium.metadata.tags {
        Some(tags) => tags.clone(),
        None => synthesize_tags(category, price_type, name),
    };

    let platform = premium
        .metadata
        .platform
        .clone()
        .unwrap_or_else(|| Platform::DEFAULT_SUPPORTED.to_vec());

    let limitations = premium
        .metadata
        .limitations
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LIMITATIONS.to_string());

    let description = premium
        .metadata
        .description
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            format!(
                "{} serves as a popular alternative for the use case of \"{}\", commonly associated with {}.",
                name, premium.use_case, premium.name
            )
        });

    Tool {
        id: format!("tool-{}-{}", counter, slugify(name)),
        name: name.to_string(),
        category: category.to_string(),
        use_case: premium.use_case.clone(),
        link: alternative.link.clone(),
        premium_tool_ref_name: Some(premium.name.clone()),
        price_type,
        platform,
        tags,
        limitations,
        description,
        detailed_description: build_detailed_description(name, &premium.name, &premium.use_case),
        features: vec![
            format!("Core functionality for {}", premium.use_case),
            "User-friendly interface (placeholder)".to_string(),
            "Good community support (placeholder)".to_string(),
            "Regular updates (placeholder)".to_string(),
        ],
        pros: vec![
            "Cost-effective / Free to start (placeholder)".to_string(),
            "Easy to get started (placeholder)".to_string(),
            "Covers most common needs (placeholder)".to_string(),
        ],
        cons: vec![
            "May lack some advanced features of paid counterparts (placeholder)".to_string(),
            "Certain limitations on free tier (if applicable) (placeholder)".to_string(),
        ],
        user_rating,
        gallery: PLACEHOLDER_GALLERY.iter().map(|s| s.to_string()).collect(),
    }
}

/// Infer a price tier from an alternative's display name.
///
/// Rules apply in order; the final "free" override runs last and may undo
/// the "pro" rule (e.g. "ProtonVPN (Free Tier)" ends up `Free`).
pub fn classify_price(name: &str) -> PriceType {
    let lower = name.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    let mut price = PriceType::Free;

    if has("(paid)") || (has("pro") && !has("free") && !has("tier")) {
        price = PriceType::Paid;
    } else if has("tier")
        || has("cheap")
        || has("affordable")
        || has("limitations")
        || has("starter plan")
    {
        price = PriceType::Cheap;
    } else if has("free") || has("open source") {
        price = PriceType::Free;
    }

    if has("free") && !has("(paid)") {
        price = PriceType::Free;
    }

    price
}

/// Build search tags for an alternative that has no explicit tag list.
///
/// Format: `[category, tier, "Alternative", name tokens...]`, de-duplicated.
pub fn synthesize_tags(category: &str, price_type: PriceType, name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let tokens = lower
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|token| token.chars().count() > MIN_TAG_CHARS)
        .filter(|token| !TAG_STOP_WORDS.contains(token))
        .map(str::to_string);

    let mut tags: Vec<String> = Vec::new();
    let seeded = [
        category.to_string(),
        price_type.as_str().to_string(),
        "Alternative".to_string(),
    ];

    for tag in seeded.into_iter().chain(tokens) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags
}

/// Lowercase `name` and collapse every run of chars outside `[a-z0-9]` into `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }

    slug
}

fn build_detailed_description(name: &str, premium: &str, use_case: &str) -> String {
    format!(
        "This is {}, a compelling alternative to {} for {}. It offers a robust set of \
         functionalities designed to meet user needs in this area. Many users find it highly \
         effective, especially considering its accessibility. Explore its official website to \
         understand the full scope of its capabilities and how it might fit your specific \
         requirements. (Note: This is a placeholder detailed description. More specific \
         information will be added soon.)",
        name, premium, use_case
    )
}
