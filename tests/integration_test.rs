//! Integration tests for catalog construction and querying.
//!
//! These tests run against the built-in catalog and hand-built sources
//! through the public API only.

use altfinder::ingestion::{
    builtin_source_catalog, parse_source_catalog, AlternativeSource, PremiumToolSource,
    SourceCategory, ToolMetadata,
};
use altfinder::{
    AppError, Catalog, Criteria, Platform, PriceFilter, PriceType, RatingStrategy, SourceCatalog,
};
use std::collections::HashSet;

/// Helper to build the built-in catalog with reproducible ratings.
fn builtin_catalog() -> Catalog {
    let source = builtin_source_catalog().expect("Built-in catalog should parse");
    Catalog::build(&source, RatingStrategy::Seeded(7)).expect("Built-in catalog should normalize")
}

/// Helper to build a one-tool catalog for scenario tests.
fn single_tool_catalog() -> Catalog {
    let source = SourceCatalog {
        categories: vec![SourceCategory {
            name: "AI Tools".to_string(),
            tools: vec![PremiumToolSource {
                name: "ChatGPT Plus".to_string(),
                use_case: "Advanced AI assistant".to_string(),
                alternatives: vec![AlternativeSource {
                    name: "Claude.ai".to_string(),
                    link: "https://claude.ai/".to_string(),
                }],
                metadata: ToolMetadata {
                    tags: Some(vec!["chatgpt".to_string(), "assistant".to_string()]),
                    platform: Some(vec![Platform::Web]),
                    ..ToolMetadata::default()
                },
            }],
        }],
    };

    Catalog::build(&source, RatingStrategy::Fixed(5)).unwrap()
}

// ============================================================================
// Normalizer
// ============================================================================

#[test]
fn test_one_tool_per_alternative() {
    let source = builtin_source_catalog().unwrap();
    let expected: usize = source
        .categories
        .iter()
        .flat_map(|c| c.tools.iter())
        .map(|t| t.alternatives.len())
        .sum();

    let catalog = builtin_catalog();
    assert_eq!(catalog.len(), expected);
    assert_eq!(catalog.len(), 62);
}

#[test]
fn test_identities_are_distinct() {
    let catalog = builtin_catalog();
    let ids: HashSet<&str> = catalog.tools().iter().map(|t| t.id.as_str()).collect();

    assert_eq!(ids.len(), catalog.len());
    assert_eq!(catalog.tools()[0].id, "tool-1-chatgpt-free-gpt-3-5-");
}

#[test]
fn test_builds_are_reproducible_with_same_seed() {
    assert_eq!(builtin_catalog().tools(), builtin_catalog().tools());
}

#[test]
fn test_every_tool_has_required_fields() {
    let catalog = builtin_catalog();

    for tool in catalog.tools() {
        assert!(!tool.name.is_empty());
        assert!(!tool.category.is_empty());
        assert!(tool.premium_tool_ref_name.is_some());
        assert!((3..=5).contains(&tool.user_rating));
        assert_eq!(tool.platform.len(), 5);
    }
}

#[test]
fn test_builtin_price_classification() {
    let catalog = builtin_catalog();
    let price_of = |name: &str| {
        catalog
            .tools()
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.price_type)
    };

    assert_eq!(price_of("Netlify (Free Tier)"), Some(PriceType::Free));
    assert_eq!(price_of("ProtonVPN (Free Tier)"), Some(PriceType::Free));
    assert_eq!(price_of("Stable Diffusion (Local/Web UI)"), Some(PriceType::Free));
}

#[test]
fn test_malformed_source_fails_whole_build() {
    let json = r#"{"categories": [
        {"category": "AI Tools", "tools": [
            {"name": "ChatGPT Plus", "use": "Chat", "alternatives": [
                {"name": "Claude.ai", "link": "https://claude.ai/"}
            ]},
            {"name": "Midjourney", "use": "", "alternatives": [
                {"name": "Leonardo.Ai (Free Tier)", "link": "https://leonardo.ai/"}
            ]}
        ]}
    ]}"#;

    let source = parse_source_catalog(json).unwrap();
    let result = Catalog::build(&source, RatingStrategy::Fixed(4));

    assert!(matches!(result, Err(AppError::MalformedSource(_))));
}

// ============================================================================
// Query engine
// ============================================================================

#[test]
fn test_search_scenario_matches_category() {
    let catalog = single_tool_catalog();
    let criteria = Criteria::new()
        .with_search("chat")
        .with_category("AI Tools")
        .with_price(PriceFilter::All);

    let result = catalog.query(&criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Claude.ai");
}

#[test]
fn test_search_scenario_wrong_category_is_empty() {
    let catalog = single_tool_catalog();
    let criteria = Criteria::new()
        .with_search("chat")
        .with_category("Design Tools")
        .with_price(PriceFilter::All);

    assert!(catalog.query(&criteria).is_empty());
}

#[test]
fn test_search_builtin_chat() {
    let catalog = builtin_catalog();
    let result = catalog.query(&Criteria::new().with_search("chat"));

    let names: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "ChatGPT Free (GPT-3.5)",
            "Claude.ai",
            "Perplexity AI",
            "Gemini (Google)"
        ]
    );
}

#[test]
fn test_no_match_is_empty_not_error() {
    let catalog = builtin_catalog();
    let result = catalog.query(&Criteria::new().with_search("zzzz-no-such-tool"));
    assert!(result.is_empty());
}

#[test]
fn test_category_listing_and_featured() {
    let catalog = builtin_catalog();

    let categories = catalog.categories();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories.first().map(String::as_str), Some("AI Tools"));
    assert_eq!(categories.last().map(String::as_str), Some("Video Editing"));

    let featured: Vec<&str> = catalog.featured(4).iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        featured,
        vec![
            "ChatGPT Free (GPT-3.5)",
            "Google Docs/Sheets/Slides (Free)",
            "Photopea (Web, Free)",
            "DaVinci Resolve (Free Version)"
        ]
    );
}
