//! Type definitions for the ingestion module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Root of the nested source document: categories in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCatalog {
    pub categories: Vec<SourceCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCategory {
    #[serde(rename = "category")]
    pub name: String,
    pub tools: Vec<PremiumToolSource>,
}

/// A premium product and the alternatives offered against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumToolSource {
    pub name: String,
    #[serde(rename = "use")]
    pub use_case: String,
    pub alternatives: Vec<AlternativeSource>,
    #[serde(flatten)]
    pub metadata: ToolMetadata,
}

/// Optional descriptors a premium tool entry may carry.
///
/// Every field falls back to a derived value during normalization:
/// - `tags`: synthesized from category, price tier and the alternative's name
/// - `platform`: all five platforms
/// - `price_hint`: never consulted; the tier is inferred from the name
/// - `limitations` / `description`: templated placeholder text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Vec<Platform>>,
    #[serde(default, rename = "priceType", skip_serializing_if = "Option::is_none")]
    pub price_hint: Option<PriceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeSource {
    pub name: String,
    pub link: String,
}

/// Derived price tier of an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceType {
    Free,
    Cheap,
    Paid,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Cheap => "Cheap",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Web,
    Windows,
    Linux,
    #[serde(rename = "macOS")]
    MacOs,
    Mobile,
}

impl Platform {
    /// Filter options in the order they are offered to the user.
    pub const ALL: [Platform; 5] = [
        Platform::Web,
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Mobile,
    ];

    /// Platforms assumed for an alternative whose source gives no hint.
    pub const DEFAULT_SUPPORTED: [Platform; 5] = [
        Platform::Web,
        Platform::Windows,
        Platform::MacOs,
        Platform::Linux,
        Platform::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" | "mac" => Ok(Self::MacOs),
            "mobile" => Ok(Self::Mobile),
            other => Err(AppError::ValidationError(format!(
                "Unknown platform '{}'",
                other
            ))),
        }
    }
}

/// A flattened, queryable catalog entry: one alternative in one category.
///
/// `premium_tool_ref_name` holds the premium tool's name rather than a link
/// back into the source tree, so a `Tool` is fully self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Synthetic key, unique within one build (`tool-<n>-<slug>`)
    pub id: String,
    pub name: String,
    pub category: String,
    pub use_case: String,
    pub link: String,
    pub premium_tool_ref_name: Option<String>,
    pub price_type: PriceType,
    pub platform: Vec<Platform>,
    pub tags: Vec<String>,
    pub limitations: String,
    pub description: String,
    pub detailed_description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Whole-star rating in `3..=5`
    pub user_rating: u8,
    pub gallery: Vec<String>,
}

impl Tool {
    pub fn supports_any(&self, platforms: &[Platform]) -> bool {
        platforms.iter().any(|p| self.platform.contains(p))
    }
}
