//! The built-in catalog source and loading of alternate source files.

use crate::error::{AppError, Result};
use crate::ingestion::types::SourceCatalog;
use std::fs;
use std::path::Path;

/// Built-in catalog document, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Parse the built-in catalog.
pub fn builtin_source_catalog() -> Result<SourceCatalog> {
    parse_source_catalog(BUILTIN_CATALOG)
}

/// Load a catalog document from disk using the same schema as the built-in one.
pub fn load_source_catalog(path: &Path) -> Result<SourceCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::MalformedSource(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    let catalog = parse_source_catalog(&content)?;

    tracing::info!(
        path = %path.display(),
        categories = catalog.categories.len(),
        "Catalog source loaded from file"
    );

    Ok(catalog)
}

/// Parse a JSON catalog document.
///
/// Format: `{"categories": [{"category": .., "tools": [{"name": .., "use": .., "alternatives": [..]}]}]}`
pub fn parse_source_catalog(json: &str) -> Result<SourceCatalog> {
    serde_json::from_str(json)
        .map_err(|e| AppError::MalformedSource(format!("Invalid catalog document: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = builtin_source_catalog().unwrap();

        assert_eq!(catalog.categories.len(), 10);
        assert_eq!(catalog.categories[0].name, "AI Tools");
        assert_eq!(catalog.categories[0].tools[0].name, "ChatGPT Plus");
        assert_eq!(
            catalog.categories.last().map(|c| c.name.as_str()),
            Some("CSE Semester Resources")
        );
    }

    #[test]
    fn test_missing_link_is_malformed() {
        let json = r#"{"categories": [{"category": "AI Tools", "tools": [
            {"name": "ChatGPT Plus", "use": "Chat", "alternatives": [{"name": "Claude.ai"}]}
        ]}]}"#;

        let result = parse_source_catalog(json);
        assert!(matches!(result, Err(AppError::MalformedSource(_))));
    }

    #[test]
    fn test_missing_use_case_is_malformed() {
        let json = r#"{"categories": [{"category": "AI Tools", "tools": [
            {"name": "ChatGPT Plus", "alternatives": []}
        ]}]}"#;

        assert!(parse_source_catalog(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": [{{"category": "Office Tools", "tools": [
                {{"name": "Grammarly Premium", "use": "Writing", "alternatives": [
                    {{"name": "LanguageTool (Free, Open Source)", "link": "https://languagetool.org/"}}
                ]}}
            ]}}]}}"#
        )
        .unwrap();

        let catalog = load_source_catalog(file.path()).unwrap();
        assert_eq!(catalog.categories[0].tools[0].alternatives.len(), 1);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_source_catalog(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::MalformedSource(_))));
    }
}
