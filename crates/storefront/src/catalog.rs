//! Catalog loading.
//!
//! A catalog is a JSON array of [`CatalogItem`] records. Store-specific fields
//! beyond the core set land in each item's `attributes`.

use std::path::{Path, PathBuf};

use lookbook_core::CatalogItem;
use thiserror::Error;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of catalog items.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&json)?;
    tracing::debug!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lookbook_core::Price;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Linen shirt", "price": "59.90", "category": "tops", "brand": "Harbor"},
        {"id": "lip-01", "name": "Lip oil", "price": 18, "category": "makeup", "image": "/img/lip.webp"}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let items = parse_catalog(CATALOG).unwrap();
        assert_eq!(items.len(), 2);
        let shirt = items.first().unwrap();
        assert_eq!(shirt.id.as_str(), "1");
        assert_eq!(shirt.price, Price::from_cents(5_990));
        assert_eq!(shirt.field_text("brand").unwrap(), "Harbor");
        assert_eq!(items.last().unwrap().image.as_deref(), Some("/img/lip.webp"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"items": []}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();
        assert_eq!(load_catalog(&path).unwrap().len(), 2);
    }
}
