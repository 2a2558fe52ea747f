//! Catalog loader for RON data files.

use std::path::Path;

use anyhow::Context;
use valor_core::Catalog;

/// Result alias shared by the loader entry points.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for a full template catalog from a RON file.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file on disk.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse catalog RON: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_catalog;

    #[test]
    fn catalog_round_trips_through_ron() {
        let catalog = default_catalog();
        let text = ron::ser::to_string(&catalog).expect("catalog serializes");
        let parsed = CatalogLoader::parse(&text).expect("serialized catalog parses");
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn malformed_ron_is_an_error_not_a_panic() {
        let err = CatalogLoader::parse("(heroes: [garbage").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = CatalogLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.ron"));
    }
}
