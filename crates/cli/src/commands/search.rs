//! Catalog search command.

use std::path::Path;

use lookbook_storefront::catalog::load_catalog;
use lookbook_storefront::{FilterEngine, Result};

use super::CURRENCY;

/// Filter the catalog at `path` and list matches in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed.
pub fn run(path: &Path, query: &str, category: Option<&str>, fields: &[String]) -> Result<String> {
    let mut engine = FilterEngine::new(load_catalog(path)?, fields.iter().map(String::as_str));
    engine.set_query(query);
    engine.set_category(category);

    if engine.is_empty() {
        return Ok("No matching items".to_string());
    }

    let mut lines: Vec<String> = engine
        .results()
        .map(|item| {
            format!(
                "{}  {}  [{}]  {}",
                item.id,
                item.name,
                item.category,
                item.price.display(CURRENCY),
            )
        })
        .collect();
    lines.push(format!("{} of {} items", engine.len(), engine.items().len()));
    Ok(lines.join("\n"))
}
