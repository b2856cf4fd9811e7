//! Catalog filtering by substring query and category.
//!
//! This is a plain case-insensitive substring filter over a configured set of
//! fields, not a relevance engine: there is no ranking and no fuzzy matching,
//! and results keep catalog order.
//!
//! Field values come from [`Searchable::field_text`]. For [`CatalogItem`],
//! strings are matched as-is and numbers (including `price`) by their
//! canonical string form; other JSON values never match.

use std::borrow::Cow;
use std::cell::OnceCell;

use lookbook_core::CatalogItem;

/// Field holding an item's category, used by [`FilterEngine::set_category`].
pub const CATEGORY_FIELD: &str = "category";

/// Items that expose named text fields to the filter.
pub trait Searchable {
    /// Text of `field`, or `None` if the item has no searchable value for it.
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>>;
}

impl Searchable for CatalogItem {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        Self::field_text(self, field)
    }
}

/// Filtered view over an in-memory catalog.
///
/// Matches are computed lazily and cached until the items, fields, query or
/// category change.
#[derive(Debug)]
pub struct FilterEngine<T> {
    items: Vec<T>,
    fields: Vec<String>,
    query: String,
    category: Option<String>,
    matches: OnceCell<Vec<usize>>,
}

impl<T: Searchable> FilterEngine<T> {
    /// Filter `items` by substring matches against `fields`.
    pub fn new<I, S>(items: Vec<T>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items,
            fields: fields.into_iter().map(Into::into).collect(),
            query: String::new(),
            category: None,
            matches: OnceCell::new(),
        }
    }

    /// Replace the catalog.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.invalidate();
    }

    /// Replace the set of searched fields.
    pub fn set_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields != self.fields {
            self.fields = fields;
            self.invalidate();
        }
    }

    /// Update the live query. Surrounding whitespace is ignored for matching.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.invalidate();
        }
    }

    /// Restrict results to one category (case-insensitive), or lift the
    /// restriction with `None`.
    pub fn set_category(&mut self, category: Option<impl Into<String>>) {
        let category = category.map(Into::into);
        if category != self.category {
            self.category = category;
            self.invalidate();
        }
    }

    /// The live query, exactly as last set.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The full, unfiltered catalog.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Catalog indices of matching items, in catalog order.
    pub fn indices(&self) -> &[usize] {
        self.matches.get_or_init(|| self.compute())
    }

    /// Matching items, in catalog order.
    pub fn results(&self) -> impl Iterator<Item = &T> + '_ {
        self.indices().iter().filter_map(|&i| self.items.get(i))
    }

    /// Number of matching items.
    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }

    fn invalidate(&mut self) {
        self.matches.take();
    }

    fn compute(&self) -> Vec<usize> {
        let needle = self.query.trim().to_lowercase();
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);

        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                category
                    .as_deref()
                    .is_none_or(|wanted| in_category(*item, wanted))
            })
            .filter(|(_, item)| needle.is_empty() || self.matches_query(*item, &needle))
            .map(|(i, _)| i)
            .collect();

        tracing::trace!(
            query = %self.query,
            matched = matches.len(),
            total = self.items.len(),
            "Filter recomputed"
        );
        matches
    }

    fn matches_query(&self, item: &T, needle: &str) -> bool {
        self.fields.iter().any(|field| {
            item.field_text(field)
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }
}

fn in_category<T: Searchable>(item: &T, wanted: &str) -> bool {
    item.field_text(CATEGORY_FIELD)
        .is_some_and(|category| category.trim().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookbook_core::Price;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1_u32, "Trail running shoe", Price::from_units(140), "sneakers")
                .with_attribute("brand", "Stride"),
            CatalogItem::new(2_u32, "Wool coat", Price::from_units(320), "outerwear")
                .with_attribute("brand", "Northline"),
            CatalogItem::new(3_u32, "Court Shoe Low", Price::from_units(95), "Sneakers")
                .with_attribute("brand", "Volley"),
            CatalogItem::new(4_u32, "Noise-cancelling headphones", Price::from_units(299), "audio")
                .with_attribute("brand", "Stride Audio"),
        ]
    }

    fn names<'a>(engine: &'a FilterEngine<CatalogItem>) -> Vec<&'a str> {
        engine.results().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let mut engine = FilterEngine::new(catalog(), ["name"]);
        assert_eq!(engine.len(), 4);
        engine.set_query("   ");
        assert_eq!(engine.indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let mut engine = FilterEngine::new(catalog(), ["name"]);
        engine.set_query("Shoe");
        assert_eq!(names(&engine), vec!["Trail running shoe", "Court Shoe Low"]);
        assert_eq!(engine.query(), "Shoe");
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut engine = FilterEngine::new(catalog(), ["name"]);
        engine.set_query("  COAT ");
        assert_eq!(names(&engine), vec!["Wool coat"]);
    }

    #[test]
    fn test_matches_any_configured_field() {
        let mut engine = FilterEngine::new(catalog(), ["name", "brand"]);
        engine.set_query("stride");
        assert_eq!(engine.indices(), &[0, 3]);

        engine.set_fields(["name"]);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_price_only_searched_when_configured() {
        let mut engine = FilterEngine::new(catalog(), ["name"]);
        engine.set_query("299");
        assert!(engine.is_empty());

        engine.set_fields(["name", "price"]);
        assert_eq!(engine.indices(), &[3]);
    }

    #[test]
    fn test_category_composes_with_query() {
        let mut engine = FilterEngine::new(catalog(), ["name", "brand"]);
        engine.set_category(Some("sneakers"));
        assert_eq!(engine.indices(), &[0, 2]);

        engine.set_query("stride");
        assert_eq!(engine.indices(), &[0]);

        engine.set_category(None::<String>);
        assert_eq!(engine.indices(), &[0, 3]);
    }

    #[test]
    fn test_set_items_recomputes() {
        let mut engine = FilterEngine::new(catalog(), ["name"]);
        engine.set_query("coat");
        assert_eq!(engine.len(), 1);

        engine.set_items(catalog().into_iter().take(1).collect());
        assert!(engine.is_empty());
        assert_eq!(engine.items().len(), 1);
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let mut engine = FilterEngine::new(catalog(), ["material"]);
        engine.set_query("wool");
        assert!(engine.is_empty());
    }
}
