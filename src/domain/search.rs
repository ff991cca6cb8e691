//! Catalog search.
//!
//! Every catalog screen narrows a static list with the same rule: a free
//! text query matched case-insensitively against a few display fields,
//! optionally combined with a category filter. Results keep catalog order
//! and are always a subset of the input.

use serde::Deserialize;

/// A record that can be narrowed by [`CatalogQuery`].
pub trait Searchable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Category used by the category filter, if the record has one.
    fn category(&self) -> Option<&str>;
}

/// Free text plus category filter, as sent in `?q=&category=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn new(q: Option<String>, category: Option<String>) -> Self {
        Self { q, category }
    }

    /// Query text only.
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            category: None,
        }
    }

    /// True when neither criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty() && self.category_filter().is_none()
    }

    /// Lowercased query terms; blank queries yield none.
    fn terms(&self) -> Vec<String> {
        self.q
            .as_deref()
            .map(|q| q.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default()
    }

    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Whether a single record passes both criteria.
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.matches_terms(&self.terms(), item)
    }

    fn matches_terms<T: Searchable + ?Sized>(&self, terms: &[String], item: &T) -> bool {
        if let Some(wanted) = self.category_filter() {
            match item.category() {
                Some(category) if category.to_lowercase() == wanted.to_lowercase() => {}
                _ => return false,
            }
        }

        if terms.is_empty() {
            return true;
        }

        let fields: Vec<String> = item
            .search_fields()
            .into_iter()
            .map(str::to_lowercase)
            .collect();

        terms
            .iter()
            .all(|term| fields.iter().any(|field| field.contains(term.as_str())))
    }

    /// Narrow `items`, keeping their order.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let terms = self.terms();
        items
            .iter()
            .filter(|item| self.matches_terms(&terms, *item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct Row {
        name: &'static str,
        note: &'static str,
        kind: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.note]
        }

        fn category(&self) -> Option<&str> {
            self.kind
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Margherita Pizza", note: "tomato, basil", kind: Some("Pizza") },
            Row { name: "Chicken Shawarma", note: "garlic sauce", kind: Some("Wraps") },
            Row { name: "Pepperoni Pizza", note: "spicy", kind: Some("Pizza") },
            Row { name: "Mint Tea", note: "fresh leaves", kind: None },
        ]
    }

    fn names(query: &CatalogQuery) -> Vec<&'static str> {
        let rows = rows();
        query.filter(&rows).iter().map(|r| r.name).collect()
    }

    #[test_case(None, 4 ; "no query keeps everything")]
    #[test_case(Some("   "), 4 ; "blank query keeps everything")]
    #[test_case(Some("pizza"), 2 ; "substring on name")]
    #[test_case(Some("PIZZA"), 2 ; "case insensitive")]
    #[test_case(Some("garlic"), 1 ; "secondary field")]
    #[test_case(Some("pizza spicy"), 1 ; "all terms must match")]
    #[test_case(Some("sushi"), 0 ; "no match")]
    fn test_text_filter(q: Option<&str>, expected: usize) {
        let query = CatalogQuery::new(q.map(String::from), None);
        assert_eq!(names(&query).len(), expected);
    }

    #[test]
    fn test_category_filter_is_exact_and_case_insensitive() {
        let query = CatalogQuery::new(None, Some("pizza".into()));
        assert_eq!(names(&query), vec!["Margherita Pizza", "Pepperoni Pizza"]);

        let partial = CatalogQuery::new(None, Some("pizz".into()));
        assert!(names(&partial).is_empty());
    }

    #[test]
    fn test_category_filter_folds_non_ascii_case() {
        let rows = vec![
            Row { name: "Baklava", note: "pistachio", kind: Some("Pâtisserie") },
            Row { name: "Ayran", note: "cold", kind: Some("İçecek") },
        ];

        let query = CatalogQuery::new(None, Some("PÂTISSERIE".into()));
        let found: Vec<&str> = query.filter(&rows).iter().map(|r| r.name).collect();
        assert_eq!(found, vec!["Baklava"]);
    }

    #[test]
    fn test_category_filter_excludes_uncategorised() {
        let query = CatalogQuery::new(Some("tea".into()), Some("Drinks".into()));
        assert!(names(&query).is_empty());
    }

    #[test]
    fn test_combined_criteria_preserve_order() {
        let query = CatalogQuery::new(Some("a".into()), Some("Pizza".into()));
        assert_eq!(names(&query), vec!["Margherita Pizza", "Pepperoni Pizza"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(CatalogQuery::default().is_empty());
        assert!(CatalogQuery::new(Some(" ".into()), Some("".into())).is_empty());
        assert!(!CatalogQuery::text("x").is_empty());
    }
}
