//! Filter engine: derives the visible subset of the catalog from a free-text
//! query and a category selector.

use crate::entry::EmojiEntry;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Filter the catalog down to entries whose name contains `query`
/// case-insensitively and whose category matches the selector.
///
/// An empty query matches everything, and [`ALL_CATEGORIES`] disables the
/// category check. The result preserves catalog order (stable filter) and
/// re-applying with identical arguments yields the same result.
pub fn filter<'a>(
    catalog: &'a [EmojiEntry],
    query: &str,
    category: &str,
) -> Vec<&'a EmojiEntry> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                && (category == ALL_CATEGORIES || entry.category == category)
        })
        .collect()
}

/// Distinct categories in first-seen catalog order. Feeds the category
/// selector in the UI.
pub fn categories(catalog: &[EmojiEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in catalog {
        if !seen.iter().any(|c| c == &entry.category) {
            seen.push(entry.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: &str) -> EmojiEntry {
        EmojiEntry {
            name: name.to_string(),
            category: category.to_string(),
            group: String::new(),
            glyph_variants: vec!["&#128512;".to_string()],
            unicode: Vec::new(),
        }
    }

    fn sample() -> Vec<EmojiEntry> {
        vec![
            entry("grinning_face", "face"),
            entry("winking face", "face"),
            entry("dog face", "animals"),
            entry("GRINNING CAT", "animals"),
        ]
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let catalog = sample();
        let hits = filter(&catalog, "grin", ALL_CATEGORIES);
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["grinning_face", "GRINNING CAT"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = sample();
        assert_eq!(filter(&catalog, "", ALL_CATEGORIES).len(), catalog.len());
    }

    #[test]
    fn test_category_narrows_result() {
        let catalog = sample();
        let hits = filter(&catalog, "", "animals");
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["dog face", "GRINNING CAT"]);
    }

    #[test]
    fn test_query_and_category_combine() {
        // "grin" in a category the entry does not belong to returns nothing
        let catalog = vec![entry("grinning_face", "face")];
        assert_eq!(filter(&catalog, "grin", ALL_CATEGORIES).len(), 1);
        assert!(filter(&catalog, "grin", "smileys").is_empty());
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = sample();
        let hits = filter(&catalog, "face", ALL_CATEGORIES);
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["grinning_face", "winking face", "dog face"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample();
        let once = filter(&catalog, "face", "face");
        let twice = filter(&catalog, "face", "face");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample();
        assert_eq!(categories(&catalog), vec!["face", "animals"]);
    }

    #[test]
    fn test_categories_empty_catalog() {
        assert!(categories(&[]).is_empty());
    }
}
