use crate::digest::Item;

/// Lower-cased text searched by [`matches_query`]: title, summary, raw source
/// and every tag, joined by single spaces.
pub fn searchable_text(item: &Item) -> String {
    let mut parts = vec![item.title_text(), item.summary_text(), item.source_text()];
    parts.extend(item.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Case-insensitive substring match.
///
/// An empty query matches everything. The query is not trimmed or tokenized;
/// callers trim user input before storing it.
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    searchable_text(item).contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item {
            title: Some("Single-cell atlas".to_string()),
            summary: Some("A transcriptomic survey".to_string()),
            source: Some("Nature Methods".to_string()),
            tags: vec!["bioinformatics".to_string(), "Single-cell".to_string()],
            ..Item::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&item(), ""));
        assert!(matches_query(&Item::default(), ""));
    }

    #[test]
    fn test_query_matches_tag_case_insensitively() {
        assert!(matches_query(&item(), "BIO"));
    }

    #[test]
    fn test_query_matches_each_field() {
        assert!(matches_query(&item(), "atlas"));
        assert!(matches_query(&item(), "transcriptomic"));
        assert!(matches_query(&item(), "nature meth"));
        assert!(matches_query(&item(), "single-CELL"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_query(&item(), "microfluidic"));
        assert!(!matches_query(&Item::default(), "x"));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        assert!(matches_query(&item(), "atlas"));
        assert!(!matches_query(&item(), "  atlas"));
    }

    #[test]
    fn test_url_is_not_searched() {
        let item = Item {
            url: "https://example.com/unique-slug".to_string(),
            ..Item::default()
        };
        assert!(!matches_query(&item, "unique-slug"));
    }
}
