//! Markdown rendering of a whole digest, matching the `<date>.md` files published
//! next to each JSON document.

use super::types::{Category, FeedDocument, Item};

/// Placeholder line for a category with no items.
const EMPTY_SECTION: &str = "(nothing today)";

/// Render the digest as markdown: a heading with the date and total count,
/// then one section per category in tab order.
pub fn to_markdown(document: &FeedDocument) -> String {
    let mut out = format!(
        "# Daily digest · {}\n\n{} items\n\n",
        document.date,
        document.items.total()
    );

    for category in Category::ALL {
        write_section(&mut out, category, document.items.get(category));
    }

    out
}

fn write_section(out: &mut String, category: Category, items: &[Item]) {
    out.push_str(&format!("### {}\n\n", category.label()));

    if items.is_empty() {
        out.push_str(EMPTY_SECTION);
        out.push_str("\n\n");
        return;
    }

    for item in items {
        out.push_str(&format!(
            "- **[{}]({})**  \n  Source: {} · Published: {}  \n  Tags: {}\n  \n  {}\n\n",
            item.title_text(),
            item.url,
            item.source_label(),
            item.published().unwrap_or(""),
            item.tags.join(", "),
            item.summary_text(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::CategoryItems;
    use pretty_assertions::assert_eq;

    fn item(title: &str, tags: &[&str]) -> Item {
        Item {
            title: Some(title.to_string()),
            url: "https://example.com/a".to_string(),
            source: Some("Nature".to_string()),
            summary: Some("Summary text".to_string()),
            time: Some("2025-09-17".to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover: None,
        }
    }

    #[test]
    fn test_markdown_lists_items_and_placeholders() {
        let doc = FeedDocument {
            date: "2025-09-18".to_string(),
            items: CategoryItems {
                ai_biomed: vec![item("Paper A", &["Peer-reviewed", "Radiology"])],
                microfluidics: vec![],
                bioinfo: vec![],
            },
        };

        let md = to_markdown(&doc);
        assert!(md.starts_with("# Daily digest · 2025-09-18\n\n1 items\n\n"));
        assert!(md.contains("### AI (Biomedical)\n\n- **[Paper A](https://example.com/a)**"));
        assert!(md.contains("Source: Nature · Published: 2025-09-17"));
        assert!(md.contains("Tags: Peer-reviewed, Radiology"));
        assert!(md.contains("### Microfluidics\n\n(nothing today)\n\n"));
        assert!(md.contains("### Bioinformatics\n\n(nothing today)\n\n"));
    }

    #[test]
    fn test_markdown_section_order() {
        let md = to_markdown(&FeedDocument::empty());
        let ai = md.find("### AI (Biomedical)").unwrap();
        let micro = md.find("### Microfluidics").unwrap();
        let bio = md.find("### Bioinformatics").unwrap();
        assert!(ai < micro && micro < bio);
        assert_eq!(md.matches(EMPTY_SECTION).count(), 3);
    }

    #[test]
    fn test_markdown_empty_document_exact_output() {
        assert_eq!(
            to_markdown(&FeedDocument::empty()),
            "# Daily digest · \n\n0 items\n\n\
             ### AI (Biomedical)\n\n(nothing today)\n\n\
             ### Microfluidics\n\n(nothing today)\n\n\
             ### Bioinformatics\n\n(nothing today)\n\n"
        );
    }
}
