//! Property and scenario tests for the classify → filter → render pipeline.

use daily_digest::config::ViewSettings;
use daily_digest::digest::{Category, CategoryItems, FeedDocument, Item};
use daily_digest::ui::{
    is_paper, matches_query, mount, partition, render_card, UiState, PAPER_MARKERS,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn arb_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Peer-reviewed".to_string()),
        Just("PREPRINT".to_string()),
        Just("journal".to_string()),
        Just("AI".to_string()),
        Just("Radiology".to_string()),
        Just("bioinformatics".to_string()),
        "[a-zA-Z -]{0,12}",
    ]
}

fn arb_item() -> impl Strategy<Value = Item> {
    (
        proptest::option::of("[a-zA-Z <>&\"]{0,20}"),
        proptest::option::of("[a-zA-Z ]{0,30}"),
        proptest::option::of("[a-zA-Z ]{0,10}"),
        proptest::collection::vec(arb_tag(), 0..4),
    )
        .prop_map(|(title, summary, source, tags)| Item {
            title,
            url: "https://example.com/item".to_string(),
            source,
            summary,
            time: None,
            tags,
            cover: None,
        })
}

proptest! {
    #[test]
    fn prop_is_paper_iff_marker_tag(item in arb_item()) {
        let expected = item
            .tags
            .iter()
            .any(|t| PAPER_MARKERS.contains(&t.to_lowercase().as_str()));
        prop_assert_eq!(is_paper(&item), expected);
    }

    #[test]
    fn prop_empty_query_matches(item in arb_item()) {
        prop_assert!(matches_query(&item, ""));
    }

    #[test]
    fn prop_query_is_substring_of_joined_fields(item in arb_item(), query in "[a-zA-Z ]{1,4}") {
        let mut parts = vec![
            item.title.clone().unwrap_or_default(),
            item.summary.clone().unwrap_or_default(),
            item.source.clone().unwrap_or_default(),
        ];
        parts.extend(item.tags.iter().cloned());
        let joined = parts.join(" ").to_lowercase();
        prop_assert_eq!(matches_query(&item, &query), joined.contains(&query.to_lowercase()));
    }

    #[test]
    fn prop_partition_is_total(items in proptest::collection::vec(arb_item(), 0..12), query in "[a-z]{0,2}") {
        let split = partition(&items, &query);
        let filtered = items.iter().filter(|i| matches_query(i, &query)).count();
        prop_assert_eq!(split.papers.len() + split.news.len(), filtered);
        prop_assert!(split.papers.iter().all(|i| is_paper(i)));
        prop_assert!(split.news.iter().all(|i| !is_paper(i)));
    }

    #[test]
    fn prop_injected_script_is_escaped(
        item in arb_item(),
        prefix in "[a-z\"']{0,5}",
        field in 0usize..4,
    ) {
        let payload = format!("{}<script>alert(1)</script>", prefix);
        let mut item = item;
        match field {
            0 => item.title = Some(payload),
            1 => item.summary = Some(payload),
            2 => item.source = Some(payload),
            _ => item.tags.push(payload),
        }
        let html = render_card(&item, &ViewSettings::default()).into_string();
        prop_assert!(!html.contains("<script>"));
    }
}

#[test]
fn test_journal_item_lands_in_papers() {
    let doc = FeedDocument {
        date: "2025-01-01".to_string(),
        items: CategoryItems {
            ai_biomed: vec![Item {
                title: Some("A".to_string()),
                tags: vec!["journal".to_string()],
                ..Item::default()
            }],
            microfluidics: vec![],
            bioinfo: vec![],
        },
    };

    let ai = partition(doc.items.get(Category::AiBiomed), "");
    assert_eq!(ai.papers.len(), 1);
    assert_eq!(ai.papers[0].title_text(), "A");
    assert!(ai.news.is_empty());

    for category in [Category::Microfluidics, Category::Bioinfo] {
        assert!(partition(doc.items.get(category), "").is_empty());
    }

    let view = mount(&doc, &UiState::default(), &ViewSettings::default());
    assert_eq!(view.category(Category::AiBiomed).unwrap().papers.shown, 1);
    assert!(view.category(Category::AiBiomed).unwrap().news.is_empty());
}

#[test]
fn test_news_item_without_cover_gets_favicon() {
    let item = Item {
        url: "https://example.com/x".to_string(),
        tags: vec!["AI".to_string()],
        ..Item::default()
    };
    let html = render_card(&item, &ViewSettings::default()).into_string();
    assert!(html.contains("<img"));
    assert!(html.contains("domain=example.com"));
}

#[test]
fn test_bio_query_matches_tag_only() {
    let item = Item {
        title: Some("Atlas".to_string()),
        tags: vec!["bioinformatics".to_string()],
        ..Item::default()
    };
    assert!(matches_query(&item, "BIO"));
}
