//! Card templates.
//!
//! Every interpolated value goes through maud's escaping, so titles, summaries,
//! sources and tags from the feed cannot inject markup. Link targets are
//! additionally restricted to web schemes by [`safe_href`].

use crate::config::ViewSettings;
use crate::digest::Item;
use crate::ui::classify::{kind_of, Kind};
use crate::ui::format::format_publish_date;
use crate::util::{link_host, safe_href, safe_image_src};
use maud::{html, Markup};

/// Placeholder in [`ViewSettings::favicon_url_template`].
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Render one item with the variant its tags select.
pub fn render_card(item: &Item, settings: &ViewSettings) -> Markup {
    match kind_of(item) {
        Kind::Paper => paper_card(item, settings),
        Kind::News => news_card(item, settings),
    }
}

/// Cover image for a news card.
///
/// Explicit non-blank `http(s)` cover first, else a favicon derived from the
/// link host, else nothing.
pub fn cover_image(item: &Item, settings: &ViewSettings) -> Option<String> {
    if let Some(cover) = item.cover_url().and_then(safe_image_src) {
        return Some(cover.to_string());
    }
    let host = link_host(&item.url)?;
    Some(
        settings
            .favicon_url_template
            .replace(HOST_PLACEHOLDER, &host),
    )
}

/// News card: cover image, tags below the summary.
pub fn news_card(item: &Item, settings: &ViewSettings) -> Markup {
    let href = safe_href(&item.url);
    html! {
        article.card.news {
            @if let Some(src) = cover_image(item, settings) {
                a.cover href=(href) target="_blank" rel="noopener noreferrer" {
                    img src=(src) alt="" loading="lazy";
                }
            }
            div.card-body {
                (title_link(item))
                (meta_line(item, settings))
                (summary(item))
                (chips(item))
                (footer(item, settings))
            }
        }
    }
}

/// Paper card: no image, compact, tags above the summary.
pub fn paper_card(item: &Item, settings: &ViewSettings) -> Markup {
    html! {
        article.card.paper.compact {
            div.card-body {
                (title_link(item))
                (meta_line(item, settings))
                (chips(item))
                (summary(item))
                (footer(item, settings))
            }
        }
    }
}

fn title_link(item: &Item) -> Markup {
    html! {
        h4.title {
            a href=(safe_href(&item.url)) target="_blank" rel="noopener noreferrer" {
                (item.title_text())
            }
        }
    }
}

fn meta_line(item: &Item, settings: &ViewSettings) -> Markup {
    html! {
        div.meta {
            span.source { (item.source_label()) }
            @if let Some(time) = item.published() {
                " · "
                time { (format_publish_date(time, &settings.publish_date_format)) }
            }
        }
    }
}

fn summary(item: &Item) -> Markup {
    html! {
        @if !item.summary_text().is_empty() {
            p.summary { (item.summary_text()) }
        }
    }
}

fn chips(item: &Item) -> Markup {
    html! {
        @if !item.tags.is_empty() {
            div.tags {
                @for tag in &item.tags {
                    span.chip { (tag) }
                }
            }
        }
    }
}

fn footer(item: &Item, settings: &ViewSettings) -> Markup {
    html! {
        div.card-foot {
            @if let Some(host) = link_host(&item.url) {
                span.host { (host) }
            }
            a.cta href=(safe_href(&item.url)) target="_blank" rel="noopener noreferrer" {
                (settings.cta_label)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ViewSettings {
        ViewSettings::default()
    }

    fn news_item() -> Item {
        Item {
            title: Some("Lab-on-a-chip startup raises funds".to_string()),
            url: "https://example.com/x".to_string(),
            source: Some("TechNews".to_string()),
            summary: Some("A short summary".to_string()),
            time: Some("2025-09-17".to_string()),
            tags: vec!["AI".to_string()],
            cover: None,
        }
    }

    fn paper_item() -> Item {
        Item {
            tags: vec!["Peer-reviewed".to_string(), "Radiology".to_string()],
            ..news_item()
        }
    }

    #[test]
    fn test_news_card_falls_back_to_favicon() {
        let html = news_card(&news_item(), &settings()).into_string();
        assert!(html.contains("<img src=\"https://www.google.com/s2/favicons?sz=256&amp;domain=example.com\""));
    }

    #[test]
    fn test_news_card_prefers_explicit_cover() {
        let item = Item {
            cover: Some("https://cdn.example.org/cover.png".to_string()),
            ..news_item()
        };
        let html = news_card(&item, &settings()).into_string();
        assert!(html.contains("src=\"https://cdn.example.org/cover.png\""));
        assert!(!html.contains("favicons"));
    }

    #[test]
    fn test_blank_or_unsafe_cover_uses_favicon() {
        for cover in ["   ", "javascript:alert(1)"] {
            let item = Item {
                cover: Some(cover.to_string()),
                ..news_item()
            };
            assert_eq!(
                cover_image(&item, &settings()).as_deref(),
                Some("https://www.google.com/s2/favicons?sz=256&domain=example.com")
            );
        }
    }

    #[test]
    fn test_news_card_without_host_has_no_image() {
        let item = Item {
            url: "not a url".to_string(),
            ..news_item()
        };
        let html = news_card(&item, &settings()).into_string();
        assert!(!html.contains("<img"));
        assert!(!html.contains("class=\"host\""));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn test_paper_card_has_no_image_and_tags_before_summary() {
        let item = Item {
            cover: Some("https://cdn.example.org/cover.png".to_string()),
            ..paper_item()
        };
        let html = paper_card(&item, &settings()).into_string();
        assert!(!html.contains("<img"));
        let tags = html.find("class=\"tags\"").unwrap();
        let summary = html.find("class=\"summary\"").unwrap();
        assert!(tags < summary);
    }

    #[test]
    fn test_news_card_tags_after_summary() {
        let html = news_card(&news_item(), &settings()).into_string();
        let tags = html.find("class=\"tags\"").unwrap();
        let summary = html.find("class=\"summary\"").unwrap();
        assert!(summary < tags);
    }

    #[test]
    fn test_render_card_selects_variant() {
        let paper = render_card(&paper_item(), &settings()).into_string();
        let news = render_card(&news_item(), &settings()).into_string();
        assert!(paper.starts_with("<article class=\"card paper compact\">"));
        assert!(news.starts_with("<article class=\"card news\">"));
    }

    #[test]
    fn test_links_open_in_new_context_without_opener() {
        let html = news_card(&news_item(), &settings()).into_string();
        assert!(html.contains(
            "<a href=\"https://example.com/x\" target=\"_blank\" rel=\"noopener noreferrer\">Lab-on-a-chip startup raises funds</a>"
        ));
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
    }

    #[test]
    fn test_meta_line_and_footer() {
        let html = news_card(&news_item(), &settings()).into_string();
        assert!(html.contains("<span class=\"source\">TechNews</span> · <time>2025-09-17</time>"));
        assert!(html.contains("<span class=\"host\">example.com</span>"));
        assert!(html.contains("Read original →"));
        assert!(html.contains("<span class=\"chip\">AI</span>"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let item = Item {
            url: "https://example.com/x".to_string(),
            ..Item::default()
        };
        let html = render_card(&item, &settings()).into_string();
        assert!(html.contains("<span class=\"source\">unknown</span>"));
        assert!(!html.contains("<time>"));
        assert!(!html.contains("class=\"summary\""));
        assert!(!html.contains("class=\"tags\""));
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let item = Item {
            title: Some("<script>alert('t')</script>".to_string()),
            summary: Some("<img src=x onerror=alert(1)>".to_string()),
            source: Some("\"><b>src</b>".to_string()),
            tags: vec!["<i>tag</i>".to_string()],
            url: "javascript:alert(1)".to_string(),
            ..Item::default()
        };
        let html = render_card(&item, &settings()).into_string();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;i&gt;tag&lt;/i&gt;"));
    }
}
