use crate::digest::Item;
use crate::ui::filter::matches_query;

/// Lower-cased tags that mark an item as a paper rather than news.
pub const PAPER_MARKERS: [&str; 3] = ["peer-reviewed", "preprint", "journal"];

/// Sub-kind of an item within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Paper,
    News,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Paper, Kind::News];

    /// Suffix used in element ids (`grid-<key>-papers`).
    pub fn suffix(self) -> &'static str {
        match self {
            Kind::Paper => "papers",
            Kind::News => "news",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Kind::Paper => "Papers",
            Kind::News => "News",
        }
    }
}

/// True iff any tag, lower-cased, is one of [`PAPER_MARKERS`].
pub fn is_paper(item: &Item) -> bool {
    item.tags
        .iter()
        .any(|tag| PAPER_MARKERS.contains(&tag.to_lowercase().as_str()))
}

pub fn kind_of(item: &Item) -> Kind {
    if is_paper(item) {
        Kind::Paper
    } else {
        Kind::News
    }
}

/// Filtered items of one category, split by sub-kind.
///
/// Source order is preserved within each side.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub papers: Vec<&'a Item>,
    pub news: Vec<&'a Item>,
}

impl<'a> Partition<'a> {
    pub fn get(&self, kind: Kind) -> &[&'a Item] {
        match kind {
            Kind::Paper => &self.papers,
            Kind::News => &self.news,
        }
    }

    pub fn len(&self) -> usize {
        self.papers.len() + self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep items matching `query`, then split them into papers and news.
pub fn partition<'a>(items: &'a [Item], query: &str) -> Partition<'a> {
    let mut out = Partition::default();
    for item in items.iter().filter(|item| matches_query(item, query)) {
        match kind_of(item) {
            Kind::Paper => out.papers.push(item),
            Kind::News => out.news.push(item),
        }
    }
    out
}
