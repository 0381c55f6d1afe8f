use crate::config::ViewSettings;
use crate::digest::{Category, FeedDocument};
use crate::ui::cards::render_card;
use crate::ui::classify::{partition, Kind};
use crate::ui::format::format_headline;
use crate::ui::state::UiState;

/// Rendered cards of one sub-kind within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindView {
    pub kind: Kind,
    /// Concatenated card markup, already escaped.
    pub markup: String,
    /// Number of items that passed the filter.
    pub shown: usize,
}

impl KindView {
    /// Drives the empty placeholder for this grid.
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

/// Everything the page shows for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    /// Unfiltered number of items in the category.
    pub count: usize,
    /// Whether this is the active tab; only the active section is visible.
    pub active: bool,
    pub papers: KindView,
    pub news: KindView,
}

impl CategoryView {
    pub fn kind(&self, kind: Kind) -> &KindView {
        match kind {
            Kind::Paper => &self.papers,
            Kind::News => &self.news,
        }
    }
}

/// Full view derived from one document and one UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Text for the `today` display.
    pub headline: String,
    pub total: usize,
    pub active: Category,
    /// One entry per category, in tab order.
    pub categories: Vec<CategoryView>,
}

impl ViewModel {
    /// View for `category`, if this model carries one.
    pub fn category(&self, category: Category) -> Option<&CategoryView> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Build the view for `document` under `state`.
///
/// Every category is filtered and rendered, not just the active one, so a tab
/// switch only changes visibility. The result depends on nothing but the inputs.
pub fn mount(document: &FeedDocument, state: &UiState, settings: &ViewSettings) -> ViewModel {
    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let items = document.items.get(category);
            let split = partition(items, &state.search_query);
            let render = |kind: Kind| {
                let cards = split.get(kind);
                KindView {
                    kind,
                    markup: cards
                        .iter()
                        .map(|item| render_card(item, settings).into_string())
                        .collect(),
                    shown: cards.len(),
                }
            };

            CategoryView {
                category,
                count: items.len(),
                active: category == state.active_category,
                papers: render(Kind::Paper),
                news: render(Kind::News),
            }
        })
        .collect();

    let total = document.items.total();
    ViewModel {
        headline: format_headline(&document.date, total, &settings.headline_date_format),
        total,
        active: state.active_category,
        categories,
    }
}
