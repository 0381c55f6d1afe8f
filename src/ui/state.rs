use crate::digest::{Category, UnknownCategory};

/// Session-scoped UI state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_category: Category,
    /// Trimmed search input; empty means no filtering.
    pub search_query: String,
}

impl UiState {
    pub fn new(active_category: Category) -> Self {
        Self {
            active_category,
            search_query: String::new(),
        }
    }

    /// Apply a UI event and report what the shell has to do next.
    pub fn reduce(&mut self, event: UiEvent) -> Effect {
        match event {
            UiEvent::SearchInput(raw) => {
                self.search_query = raw.trim().to_string();
                Effect::Remount
            }
            UiEvent::TabClicked(category) => {
                self.active_category = category;
                Effect::Remount
            }
            UiEvent::PrintClicked => Effect::Print,
            UiEvent::CopyMarkdownClicked => Effect::CopyMarkdown,
        }
    }
}

/// Events raised by the page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raw value of the `q` input.
    SearchInput(String),
    /// A tab carrying `data-cat` was clicked.
    TabClicked(Category),
    /// `printBtn` was clicked.
    PrintClicked,
    /// `copyMD` was clicked.
    CopyMarkdownClicked,
}

impl UiEvent {
    /// Tab click from the tab's `data-cat` attribute value.
    pub fn tab_from_attr(data_cat: &str) -> Result<Self, UnknownCategory> {
        Ok(UiEvent::TabClicked(data_cat.parse()?))
    }
}

/// Follow-up work after an event is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-render every category from the current document and state.
    Remount,
    /// Open the platform print flow.
    Print,
    /// Fetch the markdown sibling and copy it to the clipboard.
    CopyMarkdown,
}
