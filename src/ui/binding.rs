//! View binding: the seam between the pure view model and whatever hosts it.
//!
//! Element ids follow the page contract: `grid-<key>-papers`, `grid-<key>-news`,
//! `empty-<key>-papers`, `empty-<key>-news`, `count-<key>`, a section with id
//! `<key>`, tabs carrying `data-cat`, and the `today` display.

use crate::digest::Category;
use crate::ui::classify::Kind;
use crate::ui::mount::ViewModel;
use std::collections::{HashMap, HashSet};

pub const TODAY_ID: &str = "today";
pub const SEARCH_INPUT_ID: &str = "q";
pub const PRINT_BUTTON_ID: &str = "printBtn";
pub const COPY_BUTTON_ID: &str = "copyMD";

pub fn grid_id(category: Category, kind: Kind) -> String {
    format!("grid-{}-{}", category.key(), kind.suffix())
}

pub fn empty_id(category: Category, kind: Kind) -> String {
    format!("empty-{}-{}", category.key(), kind.suffix())
}

pub fn count_id(category: Category) -> String {
    format!("count-{}", category.key())
}

pub fn section_id(category: Category) -> &'static str {
    category.key()
}

/// Named element handles the view is pushed into.
pub trait ViewBinding {
    fn set_text(&mut self, id: &str, text: &str);
    /// `html` is already escaped markup.
    fn set_html(&mut self, id: &str, html: &str);
    fn set_hidden(&mut self, id: &str, hidden: bool);
    /// Toggle the active state of the tab whose `data-cat` is `category`.
    fn set_tab_active(&mut self, category: Category, active: bool);
}

/// Push a whole view model into `binding`.
pub fn apply_view<B: ViewBinding + ?Sized>(view: &ViewModel, binding: &mut B) {
    binding.set_text(TODAY_ID, &view.headline);

    for category in &view.categories {
        let key = category.category;
        binding.set_text(&count_id(key), &category.count.to_string());
        binding.set_tab_active(key, category.active);
        binding.set_hidden(section_id(key), !category.active);

        for kind in Kind::ALL {
            let grid = category.kind(kind);
            binding.set_html(&grid_id(key, kind), &grid.markup);
            binding.set_hidden(&empty_id(key, kind), !grid.is_empty());
        }
    }
}

/// In-memory binding that records the latest value per element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub text: HashMap<String, String>,
    pub html: HashMap<String, String>,
    pub hidden: HashSet<String>,
    pub active_tabs: HashSet<Category>,
}

impl MemoryView {
    pub fn text(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.html.get(id).map(String::as_str)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

impl ViewBinding for MemoryView {
    fn set_text(&mut self, id: &str, text: &str) {
        self.text.insert(id.to_string(), text.to_string());
    }

    fn set_html(&mut self, id: &str, html: &str) {
        self.html.insert(id.to_string(), html.to_string());
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) {
        if hidden {
            self.hidden.insert(id.to_string());
        } else {
            self.hidden.remove(id);
        }
    }

    fn set_tab_active(&mut self, category: Category, active: bool) {
        if active {
            self.active_tabs.insert(category);
        } else {
            self.active_tabs.remove(&category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewSettings;
    use crate::digest::{CategoryItems, FeedDocument, Item};
    use crate::ui::mount::mount;
    use crate::ui::state::UiState;

    fn document() -> FeedDocument {
        FeedDocument {
            date: "2025-01-01".to_string(),
            items: CategoryItems {
                ai_biomed: vec![Item {
                    title: Some("A".to_string()),
                    url: "https://example.com/a".to_string(),
                    tags: vec!["journal".to_string()],
                    ..Item::default()
                }],
                microfluidics: vec![],
                bioinfo: vec![],
            },
        }
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(grid_id(Category::AiBiomed, Kind::Paper), "grid-ai_biomed-papers");
        assert_eq!(empty_id(Category::Bioinfo, Kind::News), "empty-bioinfo-news");
        assert_eq!(count_id(Category::Microfluidics), "count-microfluidics");
        assert_eq!(section_id(Category::Bioinfo), "bioinfo");
    }

    #[test]
    fn test_apply_view_sets_every_element() {
        let view = mount(&document(), &UiState::default(), &ViewSettings::default());
        let mut binding = MemoryView::default();
        apply_view(&view, &mut binding);

        assert_eq!(binding.text(TODAY_ID), Some("2025-01-01 (Wed) · 1 item"));
        assert_eq!(binding.text("count-ai_biomed"), Some("1"));
        assert_eq!(binding.text("count-bioinfo"), Some("0"));

        assert!(!binding.is_hidden("ai_biomed"));
        assert!(binding.is_hidden("microfluidics"));
        assert!(binding.is_hidden("bioinfo"));
        assert_eq!(binding.active_tabs, HashSet::from([Category::AiBiomed]));

        assert!(binding.html("grid-ai_biomed-papers").unwrap().contains(">A</a>"));
        assert_eq!(binding.html("grid-ai_biomed-news"), Some(""));
        assert!(binding.is_hidden("empty-ai_biomed-papers"));
        assert!(!binding.is_hidden("empty-ai_biomed-news"));
        assert!(!binding.is_hidden("empty-bioinfo-papers"));

        // 3 categories x 2 kinds
        assert_eq!(binding.html.len(), 6);
    }

    #[test]
    fn test_reapplying_moves_visibility() {
        let doc = document();
        let mut binding = MemoryView::default();
        apply_view(
            &mount(&doc, &UiState::default(), &ViewSettings::default()),
            &mut binding,
        );
        let papers_before = binding.html("grid-ai_biomed-papers").unwrap().to_string();

        apply_view(
            &mount(&doc, &UiState::new(Category::Bioinfo), &ViewSettings::default()),
            &mut binding,
        );
        assert!(binding.is_hidden("ai_biomed"));
        assert!(!binding.is_hidden("bioinfo"));
        assert_eq!(binding.active_tabs, HashSet::from([Category::Bioinfo]));
        assert_eq!(binding.html("grid-ai_biomed-papers").unwrap(), papers_before);
    }
}
