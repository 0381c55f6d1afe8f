//! Static page honouring the element-id contract of [`crate::ui::binding`],
//! with the current view baked in.

use crate::digest::Category;
use crate::ui::binding::{
    count_id, empty_id, grid_id, section_id, COPY_BUTTON_ID, PRINT_BUTTON_ID, SEARCH_INPUT_ID,
    TODAY_ID,
};
use crate::ui::classify::Kind;
use crate::ui::mount::{CategoryView, ViewModel};
use crate::ui::state::UiState;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const EMPTY_TEXT: &str = "Nothing here today.";

pub fn render_page(view: &ViewModel, state: &UiState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Daily digest" }
                style { (PreEscaped(CSS)) }
            }
            body {
                header.top {
                    h1 { "Daily digest" }
                    div id=(TODAY_ID) { (view.headline) }
                    div.actions {
                        input id=(SEARCH_INPUT_ID) type="search" placeholder="Search title, summary, source, tags" value=(state.search_query);
                        button id=(PRINT_BUTTON_ID) type="button" { "Print" }
                        button id=(COPY_BUTTON_ID) type="button" { "Copy markdown" }
                    }
                }
                nav.tabs {
                    @for category in &view.categories {
                        (tab(category))
                    }
                }
                main {
                    @for category in &view.categories {
                        (section(category))
                    }
                }
            }
        }
    }
}

fn tab(view: &CategoryView) -> Markup {
    let key: Category = view.category;
    html! {
        button.tab.active[view.active] type="button" data-cat=(key.key()) {
            (key.label())
            " "
            span.count id=(count_id(key)) { (view.count) }
        }
    }
}

fn section(view: &CategoryView) -> Markup {
    let key = view.category;
    html! {
        section id=(section_id(key)) hidden[!view.active] {
            @for kind in Kind::ALL {
                @let grid = view.kind(kind);
                h2 { (kind.heading()) }
                div.grid id=(grid_id(key, kind)) { (PreEscaped(&grid.markup)) }
                div.empty id=(empty_id(key, kind)) hidden[!grid.is_empty()] { (EMPTY_TEXT) }
            }
        }
    }
}

const CSS: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; background: #f6f7f9; color: #1d2330; }
header.top { padding: 20px 24px 8px; }
header.top h1 { margin: 0 0 4px; font-size: 1.6rem; }
#today { color: #5b6475; }
.actions { display: flex; gap: 8px; margin-top: 12px; }
.actions input { flex: 1; padding: 8px 10px; border: 1px solid #cfd5df; border-radius: 6px; }
.actions button, .tab { padding: 8px 12px; border: 1px solid #cfd5df; border-radius: 6px; background: #fff; cursor: pointer; }
nav.tabs { display: flex; gap: 8px; padding: 8px 24px; }
.tab.active { background: #1d2330; color: #fff; }
main { padding: 0 24px 40px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 14px; }
.card { background: #fff; border: 1px solid #e3e7ee; border-radius: 10px; overflow: hidden; }
.card .cover img { width: 100%; height: 160px; object-fit: cover; display: block; background: #eef1f5; }
.card-body { padding: 12px 14px; }
.card.compact .card-body { padding: 8px 12px; }
.card .title { margin: 0 0 6px; font-size: 1rem; }
.card .title a { color: inherit; text-decoration: none; }
.meta { color: #5b6475; font-size: .85rem; }
.summary { font-size: .9rem; line-height: 1.45; }
.tags { display: flex; flex-wrap: wrap; gap: 6px; margin: 6px 0; }
.chip { font-size: .75rem; padding: 2px 8px; border-radius: 999px; background: #eef1f5; }
.card-foot { display: flex; justify-content: space-between; font-size: .8rem; color: #5b6475; margin-top: 8px; }
.empty { color: #8a93a3; padding: 12px 0; }
@media print { .actions, nav.tabs { display: none; } section[hidden] { display: block; } }
"#;
