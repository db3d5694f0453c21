//! Leptos DataTable Utilities
//!
//! Client-side search, filter, sort and pagination for in-memory tables,
//! plus the controls every table page shares.

mod query;

use leptos::prelude::*;

pub use query::{
    apply, filter_sorted, next_sort, page_count, page_window, Sort, SortDir, SortKey, TablePage,
    TableQuery, TableRow,
};

/// Number of page buttons shown by the paginator
const PAGE_WINDOW: usize = 5;

/// Reactive table state signals
#[derive(Clone, Copy)]
pub struct TableState {
    pub search: RwSignal<String>,
    pub sort: RwSignal<Option<Sort>>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: RwSignal::new(String::new()),
            sort: RwSignal::new(None),
            page: RwSignal::new(0),
            page_size: RwSignal::new(page_size),
        }
    }

    /// Start sorted by a column
    pub fn sorted_by(self, column: &'static str, dir: SortDir) -> Self {
        self.sort.set(Some(Sort { column, dir }));
        self
    }

    /// Current query (tracks all signals)
    pub fn query(&self) -> TableQuery {
        TableQuery {
            search: self.search.get(),
            sort: self.sort.get(),
            page: self.page.get(),
            page_size: self.page_size.get(),
        }
    }

    /// Current query without subscribing, for event handlers
    pub fn query_untracked(&self) -> TableQuery {
        TableQuery {
            search: self.search.get_untracked(),
            sort: self.sort.get_untracked(),
            page: self.page.get_untracked(),
            page_size: self.page_size.get_untracked(),
        }
    }

    pub fn set_search(&self, search: String) {
        self.search.set(search);
        self.page.set(0);
    }

    /// Call after any external filter (status/category select) changes
    pub fn reset_page(&self) {
        self.page.set(0);
    }

    pub fn toggle_sort(&self, column: &'static str) {
        let current = self.sort.get_untracked();
        self.sort.set(Some(next_sort(current, column)));
        self.page.set(0);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size.max(1));
        self.page.set(0);
    }
}

/// Search input bound to a table
#[component]
pub fn SearchBox(
    state: TableState,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    view! {
        <input
            type="search"
            class="table-search"
            placeholder=placeholder
            prop:value=move || state.search.get()
            on:input=move |ev| state.set_search(event_target_value(&ev))
        />
    }
}

/// Clickable column header that toggles sorting
#[component]
pub fn SortHeader(state: TableState, column: &'static str, label: &'static str) -> impl IntoView {
    let arrow = move || match state.sort.get() {
        Some(sort) if sort.column == column => sort.dir.arrow(),
        _ => "",
    };
    view! {
        <th class="sortable" on:click=move |_| state.toggle_sort(column)>
            {label}
            <span class="sort-arrow">{arrow}</span>
        </th>
    }
}

/// Rows-per-page selector
#[component]
pub fn PageSizeSelect(state: TableState, choices: &'static [usize]) -> impl IntoView {
    view! {
        <select
            class="page-size-select"
            prop:value=move || state.page_size.get().to_string()
            on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                    state.set_page_size(size);
                }
            }
        >
            {choices.iter().map(|size| {
                let size = *size;
                view! { <option value=size.to_string()>{size} " / page"</option> }
            }).collect_view()}
        </select>
    }
}

/// Pager with range summary and a window of page buttons
#[component]
pub fn Paginator<T: Clone + Send + Sync + 'static>(
    state: TableState,
    #[prop(into)] page: Signal<TablePage<T>>,
) -> impl IntoView {
    let summary = move || {
        page.with(|p| {
            if p.filtered == p.total {
                format!("Showing {}-{} of {}", p.first_index(), p.last_index(), p.total)
            } else {
                format!(
                    "Showing {}-{} of {} (filtered from {})",
                    p.first_index(),
                    p.last_index(),
                    p.filtered,
                    p.total
                )
            }
        })
    };
    let current = move || page.with(|p| p.page);
    let count = move || page.with(|p| p.page_count);

    view! {
        <div class="paginator">
            <span class="paginator-summary">{summary}</span>
            <div class="paginator-buttons">
                <button
                    type="button"
                    disabled=move || current() == 0
                    on:click=move |_| state.page.set(current().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || page_window(current(), count(), PAGE_WINDOW).into_iter().map(|n| {
                    let is_current = n == current();
                    view! {
                        <button
                            type="button"
                            class=if is_current { "page-btn active" } else { "page-btn" }
                            on:click=move |_| state.page.set(n)
                        >
                            {n + 1}
                        </button>
                    }
                }).collect_view()}
                <button
                    type="button"
                    disabled=move || current() + 1 >= count()
                    on:click=move |_| state.page.set(current() + 1)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
