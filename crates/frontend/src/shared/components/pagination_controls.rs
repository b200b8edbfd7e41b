use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / next / last buttons around a `page / total` label.
/// Hidden when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(0)
                    disabled=move || current_page.get() == 0
                    title="Première page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 0 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() == 0
                    title="Page précédente"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {}", current_page.get() + 1, total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if !is_last() {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=is_last
                    title="Page suivante"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total - 1);
                        }
                    }
                    disabled=is_last
                    title="Dernière page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </Show>
    }
}
