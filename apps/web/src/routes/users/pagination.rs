//! Pagination bar for the users table: first, previous, a window of page
//! numbers with ellipses, next, and last. Clicking any control only moves the
//! page signal; fetching follows from the listing resource.

use crate::app_lib::theme::Theme;
use crate::features::users::pagination::{self, EllipsisSide, NavBounds, PageItem};
use leptos::prelude::*;

const NAV_BUTTON: &str = "inline-flex items-center gap-1 h-9 px-3 text-sm font-medium rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 cursor-pointer transition-colors aria-disabled:opacity-50 aria-disabled:cursor-not-allowed";

#[component]
pub fn PaginationBar(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let bounds = Memo::new(move |_| NavBounds::new(page.get(), total_pages.get()));
    let at_start = move || bounds.get().at_start.to_string();
    let at_end = move || bounds.get().at_end.to_string();

    view! {
        <nav
            role="navigation"
            aria-label="pagination"
            class="mt-8 flex flex-wrap justify-center items-center gap-1 lg:gap-5 md:gap-3"
        >
            <button
                type="button"
                class=NAV_BUTTON
                aria-label="Go to first page"
                aria-disabled=at_start
                on:click=move |_| page.set(pagination::first())
            >
                <span class="material-symbols-outlined text-base">"first_page"</span>
                <span class="hidden sm:inline">"First"</span>
            </button>
            <button
                type="button"
                class=NAV_BUTTON
                aria-label="Go to previous page"
                aria-disabled=at_start
                on:click=move |_| page.update(|current| *current = pagination::previous(*current))
            >
                <span class="material-symbols-outlined text-base">"chevron_left"</span>
                <span class="hidden sm:inline">"Previous"</span>
            </button>
            <ul class="flex flex-row items-center gap-1">
                {move || {
                    pagination::page_window(page.get(), total_pages.get())
                        .into_iter()
                        .map(|item| view! { <li>{page_item(item, page)}</li> })
                        .collect_view()
                }}
            </ul>
            <button
                type="button"
                class=NAV_BUTTON
                aria-label="Go to next page"
                aria-disabled=at_end
                on:click=move |_| {
                    let total = total_pages.get_untracked();
                    page.update(|current| *current = pagination::next(*current, total));
                }
            >
                <span class="hidden sm:inline">"Next"</span>
                <span class="material-symbols-outlined text-base">"chevron_right"</span>
            </button>
            <button
                type="button"
                class=NAV_BUTTON
                aria-label="Go to last page"
                aria-disabled=at_end
                on:click=move |_| page.set(pagination::last(total_pages.get_untracked()))
            >
                <span class="hidden sm:inline">"Last"</span>
                <span class="material-symbols-outlined text-base">"last_page"</span>
            </button>
        </nav>
    }
}

fn page_item(item: PageItem, page: RwSignal<u32>) -> AnyView {
    match item {
        PageItem::Page { number, active } => {
            let class = if active {
                format!("{} {}", Theme::PAGE_LINK, Theme::PAGE_LINK_ACTIVE)
            } else {
                Theme::PAGE_LINK.to_string()
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-current=active.then_some("page")
                    on:click=move |_| page.set(number)
                >
                    {number}
                </button>
            }
            .into_any()
        }
        PageItem::Ellipsis(side) => {
            let label = match side {
                EllipsisSide::Start => "Earlier pages",
                EllipsisSide::End => "Later pages",
            };
            view! {
                <span class="flex h-9 w-9 items-center justify-center text-gray-500" title=label>
                    <span class="material-symbols-outlined text-base">"more_horiz"</span>
                    <span class="sr-only">{label}</span>
                </span>
            }
            .into_any()
        }
    }
}
