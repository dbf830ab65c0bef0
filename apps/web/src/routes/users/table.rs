//! Users table route. It owns the current page and the selected user; the
//! listing comes from a `LocalResource` keyed on the page, which keeps its last
//! value while the next page loads so the previous rows stay on screen.

use crate::{
    app_lib::{config::AppConfig, theme::Theme},
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::users::{
        client,
        listing::{Listing, ListingPhase, ListingQuery, LoadedPage},
        types::{User, UsersPageRequest},
    },
    routes::users::{detail_modal::UserDetailModal, pagination::PaginationBar},
};
use leptos::prelude::*;

/// Shown for every failed listing request; the cause goes to the log.
const LOAD_ERROR_MESSAGE: &str = "Error loading data";
const COLUMNS: &str = "4";

/// Renders the paginated users table, fetching one page at a time.
#[component]
pub fn UsersTablePage() -> impl IntoView {
    let limit = AppConfig::load().page_size;
    let page = RwSignal::new(1_u32);
    let attempt = RwSignal::new(0_u32);
    let selected = RwSignal::new(None::<User>);

    let query = Memo::new(move |_| {
        ListingQuery::new(UsersPageRequest::new(page.get(), limit), attempt.get())
    });
    let users = LocalResource::new(move || {
        let query = query.get();
        async move {
            let result = client::fetch_users(query.request).await;
            if let Err(err) = &result {
                tracing::warn!(page = query.request.page, error = %err, "failed to load users");
            }
            LoadedPage { query, result }
        }
    });
    let latest = Memo::new(move |_| users.get());

    let phase = listing_memo(query, latest, |listing| listing.phase());
    let fetching = listing_memo(query, latest, |listing| listing.is_fetching());
    let placeholder = listing_memo(query, latest, |listing| listing.is_placeholder());
    let rows = listing_memo(query, latest, |listing| listing.users().to_vec());
    let total_pages = listing_memo(query, latest, |listing| listing.total_pages());

    view! {
        <AppShell>
            <div class="py-20 lg:px-72 md:px-16 sm:px-2">
                {move || match phase.get() {
                    ListingPhase::Loading => {
                        view! {
                            <div class="flex items-center justify-center gap-3 text-gray-500 dark:text-gray-400">
                                <Spinner />
                                <span>"Loading..."</span>
                            </div>
                        }
                            .into_any()
                    }
                    ListingPhase::Failed => {
                        view! {
                            <Alert kind=AlertKind::Error message=LOAD_ERROR_MESSAGE>
                                <Button
                                    disabled=fetching
                                    on_click=move |_| attempt.update(|count| *count = count.wrapping_add(1))
                                >
                                    "Retry"
                                </Button>
                            </Alert>
                        }
                            .into_any()
                    }
                    ListingPhase::Ready => {
                        view! {
                            <UsersTable
                                rows=rows
                                placeholder=placeholder
                                fetching=fetching
                                selected=selected
                            />
                        }
                            .into_any()
                    }
                }}
                <Show when=move || phase.get() == ListingPhase::Ready>
                    <PaginationBar page=page total_pages=total_pages />
                </Show>
                <UserDetailModal selected=selected />
            </div>
        </AppShell>
    }
}

/// Derives one value from the listing; subscribers only rerun when it changes.
fn listing_memo<T>(
    query: Memo<ListingQuery>,
    latest: Memo<Option<LoadedPage>>,
    read: fn(&Listing<'_>) -> T,
) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| {
        let current = query.get();
        latest.with(|latest| read(&Listing::new(current, latest.as_ref())))
    })
}

#[component]
fn UsersTable(
    rows: Memo<Vec<User>>,
    placeholder: Memo<bool>,
    fetching: Memo<bool>,
    selected: RwSignal<Option<User>>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-3 pb-5">
            <h1 class="font-bold text-2xl text-gray-900 dark:text-white">"User Table"</h1>
            <Show when=move || fetching.get()>
                <Spinner small=true />
            </Show>
        </div>
        <div class=Theme::CARD>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TABLE_HEAD>"Name"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Role"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Phone"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Actions"</th>
                    </tr>
                </thead>
                <tbody
                    class="divide-y divide-gray-200 dark:divide-gray-700 transition-opacity"
                    class:opacity-60=move || placeholder.get()
                >
                    <Show when=move || rows.with(Vec::is_empty)>
                        <tr>
                            <td colspan=COLUMNS class="px-6 py-6">
                                <Alert kind=AlertKind::Notice message="No users found." />
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=|user| user.id
                        children=move |user| view! { <UserRow user=user selected=selected /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserRow(user: User, selected: RwSignal<Option<User>>) -> impl IntoView {
    let display_name = user.display_name();
    let alt = user.full_name();
    let image = user.image.clone();
    let email = user.email.clone();
    let role = user.role.clone();
    let phone = user.phone.clone();
    let view_label = format!("View {alt}");

    view! {
        <tr class=Theme::ROW>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex justify-start items-center">
                    <img src=image alt=alt class="w-10 h-10 rounded-full mr-4" />
                    <div class="grid">
                        <span class="font-semibold text-gray-900 dark:text-white">
                            {display_name}
                        </span>
                        <span class="text-sm text-gray-500 dark:text-gray-400">{email}</span>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {role}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {phone}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <button
                    type="button"
                    class=Theme::ICON_BUTTON
                    title=view_label.clone()
                    aria-label=view_label
                    on:click=move |_| selected.set(Some(user.clone()))
                >
                    "visibility"
                </button>
            </td>
        </tr>
    }
}
