//! Modal with a selected user's personal and company details. Closing the
//! modal (close button, backdrop click, or Escape) clears the selection.

use crate::features::users::types::User;
use leptos::{ev, prelude::*};

const FIELD_LABEL: &str = "font-semibold text-gray-900 dark:text-white";

#[component]
pub fn UserDetailModal(selected: RwSignal<Option<User>>) -> impl IntoView {
    let close = move || selected.set(None);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || {
            selected
                .get()
                .map(|user| {
                    let title = user.full_name();
                    let email = user.email.clone();
                    view! {
                        <div
                            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
                            on:click=move |_| close()
                        >
                            <div
                                role="dialog"
                                aria-modal="true"
                                aria-labelledby="user-detail-title"
                                class="relative bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full sm:max-w-sm md:max-w-md lg:max-w-3xl max-h-[90vh] overflow-y-auto"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700 flex items-start justify-between">
                                    <div>
                                        <h2
                                            id="user-detail-title"
                                            class="text-lg font-semibold text-gray-900 dark:text-white"
                                        >
                                            {title}
                                        </h2>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {email}
                                        </p>
                                    </div>
                                    <button
                                        type="button"
                                        aria-label="Close"
                                        on:click=move |_| close()
                                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                                    >
                                        <span class="material-symbols-outlined">"close"</span>
                                    </button>
                                </div>
                                <UserDetailBody user=user />
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn UserDetailBody(user: User) -> impl IntoView {
    let alt = user.full_name();
    let User {
        age,
        phone,
        university,
        role,
        blood_group,
        image,
        address,
        company,
        ..
    } = user;
    let address = address.summary();
    let company_address = company.address.summary();

    view! {
        <div class="grid gap-2 p-6">
            <img
                src=image
                alt=alt
                class="w-16 h-16 md:w-24 md:h-24 lg:w-32 lg:h-32 rounded-full mx-auto"
            />

            <h3 class="text-center font-bold my-1 md:my-2 lg:my-3 text-gray-900 dark:text-white">
                "Personal Info"
            </h3>
            <dl class="grid gap-1 text-sm md:text-base text-gray-700 dark:text-gray-300">
                <DetailField label="Age" value=age.to_string() />
                <DetailField label="Phone" value=phone />
                <DetailField label="University" value=university />
                <DetailField label="Role" value=role />
                <DetailField label="Blood Group" value=blood_group />
                <DetailField label="Address" value=address />
            </dl>

            <h3 class="text-center font-bold my-1 md:my-2 lg:my-3 text-gray-900 dark:text-white">
                "Company Info"
            </h3>
            <dl class="grid gap-1 text-sm md:text-base text-gray-700 dark:text-gray-300">
                <DetailField label="Name" value=company.name />
                <DetailField label="Title" value=company.title />
                <DetailField label="Company Address" value=company_address />
            </dl>
        </div>
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <dt class=FIELD_LABEL>{format!("{label}:")}</dt>
            <dd>{value}</dd>
        </div>
    }
}
