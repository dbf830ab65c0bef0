//! Build page: what is deployed and which listing API it talks to.

use crate::app_lib::{build_info, config::AppConfig};
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let rows = build_info::details(&AppConfig::load());

    view! {
        <AppShell>
            <section class="mx-auto max-w-xl overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800">
                <h1 class="border-b border-gray-100 px-6 py-4 text-lg font-semibold text-gray-900 dark:border-gray-700 dark:text-white">
                    "Build"
                </h1>
                <dl class="divide-y divide-gray-100 dark:divide-gray-700">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="grid grid-cols-3 gap-4 px-6 py-3 text-sm">
                                    <dt class="font-medium text-gray-500 dark:text-gray-400">{label}</dt>
                                    <dd class="col-span-2 break-all font-mono text-gray-900 dark:text-gray-100">
                                        {value}
                                    </dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </section>
        </AppShell>
    }
}
