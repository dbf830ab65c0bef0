//! Alert banners for errors and notices. Messages must be safe to render; raw
//! transport errors belong in the log, not here.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Notice,
}

/// Renders a styled alert banner with an optional trailing action.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "flex items-center justify-between gap-4 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        AlertKind::Notice => {
            "flex items-center justify-between gap-4 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    };

    view! {
        <div class=class role="alert">
            <span>{message}</span>
            {children.map(|children| children())}
        </div>
    }
}
