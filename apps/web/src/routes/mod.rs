mod health;
mod not_found;
mod users;

pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use users::UsersTablePage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths referenced from navigation links.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const HEALTH: &str = "/health";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=UsersTablePage />
            <Route path=path!("/users") view=UsersTablePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
