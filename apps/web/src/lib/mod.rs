//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata.
//!
//! ## Data Flow
//!
//! 1. **Page change:** The table route derives a `ListingQuery` from its local
//!    page signal; a `LocalResource` keyed on it starts the fetch.
//! 2. **Fetch:** The users client issues one `GET /users?skip=..&limit=..`
//!    through the JSON helpers in `api`, bounded by the request timeout.
//! 3. **Render:** The resource keeps its last value while the next one loads,
//!    so the view shows the previous page as a placeholder until it resolves.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::get_json;
pub(crate) use errors::AppError;
