//! User directory feature: listing types, the listing client, listing state,
//! and pagination math. Routes render these; nothing here touches the DOM.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod listing;
pub(crate) mod pagination;
pub(crate) mod types;
