//! User route group re-exported by the top-level routing module.

mod detail_modal;
mod pagination;
mod table;

pub(crate) use table::UsersTablePage;
