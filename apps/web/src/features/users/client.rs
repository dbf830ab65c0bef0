//! Client helpers for the users listing endpoint. These functions keep endpoint
//! paths centralized; paging arithmetic lives on `UsersPageRequest`.

use crate::{
    app_lib::{AppError, api::with_query, get_json},
    features::users::types::{UsersPage, UsersPageRequest},
};

const USERS_PATH: &str = "/users";

/// Fetches one page of users, issuing a single `GET /users?skip=..&limit=..`.
pub async fn fetch_users(request: UsersPageRequest) -> Result<UsersPage, AppError> {
    if request.limit == 0 {
        return Err(AppError::Config("Page size must be positive.".to_string()));
    }

    get_json(&with_query(USERS_PATH, &request.query_pairs())).await
}
