//! Listing state for the users table. Every finished fetch is tagged with the
//! query that started it, so the table can tell the page it asked for from the
//! page still on screen while the next one loads.

use crate::{
    app_lib::AppError,
    features::users::{
        pagination,
        types::{User, UsersPage, UsersPageRequest},
    },
};

/// A page request plus the retry attempt it belongs to. Bumping `attempt`
/// asks for the same page again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub request: UsersPageRequest,
    pub attempt: u32,
}

impl ListingQuery {
    pub fn new(request: UsersPageRequest, attempt: u32) -> Self {
        Self { request, attempt }
    }
}

/// Outcome of one fetch and the query it answered.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPage {
    pub query: ListingQuery,
    pub result: Result<UsersPage, AppError>,
}

/// Which of the table's three states to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingPhase {
    Loading,
    Failed,
    Ready,
}

/// The table's reading of `current` against the most recent finished fetch.
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a> {
    current: ListingQuery,
    latest: Option<&'a LoadedPage>,
}

impl<'a> Listing<'a> {
    pub fn new(current: ListingQuery, latest: Option<&'a LoadedPage>) -> Self {
        Self { current, latest }
    }

    /// Rows from any page are worth showing. An error only counts for the
    /// page being asked for; an older page's error leaves nothing to show.
    pub fn phase(&self) -> ListingPhase {
        match self.latest {
            None => ListingPhase::Loading,
            Some(LoadedPage { result: Ok(_), .. }) => ListingPhase::Ready,
            Some(loaded) if loaded.query.request == self.current.request => ListingPhase::Failed,
            Some(_) => ListingPhase::Loading,
        }
    }

    /// True until a fetch for exactly `current` has finished.
    pub fn is_fetching(&self) -> bool {
        self.latest.is_none_or(|loaded| loaded.query != self.current)
    }

    /// Rows on screen are left over from an earlier query.
    pub fn is_placeholder(&self) -> bool {
        self.page().is_some() && self.is_fetching()
    }

    pub fn page(&self) -> Option<&'a UsersPage> {
        self.latest.and_then(|loaded| loaded.result.as_ref().ok())
    }

    pub fn users(&self) -> &'a [User] {
        self.page().map_or(&[], |page| page.users.as_slice())
    }

    pub fn total_pages(&self) -> u32 {
        self.page().map_or(0, |page| {
            pagination::total_pages(page.total, self.current.request.limit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Listing, ListingPhase, ListingQuery, LoadedPage};
    use crate::{
        app_lib::AppError,
        features::users::types::{User, UsersPage, UsersPageRequest},
    };

    const LIMIT: u32 = 5;

    fn query(page: u32) -> ListingQuery {
        ListingQuery::new(UsersPageRequest::new(page, LIMIT), 0)
    }

    fn user(id: u64) -> User {
        User {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            ..User::default()
        }
    }

    fn loaded(query: ListingQuery) -> LoadedPage {
        let first = query.request.skip() + 1;
        LoadedPage {
            query,
            result: Ok(UsersPage {
                users: (first..first + u64::from(LIMIT)).map(user).collect(),
                total: 208,
                skip: query.request.skip(),
                limit: u64::from(LIMIT),
            }),
        }
    }

    fn failed(query: ListingQuery) -> LoadedPage {
        LoadedPage {
            query,
            result: Err(AppError::Network("offline".to_string())),
        }
    }

    fn ids(listing: &Listing<'_>) -> Vec<u64> {
        listing.users().iter().map(|user| user.id).collect()
    }

    #[test]
    fn first_load_has_nothing_to_show() {
        let listing = Listing::new(query(1), None);

        assert_eq!(listing.phase(), ListingPhase::Loading);
        assert!(listing.is_fetching());
        assert!(!listing.is_placeholder());
        assert!(listing.users().is_empty());
        assert_eq!(listing.total_pages(), 0);
    }

    #[test]
    fn resolved_page_is_ready() {
        let page_one = loaded(query(1));
        let listing = Listing::new(query(1), Some(&page_one));

        assert_eq!(listing.phase(), ListingPhase::Ready);
        assert!(!listing.is_fetching());
        assert!(!listing.is_placeholder());
        assert_eq!(ids(&listing), [1, 2, 3, 4, 5]);
        assert_eq!(listing.total_pages(), 42);
    }

    #[test]
    fn page_change_keeps_previous_rows_until_the_new_page_resolves() {
        let page_one = loaded(query(1));
        let waiting = Listing::new(query(2), Some(&page_one));

        assert_eq!(waiting.phase(), ListingPhase::Ready);
        assert!(waiting.is_fetching());
        assert!(waiting.is_placeholder());
        assert_eq!(ids(&waiting), [1, 2, 3, 4, 5]);
        assert_eq!(waiting.total_pages(), 42);

        let page_two = loaded(query(2));
        let resolved = Listing::new(query(2), Some(&page_two));

        assert!(!resolved.is_fetching());
        assert!(!resolved.is_placeholder());
        assert_eq!(ids(&resolved), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn going_back_shows_the_later_page_until_the_earlier_one_returns() {
        let page_two = loaded(query(2));
        let back = Listing::new(query(1), Some(&page_two));

        assert_eq!(back.phase(), ListingPhase::Ready);
        assert!(back.is_placeholder());
        assert_eq!(ids(&back), [6, 7, 8, 9, 10]);

        let page_one = loaded(query(1));
        let resolved = Listing::new(query(1), Some(&page_one));
        assert!(!resolved.is_placeholder());
        assert_eq!(ids(&resolved), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn failure_for_current_page_is_reported() {
        let error = failed(query(2));
        let listing = Listing::new(query(2), Some(&error));

        assert_eq!(listing.phase(), ListingPhase::Failed);
        assert!(!listing.is_fetching());
        assert!(listing.users().is_empty());
        assert_eq!(listing.total_pages(), 0);
    }

    #[test]
    fn retry_stays_failed_but_fetching_until_it_finishes() {
        let error = failed(query(2));
        let retry = ListingQuery::new(UsersPageRequest::new(2, LIMIT), 1);
        let retrying = Listing::new(retry, Some(&error));

        assert_eq!(retrying.phase(), ListingPhase::Failed);
        assert!(retrying.is_fetching());
        assert!(!retrying.is_placeholder());

        let recovered = loaded(retry);
        let listing = Listing::new(retry, Some(&recovered));
        assert_eq!(listing.phase(), ListingPhase::Ready);
        assert!(!listing.is_fetching());
        assert_eq!(ids(&listing), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn failure_for_another_page_reads_as_loading() {
        let error = failed(query(2));
        let listing = Listing::new(query(3), Some(&error));

        assert_eq!(listing.phase(), ListingPhase::Loading);
        assert!(listing.is_fetching());
    }

    #[test]
    fn empty_listing_is_ready_with_no_rows() {
        let empty = LoadedPage {
            query: query(1),
            result: Ok(UsersPage::default()),
        };
        let listing = Listing::new(query(1), Some(&empty));

        assert_eq!(listing.phase(), ListingPhase::Ready);
        assert!(listing.users().is_empty());
        assert_eq!(listing.total_pages(), 0);
    }
}
