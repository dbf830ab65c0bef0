//! Listing response and request types for the users endpoint. Records are
//! passed through to the view unmodified; the helpers here only format them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Street and country, e.g. `626 Main Street, United States`.
    pub fn summary(&self) -> String {
        join_non_empty(&[self.address.as_str(), self.country.as_str()], ", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Address,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub university: String,
}

impl User {
    /// First and last name, used for titles and image alt text.
    pub fn full_name(&self) -> String {
        join_non_empty(&[self.first_name.as_str(), self.last_name.as_str()], " ")
    }

    /// First, maiden and last name as listed in the table.
    pub fn display_name(&self) -> String {
        join_non_empty(
            &[
                self.first_name.as_str(),
                self.maiden_name.as_str(),
                self.last_name.as_str(),
            ],
            " ",
        )
    }
}

/// One page of the users listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Identifies one page of the listing; pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsersPageRequest {
    pub page: u32,
    pub limit: u32,
}

impl UsersPageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Offset of the first record on this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.limit)
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("skip", self.skip().to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::{Address, User, UsersPage, UsersPageRequest};

    const FIXTURE: &str = include_str!("../../../tests/fixtures/users_page.json");

    #[test]
    fn listing_response_deserializes_and_ignores_unknown_fields() {
        let page: UsersPage = serde_json::from_str(FIXTURE).expect("fixture parses");

        assert_eq!(page.total, 208);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 2);
        assert_eq!(page.users.len(), 2);

        let emily = &page.users[0];
        assert_eq!(emily.id, 1);
        assert_eq!(emily.maiden_name, "Smith");
        assert_eq!(emily.blood_group, "O-");
        assert_eq!(emily.address.state_code, "MS");
        assert_eq!(emily.company.name, "Dooley, Kozey and Cronin");
        assert_eq!(emily.company.address.city, "San Francisco");
        assert_eq!(emily.role, "admin");
    }

    #[test]
    fn missing_users_and_total_default_to_empty() {
        let page: UsersPage = serde_json::from_str("{}").expect("empty object parses");
        assert!(page.users.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn display_name_skips_empty_maiden_name() {
        let page: UsersPage = serde_json::from_str(FIXTURE).expect("fixture parses");

        assert_eq!(page.users[0].display_name(), "Emily Smith Johnson");
        assert_eq!(page.users[1].display_name(), "Michael Williams");
        assert_eq!(page.users[0].full_name(), "Emily Johnson");
    }

    #[test]
    fn address_summary_joins_street_and_country() {
        let address = Address {
            address: "626 Main Street".to_string(),
            country: "United States".to_string(),
            ..Address::default()
        };
        assert_eq!(address.summary(), "626 Main Street, United States");

        let partial = Address {
            country: "Canada".to_string(),
            ..Address::default()
        };
        assert_eq!(partial.summary(), "Canada");
    }

    #[test]
    fn user_requires_identity_fields() {
        let result = serde_json::from_str::<User>(r#"{"email":"a@b.c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_offset_follows_page_and_limit() {
        assert_eq!(UsersPageRequest::new(1, 5).skip(), 0);
        assert_eq!(UsersPageRequest::new(2, 5).skip(), 5);
        assert_eq!(UsersPageRequest::new(42, 5).skip(), 205);
        assert_eq!(UsersPageRequest::new(0, 5).skip(), 0);
        assert_eq!(UsersPageRequest::new(0, 5).page, 1);
    }

    #[test]
    fn request_query_pairs_carry_offset_and_limit() {
        let request = UsersPageRequest::new(3, 10);
        assert_eq!(
            request.query_pairs(),
            [("skip", "20".to_string()), ("limit", "10".to_string())]
        );
    }
}
