//! Wire model of the users endpoint (`GET https://dummyjson.com/users`).

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// One user record. Fields the table does not use are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub first_name: String,
    #[serde(default)]
    pub maiden_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub address: Address,
}

impl User {
    /// `"first maiden last"`, skipping empty parts.
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.maiden_name.as_str(),
            self.last_name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}
