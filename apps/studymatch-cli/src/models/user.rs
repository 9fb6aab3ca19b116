//! User data models

use super::{Group, Rate};
use serde::{Deserialize, Serialize};

/// A student as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// University-issued username, stable across sessions
    pub netid: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rates: Vec<Rate>,
}

/// Create user request
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub netid: String,
}

/// Body of `PUT /users/{id}/`
#[derive(Debug, Clone, Serialize)]
pub struct GroupAssignment {
    pub group_id: Option<i64>,
}

/// `PUT /users/{id}/` answers with either the user or the joined group
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserOrGroup {
    User(User),
    Group(Group),
}

impl UserOrGroup {
    /// Group id the exchange left the user in, when the answer says so
    pub fn group_id(&self) -> Option<i64> {
        match self {
            UserOrGroup::User(user) => user.group_id,
            UserOrGroup::Group(group) => Some(group.id),
        }
    }
}
