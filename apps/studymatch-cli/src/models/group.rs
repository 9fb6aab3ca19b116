//! Study group data models

use super::{Rate, Task, User};
use serde::{Deserialize, Serialize};

/// A study group with its embedded members and tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rates: Vec<Rate>,
}

impl Group {
    pub fn has_member(&self, user_id: i64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }
}

/// Create group request
#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
}

/// Where a user stands relative to one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStatus {
    /// Already a member of this group
    Joined,
    /// Member of another group; a user belongs to at most one
    InDifferentGroup(i64),
    /// Not in any group, may join
    Available,
}

impl JoinStatus {
    pub fn of(user: &User, group: &Group) -> Self {
        match user.group_id {
            Some(id) if id == group.id => JoinStatus::Joined,
            Some(other) => JoinStatus::InDifferentGroup(other),
            None => JoinStatus::Available,
        }
    }

    pub fn can_join(self) -> bool {
        self == JoinStatus::Available
    }

    pub fn label(self) -> &'static str {
        match self {
            JoinStatus::Joined => "Already Joined",
            JoinStatus::InDifferentGroup(_) => "In Different Group",
            JoinStatus::Available => "Join Group",
        }
    }
}

/// Groups whose member list contains the user
pub fn groups_of<'a>(user: &User, groups: &'a [Group]) -> Vec<&'a Group> {
    groups.iter().filter(|g| g.has_member(user.id)).collect()
}

/// Comma-separated group names, `None` when the list is empty
pub fn group_names(groups: &[&Group]) -> String {
    if groups.is_empty() {
        "None".to_string()
    } else {
        groups
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
