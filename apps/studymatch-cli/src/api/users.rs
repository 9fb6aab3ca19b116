//! User API client methods

use super::{ApiClient, ApiResult};
use crate::models::{GroupAssignment, Listing, NewUser, User, UserOrGroup};
use tracing::info;

/// Outcome of signing in with a NetID
#[derive(Debug, Clone, PartialEq)]
pub enum SignIn {
    /// A user with this NetID already existed
    Found(User),
    /// No match; the account was created
    Created(User),
    /// No match and no name to create one with
    Unknown,
}

impl ApiClient {
    /// List every user
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let listing: Listing<User> = self.fetch("/users/").await?;
        Ok(listing.into_vec())
    }

    /// Get a single user by ID
    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        self.fetch(&format!("/users/{id}/")).await
    }

    /// Create a new user; the server assigns the id
    pub async fn create_user(&self, request: &NewUser) -> ApiResult<User> {
        self.create("/users/", request).await
    }

    /// Put a user into a group, or take them out with `None`
    pub async fn assign_group(&self, user_id: i64, group_id: Option<i64>) -> ApiResult<UserOrGroup> {
        self.update(&format!("/users/{user_id}/"), &GroupAssignment { group_id })
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/users/{id}/")).await
    }

    /// Look a NetID up, creating the account when a name is supplied
    pub async fn sign_in(&self, netid: &str, name: Option<&str>) -> ApiResult<SignIn> {
        let users = self.list_users().await?;
        if let Some(user) = users.into_iter().find(|u| u.netid == netid) {
            info!(netid, id = user.id, "found existing user");
            return Ok(SignIn::Found(user));
        }

        match name {
            Some(name) => {
                let user = self
                    .create_user(&NewUser {
                        name: name.to_string(),
                        netid: netid.to_string(),
                    })
                    .await?;
                info!(netid, id = user.id, "created user");
                Ok(SignIn::Created(user))
            }
            None => Ok(SignIn::Unknown),
        }
    }
}
