//! Group API client methods

use super::{ApiClient, ApiResult};
use crate::models::{Group, Listing, NewGroup};

impl ApiClient {
    /// List every group with members and tasks embedded
    pub async fn list_groups(&self) -> ApiResult<Vec<Group>> {
        let listing: Listing<Group> = self.fetch("/groups/").await?;
        Ok(listing.into_vec())
    }

    /// Get a single group by ID
    pub async fn get_group(&self, id: i64) -> ApiResult<Group> {
        self.fetch(&format!("/groups/{id}/")).await
    }

    /// Create an empty group
    pub async fn create_group(&self, request: &NewGroup) -> ApiResult<Group> {
        self.create("/groups/", request).await
    }

    /// Delete a group
    pub async fn delete_group(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/groups/{id}/")).await
    }
}
