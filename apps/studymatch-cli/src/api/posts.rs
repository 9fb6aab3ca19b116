//! Board API client methods: posts and comments

use super::{ApiClient, ApiResult};
use crate::models::{Comment, Listing, NewComment, NewPost, Post, PostOrComment};

impl ApiClient {
    /// List board posts
    pub async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let listing: Listing<Post> = self.fetch("/posts/").await?;
        Ok(listing.into_vec())
    }

    /// Get a single post with its comments
    pub async fn get_post(&self, id: i64) -> ApiResult<Post> {
        self.fetch(&format!("/posts/{id}/")).await
    }

    /// Publish a post
    pub async fn create_post(&self, request: &NewPost) -> ApiResult<Post> {
        self.create("/posts/", request).await
    }

    /// Delete a post
    pub async fn delete_post(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/posts/{id}/")).await
    }

    /// Comments under a post
    ///
    /// Reads the post resource, which carries the comments inline.
    pub async fn list_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        let listing: Listing<Comment> = self.fetch(&format!("/posts/{post_id}/")).await?;
        Ok(listing.into_vec())
    }

    /// Comment on a post
    pub async fn add_comment(&self, post_id: i64, request: &NewComment) -> ApiResult<PostOrComment> {
        self.create(&format!("/posts/{post_id}/comments/"), request)
            .await
    }

    /// Delete a comment
    pub async fn delete_comment(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/comments/{id}/")).await
    }
}
