//! Board posts and comments

use super::require_non_empty;
use crate::error::CliResult;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// A post on the shared board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub post_name: String,
    #[serde(alias = "post_description")]
    pub description: String,
    /// Display string, not a sortable instant
    pub timestamp: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment under a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(alias = "comment_description")]
    pub description: String,
    pub timestamp: String,
    #[serde(default)]
    pub post_id: Option<i64>,
}

/// Create post request
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub post_name: String,
    pub description: String,
    pub timestamp: String,
}

impl NewPost {
    pub fn new(post_name: &str, description: &str, timestamp: String) -> CliResult<Self> {
        Ok(Self {
            post_name: require_non_empty("Post title", post_name)?,
            description: require_non_empty("Post description", description)?,
            timestamp,
        })
    }
}

/// Create comment request
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub description: String,
    pub timestamp: String,
}

impl NewComment {
    pub fn new(description: &str, timestamp: String) -> CliResult<Self> {
        Ok(Self {
            description: require_non_empty("Comment", description)?,
            timestamp,
        })
    }
}

/// `POST /posts/{id}/comments/` answers with the updated post or the comment
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostOrComment {
    Post(Post),
    Comment(Comment),
}

/// Short local date and time, e.g. `12/7/24, 3:04 PM`
pub fn display_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%y, %-I:%M %p").to_string()
}

/// Timestamp for content created right now
pub fn now_timestamp() -> String {
    display_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_decode_post_either_description_key() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "post_name": "Prelim",
            "post_description": "study session",
            "timestamp": "12/7/24, 3:04 PM"
        }))
        .unwrap();
        assert_eq!(post.description, "study session");
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_decode_comment_plain_description() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 2, "description": "count me in", "timestamp": "now"
        }))
        .unwrap();
        assert_eq!(comment.post_id, None);
    }

    #[test]
    fn test_post_or_comment() {
        let as_post: PostOrComment = serde_json::from_value(json!({
            "id": 1, "post_name": "P", "description": "d", "timestamp": "t", "comments": []
        }))
        .unwrap();
        assert!(matches!(as_post, PostOrComment::Post(_)));

        let as_comment: PostOrComment = serde_json::from_value(json!({
            "id": 3, "description": "d", "timestamp": "t", "post_id": 1
        }))
        .unwrap();
        assert!(matches!(as_comment, PostOrComment::Comment(_)));
    }

    #[test]
    fn test_new_comment_rejects_whitespace() {
        assert!(NewComment::new("   \n", "t".to_string()).is_err());
        assert_eq!(
            NewComment::new("  hi ", "t".to_string()).unwrap().description,
            "hi"
        );
    }

    #[test]
    fn test_new_post_requires_title_and_description() {
        assert!(NewPost::new("", "d", "t".to_string()).is_err());
        assert!(NewPost::new("P", "", "t".to_string()).is_err());
        assert!(NewPost::new("P", "d", "t".to_string()).is_ok());
    }

    #[test]
    fn test_display_timestamp_short_style() {
        let at = Utc.with_ymd_and_hms(2024, 12, 7, 15, 4, 0).unwrap();
        assert_eq!(display_timestamp(&at), "12/7/24, 3:04 PM");
    }
}
