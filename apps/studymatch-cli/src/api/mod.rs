//! REST client for the StudyMatch server

mod client;
mod error;
mod groups;
mod posts;
mod tasks;
mod users;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use reqwest::Method;
pub use users::SignIn;
