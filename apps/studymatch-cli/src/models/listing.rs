//! List responses
//!
//! Depending on the endpoint the server answers a collection either as a
//! bare JSON array or wrapped in an object keyed by the resource name.

use serde::Deserialize;

/// A collection in either of the server's two shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped(Wrapped<T>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wrapped<T> {
    #[serde(
        alias = "users",
        alias = "groups",
        alias = "posts",
        alias = "comments"
    )]
    items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped(wrapped) => wrapped.items,
        }
    }
}
