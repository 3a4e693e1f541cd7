//! Identifier and enum types shared across the API surface.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of an open-chat channel or a user's public profile link.
///
/// Link IDs are exact 64-bit integers; the platform's web clients carry them
/// as big-int values because they exceed the float-safe range. Path and query
/// encoding uses the decimal string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub i64);

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LinkId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identifier of a post in a channel's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Reaction kinds accepted by the post reaction endpoint, encoded as the
/// numeric `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkReactionType {
    None = 0,
    Normal = 1,
}

impl LinkReactionType {
    pub(crate) fn as_query(self) -> i32 {
        self as i32
    }
}

/// Result filter for unified search, encoded as the `resultType` query
/// parameter. Omitted entirely when no filter is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSearchType {
    Profile,
    Direct,
    Group,
}

impl Display for OpenSearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            OpenSearchType::Profile => "p",
            OpenSearchType::Direct => "d",
            OpenSearchType::Group => "g",
        };
        write!(f, "{code}")
    }
}
