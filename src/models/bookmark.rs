use serde::{Deserialize, Serialize};

/// A policy saved by the user for later reading.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// The unique identifier of the bookmark itself.
    pub id: u64,

    /// The policy this bookmark points at.
    pub policy_id: u64,

    /// Category badge shown on the bookmark card.
    pub category: Option<String>,

    /// Title of the bookmarked policy.
    pub title: Option<String>,

    /// Date the bookmark was saved, as `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Request to bookmark a policy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookmarkRequest {
    pub policy_id: u64,
}
