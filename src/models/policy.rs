use serde::{Deserialize, Serialize};
use std::fmt;

/// A welfare policy as listed in search results and recommendations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// The unique identifier for this policy.
    pub id: u64,

    /// Title of the policy announcement.
    pub title: String,

    /// The agency responsible for the policy.
    pub agency: Option<String>,

    /// Category the policy is filed under.
    pub category: Option<String>,

    /// Date the policy was registered or last updated, as `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

/// Full detail of a single policy.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDetail {
    pub id: u64,
    pub title: String,
    pub agency: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,

    /// Body text of the announcement.
    pub content: Option<String>,
}

/// Fields submitted when registering or editing a policy from the admin
/// dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInput {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PolicyInput {
    pub fn new(title: impl Into<String>) -> Self {
        PolicyInput {
            title: title.into(),
            agency: None,
            category: None,
            content: None,
        }
    }

    pub fn agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
