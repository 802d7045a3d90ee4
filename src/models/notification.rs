use serde::Deserialize;

/// One row of the notification list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub id: u64,

    /// Notification kind: `CHANGE_POLICY`, `DEADLINE`, `INFO`, ...
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    /// Truncated body shown in the list.
    pub message_preview: Option<String>,

    pub is_read: bool,

    /// Creation timestamp as formatted by the server.
    pub created_at: String,

    /// Whether a policy-change report is linked to this notification.
    pub has_report: bool,

    pub policy_id: Option<u64>,

    pub report_id: Option<u64>,
}

/// Full notification body, fetched when a row is opened.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetail {
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    pub message: String,

    pub created_at: String,

    pub policy_id: Option<u64>,

    pub report_id: Option<u64>,
}
