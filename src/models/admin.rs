use serde::Deserialize;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_policies: u64,

    /// Change reports generated today.
    pub daily_reports: u64,

    pub server_status: String,

    /// AI API calls issued so far today.
    pub ai_api_count: u64,
}

/// One row of the policy-change report list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport {
    pub id: u64,

    pub date: String,

    /// Review status label, e.g. "needs review" or "done".
    pub status: String,

    /// Who produced the report (the AI bot or an admin).
    pub manager: Option<String>,

    pub title: String,

    pub summary: Option<String>,
}

/// Full report detail including the AI-generated change analysis.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReportDetail {
    pub id: u64,

    pub title: String,

    pub ai_summary: String,
}

/// Server health metrics for the monitoring page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetrics {
    pub api: ApiStatus,
    pub ai: AiStatus,
    pub db: DbStatus,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub status: String,
    pub uptime: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    pub status: String,
    pub latency_ms: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DbStatus {
    pub status: String,
    pub active: Option<i32>,
    pub max: Option<i32>,
}
