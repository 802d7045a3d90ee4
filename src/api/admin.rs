use crate::client::RequestOptions;
use crate::models::admin::{
    ChangeReport, ChangeReportDetail, DashboardSummary, ServerMetrics,
};
use crate::{Outcome, RequestOutcome, WelfareClient};

/// Provides the admin-dashboard endpoints: headline numbers, policy-change
/// reports, and server monitoring.
pub struct AdminApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Fetches the dashboard headline numbers.
    pub async fn dashboard(&self) -> Outcome<DashboardSummary> {
        self.client
            .issue("/api/v1/admin/dashboard", RequestOptions::get())
            .await
            .decode()
    }

    /// Lists AI-generated policy-change reports.
    pub async fn change_reports(&self) -> Outcome<Vec<ChangeReport>> {
        self.client
            .issue("/api/v1/admin/change-reports", RequestOptions::get())
            .await
            .decode()
    }

    /// Fetches one change report with its full AI analysis.
    pub async fn change_report(&self, report_id: u64) -> Outcome<ChangeReportDetail> {
        self.client
            .issue(
                &format!("/api/v1/admin/change-reports/{report_id}"),
                RequestOptions::get(),
            )
            .await
            .decode()
    }

    /// Marks a change report as reviewed.
    pub async fn review_report(&self, report_id: u64) -> RequestOutcome {
        self.client
            .issue(
                &format!("/api/v1/admin/change-reports/{report_id}/review"),
                RequestOptions::put(),
            )
            .await
    }

    /// Fetches server health metrics.
    pub async fn server_metrics(&self) -> Outcome<ServerMetrics> {
        self.client
            .issue("/api/v1/admin/server/metrics", RequestOptions::get())
            .await
            .decode()
    }

    /// Fetches recent server log lines.
    pub async fn server_logs(&self) -> Outcome<Vec<String>> {
        self.client
            .issue("/api/v1/admin/server/logs", RequestOptions::get())
            .await
            .decode()
    }
}
