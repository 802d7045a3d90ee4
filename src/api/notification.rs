use crate::client::RequestOptions;
use crate::models::notification::{NotificationDetail, NotificationSummary};
use crate::{Outcome, RequestOutcome, WelfareClient};

/// Provides access to the user's notification feed.
pub struct NotificationApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> NotificationApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Lists notifications, newest first.
    pub async fn list(&self) -> Outcome<Vec<NotificationSummary>> {
        self.client
            .issue("/api/v1/notifications", RequestOptions::get())
            .await
            .decode()
    }

    /// Fetches one notification's full body.
    pub async fn detail(&self, notification_id: u64) -> Outcome<NotificationDetail> {
        self.client
            .issue(
                &format!("/api/v1/notifications/{notification_id}"),
                RequestOptions::get(),
            )
            .await
            .decode()
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, notification_id: u64) -> RequestOutcome {
        self.client
            .issue(
                &format!("/api/v1/notifications/{notification_id}/read"),
                RequestOptions::put(),
            )
            .await
    }
}
