use crate::client::RequestOptions;
use crate::models::home::HomeSummary;
use crate::{Outcome, WelfareClient};

/// Provides the main-screen summary (greeting, weather).
pub struct HomeApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> HomeApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Fetches the home-screen summary block.
    pub async fn summary(&self) -> Outcome<HomeSummary> {
        self.client
            .issue("/api/v1/home/summary", RequestOptions::get())
            .await
            .decode()
    }
}
