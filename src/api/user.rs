use crate::client::RequestOptions;
use crate::models::user::ProfileUpdate;
use crate::{RequestOutcome, WelfareClient};

/// Provides methods for the current user's profile.
pub struct UserApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Saves the initial-setup profile: interest categories, region, and
    /// welfare eligibility details.
    pub async fn update_profile(&self, profile: ProfileUpdate) -> RequestOutcome {
        self.client
            .issue(
                "/api/v1/users/me/profile",
                RequestOptions::put().body(&profile),
            )
            .await
    }
}
