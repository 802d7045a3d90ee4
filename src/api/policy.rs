use crate::client::RequestOptions;
use crate::models::policy::{Policy, PolicyDetail, PolicyInput};
use crate::{Outcome, RequestOutcome, WelfareClient};

/// Provides methods for browsing welfare policies, and for registering and
/// editing them from the admin dashboard.
pub struct PolicyApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> PolicyApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Lists policies recommended for the current user's profile.
    pub async fn recommendations(&self) -> Outcome<Vec<Policy>> {
        self.client
            .issue("/api/v1/policies/recommendations", RequestOptions::get())
            .await
            .decode()
    }

    /// Searches registered policies. Both filters are optional; an absent
    /// filter is omitted from the query string entirely.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &welfare_client::WelfareClient) {
    /// let outcome = client.policies().search(Some("heating"), None::<&str>).await;
    /// println!("{} results", outcome.data.map_or(0, |p| p.len()));
    /// # }
    /// ```
    pub async fn search(
        &self,
        keyword: Option<impl ToString>,
        category: Option<impl ToString>,
    ) -> Outcome<Vec<Policy>> {
        let options = RequestOptions::get()
            .query_opt("keyword", keyword)
            .query_opt("category", category);

        self.client.issue("/api/v1/policies", options).await.decode()
    }

    /// Fetches the full detail of one policy.
    pub async fn detail(&self, policy_id: u64) -> Outcome<PolicyDetail> {
        self.client
            .issue(
                &format!("/api/v1/policies/{policy_id}"),
                RequestOptions::get(),
            )
            .await
            .decode()
    }

    /// Registers a new policy (admin).
    pub async fn create(&self, input: PolicyInput) -> RequestOutcome {
        self.client
            .issue("/api/v1/policies", RequestOptions::post().body(&input))
            .await
    }

    /// Updates an existing policy (admin).
    pub async fn update(&self, policy_id: u64, input: PolicyInput) -> RequestOutcome {
        self.client
            .issue(
                &format!("/api/v1/policies/{policy_id}"),
                RequestOptions::put().body(&input),
            )
            .await
    }

    /// Deletes a policy (admin).
    pub async fn delete(&self, policy_id: u64) -> RequestOutcome {
        self.client
            .issue(
                &format!("/api/v1/policies/{policy_id}"),
                RequestOptions::delete(),
            )
            .await
    }
}
