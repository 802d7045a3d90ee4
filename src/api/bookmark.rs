use crate::client::RequestOptions;
use crate::models::bookmark::{AddBookmarkRequest, Bookmark};
use crate::{Outcome, RequestOutcome, WelfareClient};

/// Provides methods for managing the user's saved policies.
pub struct BookmarkApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> BookmarkApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Lists the user's bookmarks.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &welfare_client::WelfareClient) {
    /// let outcome = client.bookmarks().list().await;
    /// for bookmark in outcome.data.unwrap_or_default() {
    ///     println!("{}: {:?}", bookmark.id, bookmark.title);
    /// }
    /// # }
    /// ```
    pub async fn list(&self) -> Outcome<Vec<Bookmark>> {
        self.client
            .issue("/api/v1/bookmarks", RequestOptions::get())
            .await
            .decode()
    }

    /// Bookmarks a policy. A policy that is already bookmarked yields a
    /// failed outcome with the server's message (HTTP 409).
    pub async fn add(&self, policy_id: u64) -> Outcome<Bookmark> {
        let request = AddBookmarkRequest { policy_id };

        self.client
            .issue("/api/v1/bookmarks", RequestOptions::post().body(&request))
            .await
            .decode()
    }

    /// Removes a bookmark. The server answers 204 with an empty body, which
    /// normalizes to a successful outcome with `{}`.
    pub async fn remove(&self, bookmark_id: u64) -> RequestOutcome {
        self.client
            .issue(
                &format!("/api/v1/bookmarks/{bookmark_id}"),
                RequestOptions::delete(),
            )
            .await
    }
}
