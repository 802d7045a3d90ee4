use secrecy::SecretString;

use crate::client::RequestOptions;
use crate::models::auth::{FindIdRequest, LoginRequest, LoginResponse, SignupRequest};
use crate::{Outcome, RequestOutcome, WelfareClient};

/// Provides methods for authentication: login, signup, logout, and username
/// recovery.
///
/// All paths handled here fall under the client's auth prefix, so none of
/// these requests carry a bearer token. A successful login stores the issued
/// token in the client's credential provider; logout clears it.
pub struct AuthApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Logs in and stores the issued bearer token.
    ///
    /// On success the token from the response is written to the client's
    /// credential provider, so subsequent non-auth requests are sent
    /// authenticated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &welfare_client::WelfareClient) {
    /// let outcome = client.auth().login("grandma01", "secret").await;
    /// if outcome.success {
    ///     println!("logged in");
    /// } else {
    ///     eprintln!("login failed: {}", outcome.message());
    /// }
    /// # }
    /// ```
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Outcome<LoginResponse> {
        let request = LoginRequest {
            username: username.into(),
            password: password.into(),
        };

        let outcome: Outcome<LoginResponse> = self
            .client
            .issue("/api/v1/auth/login", RequestOptions::post().body(&request))
            .await
            .decode();

        if outcome.success {
            if let Some(login) = &outcome.data {
                self.client
                    .credentials()
                    .set(SecretString::from(login.token.clone()))
                    .await;
            }
        }

        outcome
    }

    /// Creates a new account. Does not log the user in.
    pub async fn signup(&self, request: SignupRequest) -> RequestOutcome {
        self.client
            .issue("/api/v1/auth/signup", RequestOptions::post().body(&request))
            .await
    }

    /// Logs out and clears the stored bearer token.
    ///
    /// The local token is cleared whatever the server answers, so a dead
    /// session cannot keep the app pinned to a stale credential.
    pub async fn logout(&self) -> RequestOutcome {
        let outcome = self
            .client
            .issue("/api/v1/auth/logout", RequestOptions::post())
            .await;

        self.client.credentials().clear().await;

        outcome
    }

    /// Recovers a forgotten username from name and phone number.
    pub async fn find_id(
        &self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> RequestOutcome {
        let request = FindIdRequest {
            name: name.into(),
            phone: phone.into(),
        };

        self.client
            .issue("/api/v1/auth/find-id", RequestOptions::post().body(&request))
            .await
    }
}
