use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

/// Source of the bearer credential attached to authenticated requests.
///
/// The gateway reads the token through this trait before every dispatch, so
/// the backing store can be anything asynchronous: the device key-value
/// store in an app, an in-memory fake in tests. A missing token is not an
/// error; the request simply goes out unauthenticated.
///
/// Lifecycle: [`AuthApi::login`](crate::AuthApi::login) stores the token on
/// success and [`AuthApi::logout`](crate::AuthApi::logout) clears it.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns the stored token, if any.
    async fn get(&self) -> Option<SecretString>;

    /// Replaces the stored token.
    async fn set(&self, token: SecretString);

    /// Removes the stored token.
    async fn clear(&self);
}

/// In-memory credential store.
///
/// The default provider; suitable for processes whose session does not need
/// to survive a restart, and for tests.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

#[async_trait]
impl CredentialProvider for MemoryCredentialStore {
    async fn get(&self) -> Option<SecretString> {
        self.token.read().await.clone()
    }

    async fn set(&self, token: SecretString) {
        *self.token.write().await = Some(token);
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}
