//! # welfare-client
//!
//! A Rust client library for the welfare-assistant REST API.
//!
//! This crate is the single gateway through which the mobile app and the
//! admin dashboard talk to the backend: authentication, policies, bookmarks,
//! calendar events, notifications, and the chatbot. Every call resolves to a
//! normalized [`Outcome`] — network failures, HTTP errors, and malformed
//! bodies are folded into the same tagged success/failure shape instead of
//! surfacing as `Err` or panics, so screens only ever branch on one result
//! type.
//!
//! ## Features
//!
//! - One `issue()` chokepoint with uniform error normalization
//! - Bearer-token attachment from a pluggable async credential store
//! - Typed endpoint handlers over every backend area
//! - Async API with Tokio runtime support
//!
//! ## Example
//!
//! ```rust,no_run
//! use welfare_client::WelfareClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client
//!     let client = WelfareClient::builder()
//!         .base_url("https://welfare.example.com")
//!         .build()?;
//!
//!     // Log in; the issued token is stored and attached to later calls.
//!     let login = client.auth().login("grandma01", "secret").await;
//!     if !login.success {
//!         eprintln!("login failed: {}", login.message());
//!         return Ok(());
//!     }
//!
//!     // Fetch the user's bookmarks.
//!     let bookmarks = client.bookmarks().list().await;
//!     for bookmark in bookmarks.data.unwrap_or_default() {
//!         println!("#{} {:?}", bookmark.policy_id, bookmark.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod credentials;
mod error;
mod models;
mod outcome;

pub use api::admin::AdminApi;
pub use api::auth::AuthApi;
pub use api::bookmark::BookmarkApi;
pub use api::calendar::CalendarApi;
pub use api::chat::ChatApi;
pub use api::home::HomeApi;
pub use api::notification::NotificationApi;
pub use api::policy::PolicyApi;
pub use api::user::UserApi;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{RequestOptions, WelfareClient, WelfareClientBuilder};
pub use credentials::{CredentialProvider, MemoryCredentialStore};
pub use error::{WelfareError, WelfareResult};
pub use models::admin::{
    AiStatus, ApiStatus, ChangeReport, ChangeReportDetail, DashboardSummary, DbStatus,
    ServerMetrics,
};
pub use models::auth::{AccountSummary, FindIdRequest, LoginRequest, LoginResponse, SignupRequest};
pub use models::bookmark::{AddBookmarkRequest, Bookmark};
pub use models::calendar::CalendarEvent;
pub use models::chat::{ChatReply, ChatRequest};
pub use models::home::{HomeSummary, WeatherSummary};
pub use models::notification::{NotificationDetail, NotificationSummary};
pub use models::policy::{Policy, PolicyDetail, PolicyInput};
pub use models::user::{ProfileUpdate, Region, WelfareInfo};
pub use outcome::{
    Outcome, RequestOutcome, DECODE_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, SERVER_ERROR_MESSAGE,
};
