use crate::client::RequestOptions;
use crate::models::chat::{ChatRequest, ChatReply};
use crate::{Outcome, WelfareClient};

/// Provides the chatbot conversation endpoint.
pub struct ChatApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Sends one user message and returns the bot's answer.
    ///
    /// The NLU backend can be slow; callers that care should configure a
    /// client timeout, after which the call resolves to the network-error
    /// outcome like any other unreachable server.
    pub async fn send(&self, message: impl Into<String>) -> Outcome<ChatReply> {
        let request = ChatRequest {
            message: message.into(),
        };

        self.client
            .issue("/api/v1/chat", RequestOptions::post().body(&request))
            .await
            .decode()
    }
}
