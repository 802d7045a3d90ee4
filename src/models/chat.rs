use serde::{Deserialize, Serialize};

/// A message sent to the chatbot.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The chatbot's answer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,

    /// Policies the answer referenced, when the bot cited any.
    #[serde(default)]
    pub related_policy_ids: Vec<u64>,
}
