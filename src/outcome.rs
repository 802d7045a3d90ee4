use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Fallback message for failures where no response was received from the
/// server (offline, DNS failure, refused connection, malformed body).
pub const NETWORK_ERROR_MESSAGE: &str =
    "Cannot reach the server. Check your network connection.";

/// Fallback message for HTTP error responses whose body carries no
/// recognizable error text.
pub const SERVER_ERROR_MESSAGE: &str = "The server reported an error.";

/// Fallback message when a successful response body does not match the
/// shape the caller asked to decode into.
pub const DECODE_ERROR_MESSAGE: &str =
    "The server returned an unexpected response shape.";

/// Normalized result of a single API call.
///
/// Every call through the gateway resolves to one of these; failures of any
/// class (network, HTTP, parse) are folded into the same shape rather than
/// surfaced as `Err`. Exactly one of "`success` with `data`" or "`!success`
/// with `message`" holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// True iff the transport completed and the server returned a 2xx status.
    pub success: bool,

    /// HTTP status code, or 0 when no response was received.
    pub status: u16,

    /// Parsed response body on success. An empty 2xx body normalizes to `{}`.
    pub data: Option<T>,

    /// Human-readable diagnostic, populated on every failure.
    pub message: Option<String>,

    /// The server's parsed error payload, retained for inspection when an
    /// HTTP error response carried a body.
    pub error: Option<Value>,
}

/// Outcome whose body is kept as raw JSON, as returned by
/// [`WelfareClient::issue`](crate::WelfareClient::issue).
pub type RequestOutcome = Outcome<Value>;

impl<T> Outcome<T> {
    /// Returns true iff the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Consumes the outcome and returns the payload, if the call succeeded.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// The diagnostic message, or an empty string on success.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

impl RequestOutcome {
    /// A successful outcome carrying the parsed body.
    pub(crate) fn ok(status: u16, data: Value) -> Self {
        Outcome {
            success: true,
            status,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// A failed outcome for an HTTP error response. The parsed error body is
    /// retained under `error`.
    pub(crate) fn http_error(status: u16, body: Value, message: String) -> Self {
        Outcome {
            success: false,
            status,
            data: None,
            message: Some(message),
            error: Some(body),
        }
    }

    /// A failed outcome for calls where no response arrived. `status` is 0 to
    /// distinguish this from server-reported errors.
    pub(crate) fn network_error() -> Self {
        Outcome {
            success: false,
            status: 0,
            data: None,
            message: Some(NETWORK_ERROR_MESSAGE.to_string()),
            error: None,
        }
    }

    /// A failed outcome for requests that could not be dispatched at all
    /// (unjoinable path, unencodable body).
    pub(crate) fn invalid_request(message: String) -> Self {
        Outcome {
            success: false,
            status: 0,
            data: None,
            message: Some(message),
            error: None,
        }
    }

    /// Converts the raw outcome into a typed one by deserializing `data`.
    ///
    /// Failed outcomes pass through with their status, message, and retained
    /// error body intact. A successful body that does not match `T` degrades
    /// to a failed outcome instead of returning `Err`.
    pub fn decode<T: DeserializeOwned>(self) -> Outcome<T> {
        let Outcome {
            success,
            status,
            data,
            message,
            error,
        } = self;

        if !success {
            return Outcome {
                success,
                status,
                data: None,
                message,
                error,
            };
        }

        match data.map(serde_json::from_value::<T>) {
            Some(Ok(decoded)) => Outcome {
                success: true,
                status,
                data: Some(decoded),
                message: None,
                error: None,
            },
            Some(Err(e)) => {
                log::warn!("response body did not match the expected shape: {e}");
                Outcome {
                    success: false,
                    status,
                    data: None,
                    message: Some(DECODE_ERROR_MESSAGE.to_string()),
                    error: None,
                }
            }
            // issue() always populates data on success; kept total anyway.
            None => Outcome {
                success: false,
                status,
                data: None,
                message: Some(DECODE_ERROR_MESSAGE.to_string()),
                error: None,
            },
        }
    }
}

/// Extracts the server's own error text from a parsed error body, checking
/// the configured field names in priority order. Only string values count.
pub(crate) fn server_error_message(body: &Value, fields: &[String]) -> Option<String> {
    let object = body.as_object()?;
    fields
        .iter()
        .find_map(|field| object.get(field).and_then(Value::as_str))
        .map(str::to_string)
}

/// The `{}` an empty response body normalizes to.
pub(crate) fn empty_body() -> Value {
    Value::Object(Map::new())
}
