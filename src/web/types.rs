//! Request and response bodies of the `web` module and their parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::IntoStaticStr;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable subscribe request.
/// `email` can be missing or hold any JSON value, it only gets checked when parsed into a `ValidEmail`.
#[derive(Debug, Default, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<Value>,
}

impl SubscribeRequest {
    pub fn new(email: impl Into<Value>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// A subscriber email that is present and non-empty.
/// The address itself is opaque, no format checks are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: Into<String>,
    {
        let value = value.into();
        if value.is_empty() {
            return Err(DataParsingError::EmailMissing);
        }

        Ok(ValidEmail(value))
    }
}

impl TryFrom<SubscribeRequest> for ValidEmail {
    type Error = DataParsingError;

    fn try_from(request: SubscribeRequest) -> Result<Self, Self::Error> {
        match request.email {
            Some(Value::String(email)) => ValidEmail::parse(email),
            _ => Err(DataParsingError::EmailMissing),
        }
    }
}

/// What happened to the email of a subscribe request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum SubscribeOutcome {
    #[strum(serialize = "Success")]
    Subscribed,
    #[strum(serialize = "Already subscribed")]
    AlreadySubscribed,
}

impl SubscribeOutcome {
    /// `was_added` is the reply of the store's insert-if-absent.
    pub fn from_added(was_added: bool) -> Self {
        if was_added {
            Self::Subscribed
        } else {
            Self::AlreadySubscribed
        }
    }

    pub fn message(self) -> &'static str {
        self.into()
    }
}

/// `{ "message": ... }` body shared by every response of the API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody<T> {
    pub message: T,
}

impl<T> MessageBody<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email missing or empty")]
    EmailMissing,
}
