use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use super::routes::{CountError, SubscribeError};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe error: {0}")]
    Subscribe(#[from] SubscribeError),
    #[error("count error: {0}")]
    Count(#[from] CountError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Subscribe(SubscribeError::DataParsing(_)) => {
                (StatusCode::BAD_REQUEST, MissingRequiredFields)
            }
            Error::Subscribe(SubscribeError::Store(_)) | Error::Count(CountError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ServiceError)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The only error information that reaches the client.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Missing required fields")]
    MissingRequiredFields,
    #[display("Service Error")]
    ServiceError,
}
