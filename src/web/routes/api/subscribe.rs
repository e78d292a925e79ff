use axum::{extract::State, Json};
use tracing::{info, Span};

use crate::{
    store,
    web::{
        types::{DataParsingError, MessageBody, SubscribeOutcome, SubscribeRequest, ValidEmail},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("store error: {0}")]
    Store(#[from] store::Error),
}

// ###################################
// ->   API
// ###################################
/// Adds the email from the request to the subscriber set.
/// Subscribing an email that is already in the set is not an error, it only changes the message.
#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(app_state, request),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> WebResult<Json<MessageBody<&'static str>>> {
    // Validation happens before the store is ever touched.
    let email = ValidEmail::try_from(request).map_err(SubscribeError::DataParsing)?;
    Span::current().record("subscriber_email", email.as_ref());

    let was_added = app_state
        .store
        .add(email.as_ref())
        .await
        .map_err(SubscribeError::Store)?;
    let outcome = SubscribeOutcome::from_added(was_added);
    info!(?outcome, "SUCCESS");

    Ok(Json(MessageBody::new(outcome.message())))
}
