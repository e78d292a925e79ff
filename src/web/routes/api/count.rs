use axum::{extract::State, Json};
use tracing::debug;

use crate::{
    store,
    web::{types::MessageBody, WebResult},
    AppState,
};

#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("store error: {0}")]
    Store(#[from] store::Error),
}

#[tracing::instrument(name = "Counting subscribers", skip(app_state))]
pub async fn count(State(app_state): State<AppState>) -> WebResult<Json<MessageBody<u64>>> {
    let count = app_state.store.count().await.map_err(CountError::Store)?;
    debug!(count);

    Ok(Json(MessageBody::new(count)))
}
