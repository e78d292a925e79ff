use std::sync::Arc;

use axum::{
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::web::{log, types::MessageBody, Error, REQUEST_ID_HEADER};

/// Turns a `web::Error` stored in the response extensions into the client facing
/// `{ "message": ... }` body and logs the request.
pub async fn response_mapper(
    req_method: Method,
    uri: Uri,
    headers: HeaderMap,
    resp: Response,
) -> Response {
    let req_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .map(str::to_owned);

    let web_error = resp.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    if let (Some(er), Some((status, _))) = (web_error, &client_status_and_error) {
        if status.is_server_error() {
            tracing::error!("SERVER ERROR: {er} ID: {}", req_id.as_deref().unwrap_or("-"));
        }
    }

    // The error response is a new response, so the request id has to be carried over by hand.
    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let body = MessageBody::new(cl_err.to_string());
        let mut err_resp = (*status, Json(body)).into_response();
        if let Some(id) = headers.get(REQUEST_ID_HEADER) {
            err_resp
                .headers_mut()
                .insert(REQUEST_ID_HEADER, id.clone());
        }
        err_resp
    });

    log::log_request(
        req_id,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error.as_ref(),
    );

    err_resp.unwrap_or(resp)
}
