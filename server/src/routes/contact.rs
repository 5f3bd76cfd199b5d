//! `POST /api/contact`: re-validate and deliver a contact-form submission.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome answers with a `ContactResponse` body so the client can show
//! the server's text in its status banner:
//! - `200` accepted
//! - `422` malformed payload or a failed field rule (with `field`)
//! - `502` the email provider rejected the send

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use folio_client::net::types::{ContactRequest, ContactResponse, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use folio_client::state::submission::INVALID_FORM_MESSAGE;

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact payload rejected");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ContactResponse::rejected(INVALID_FORM_MESSAGE, None)));
        }
    };

    let result = match contact::check(&request) {
        Ok(()) => state.contact.deliver(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::accepted(SUCCESS_MESSAGE))),
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &ContactError) -> (StatusCode, Json<ContactResponse>) {
    match err {
        ContactError::Invalid { field, message } => {
            tracing::debug!(field = field.as_str(), "contact payload failed validation");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ContactResponse::rejected(*message, Some(field.as_str()))))
        }
        ContactError::Delivery(detail) => {
            tracing::error!(error = %detail, "contact delivery failed");
            (StatusCode::BAD_GATEWAY, Json(ContactResponse::rejected(FAILURE_MESSAGE, None)))
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
