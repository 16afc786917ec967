//! Contact inquiry handling.
//!
//! Inquiries are validated, held for the configured delay and acknowledged.
//! They are never stored or forwarded.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use danawood_core::contact::{ContactAcknowledgement, ContactInquiry, FieldErrors};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate an inquiry and wait out the acknowledgement delay.
///
/// Shared by the JSON endpoint and the HTML form. Only field names are
/// logged, never visitor data.
pub async fn accept_inquiry(
    state: &AppState,
    input: &ContactInquiry,
) -> Result<ContactAcknowledgement, FieldErrors> {
    let inquiry = match input.validate() {
        Ok(inquiry) => inquiry,
        Err(errors) => {
            let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
            tracing::info!(?fields, "Contact inquiry rejected");
            return Err(errors);
        }
    };

    tokio::time::sleep(Duration::from_millis(state.config.contact_delay_ms)).await;

    tracing::info!(
        has_message = inquiry.message.is_some(),
        "Contact inquiry acknowledged",
    );

    Ok(ContactAcknowledgement::default())
}

/// POST /api/v1/contact
///
/// Returns 200 with the acknowledgement, or 400 with one message per
/// invalid field. A body that is not a JSON inquiry is a 400 `BAD_REQUEST`.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactInquiry>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(status = %rejection.status(), "Contact body rejected");
        AppError::BadRequest(rejection.body_text())
    })?;

    let ack = accept_inquiry(&state, &input)
        .await
        .map_err(AppError::InvalidFields)?;

    Ok(Json(DataResponse { data: ack }))
}
