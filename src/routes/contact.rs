use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    domain::{ContactSubmission, NotificationMessage, ValidationFailure},
    startup::AppState,
    telegram_client::DispatchError,
};

/// The raw JSON body of a submission. Absent string fields deserialize to
/// empty strings so they fail validation with the usual per-field messages
/// instead of a framework-level rejection.
#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    phone: Option<String>,
    #[serde(default)]
    message: String,
}

#[derive(serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(app_state, form),
    fields(
        contact_email = %form.email
    )
)]
pub async fn submit_contact(
    State(app_state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, ContactError> {
    let submission = ContactSubmission::new(form.name, form.email, form.phone, form.message);

    submission.validate().map_err(ContactError::Validation)?;

    let notification = NotificationMessage::for_submission(&submission);
    app_state.telegram_client.send_message(&notification).await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Thank you! Your message has been sent successfully.".into(),
    }))
}

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error("invalid submission")]
    Validation(Vec<ValidationFailure>),
    #[error("couldn't dispatch notification, {0}")]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::Validation(failures) => {
                let message = failures
                    .iter()
                    .map(|failure| failure.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                tracing::error!("rejected submission: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse {
                        success: false,
                        message,
                    }),
                )
                    .into_response()
            }
            // The specific cause stays in the logs; the caller only learns
            // that delivery failed.
            ContactError::Dispatch(e) => {
                tracing::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse {
                        success: false,
                        message: "Failed to send message. Please try again later.".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
