use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::core::{
    errors::{FieldErrors, SiteError},
    models::{appointment::Appointment, contact_message::ContactMessage},
};

#[derive(Serialize, ToSchema)]
pub struct CreateAppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

#[derive(Serialize, ToSchema)]
pub struct ListAppointmentsResponse {
    pub success: bool,
    pub appointments: Vec<Appointment>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessageResponse {
    pub success: bool,
    pub contact_message: ContactMessage,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListContactMessagesResponse {
    pub success: bool,
    pub contact_messages: Vec<ContactMessage>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// The operation a failed request was attempting; decides the wording the
/// client sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    CreateAppointment,
    ListAppointments,
    CreateContactMessage,
    ListContactMessages,
}

impl Endpoint {
    /// Only the submission endpoints take input that can be invalid.
    fn invalid_message(self) -> Option<&'static str> {
        match self {
            Endpoint::CreateAppointment => Some("Invalid appointment data"),
            Endpoint::CreateContactMessage => Some("Invalid contact data"),
            Endpoint::ListAppointments | Endpoint::ListContactMessages => None,
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::CreateAppointment => "Failed to create appointment",
            Endpoint::ListAppointments => "Failed to fetch appointments",
            Endpoint::CreateContactMessage => "Failed to send contact message",
            Endpoint::ListContactMessages => "Failed to fetch contact messages",
        }
    }
}

pub struct ApiError {
    pub endpoint: Endpoint,
    pub error: SiteError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, error: SiteError) -> Self {
        ApiError { endpoint, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self.error {
            SiteError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message: self
                        .endpoint
                        .invalid_message()
                        .unwrap_or("Invalid request")
                        .to_string(),
                    errors: Some(errors),
                },
            ),
            SiteError::UsernameTaken(username) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    success: false,
                    message: format!("Username {} already taken", username),
                    errors: None,
                },
            ),
            other @ (SiteError::StorageError(_) | SiteError::InternalServerError(_)) => {
                error!(endpoint = ?self.endpoint, error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        message: self.endpoint.failure_message().to_string(),
                        errors: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
