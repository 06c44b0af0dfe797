use crate::{
    api::models::*,
    core::{
        errors::{FieldErrors, SiteError},
        models::{appointment::InsertAppointment, contact_message::InsertContactMessage},
        services::SiteService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use serde_json::Value;
use tracing::warn;

use std::sync::Arc;

pub type AppState = Arc<SiteService<InMemoryStorage>>;

/// A body that is not JSON is reported like any other field failure.
fn raw_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, SiteError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable request body");
            let mut errors = FieldErrors::default();
            errors.push("body", &rejection.body_text());
            Err(SiteError::Validation(errors))
        }
    }
}

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/appointments", get(list_appointments).post(create_appointment))
        .route("/contact", get(list_contact_messages).post(create_contact_message))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = InsertAppointment,
    responses(
        (status = 200, description = "Appointment booked", body = CreateAppointmentResponse),
        (status = 400, description = "Invalid appointment data", body = ErrorResponse),
        (status = 500, description = "Failed to create appointment", body = ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(service): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateAppointmentResponse>, ApiError> {
    let err = |e: SiteError| ApiError::new(Endpoint::CreateAppointment, e);
    let raw = raw_body(payload).map_err(err)?;
    let appointment = service.submit_appointment(&raw).await.map_err(err)?;
    Ok(Json(CreateAppointmentResponse {
        success: true,
        appointment,
    }))
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "All appointments in booking order", body = ListAppointmentsResponse),
        (status = 500, description = "Failed to fetch appointments", body = ErrorResponse)
    )
)]
pub async fn list_appointments(State(service): State<AppState>) -> Result<Json<ListAppointmentsResponse>, ApiError> {
    let appointments = service
        .list_appointments()
        .await
        .map_err(|e| ApiError::new(Endpoint::ListAppointments, e))?;
    Ok(Json(ListAppointmentsResponse {
        success: true,
        appointments,
    }))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = InsertContactMessage,
    responses(
        (status = 200, description = "Contact message received", body = CreateContactMessageResponse),
        (status = 400, description = "Invalid contact data", body = ErrorResponse),
        (status = 500, description = "Failed to send contact message", body = ErrorResponse)
    )
)]
pub async fn create_contact_message(
    State(service): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateContactMessageResponse>, ApiError> {
    let err = |e: SiteError| ApiError::new(Endpoint::CreateContactMessage, e);
    let raw = raw_body(payload).map_err(err)?;
    let contact_message = service.submit_contact_message(&raw).await.map_err(err)?;
    Ok(Json(CreateContactMessageResponse {
        success: true,
        contact_message,
    }))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "All contact messages in arrival order", body = ListContactMessagesResponse),
        (status = 500, description = "Failed to fetch contact messages", body = ErrorResponse)
    )
)]
pub async fn list_contact_messages(
    State(service): State<AppState>,
) -> Result<Json<ListContactMessagesResponse>, ApiError> {
    let contact_messages = service
        .list_contact_messages()
        .await
        .map_err(|e| ApiError::new(Endpoint::ListContactMessages, e))?;
    Ok(Json(ListContactMessagesResponse {
        success: true,
        contact_messages,
    }))
}
