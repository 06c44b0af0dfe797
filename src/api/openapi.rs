use utoipa::OpenApi;

use crate::{
    api::models::{
        CreateAppointmentResponse, CreateContactMessageResponse, ErrorResponse, ListAppointmentsResponse,
        ListContactMessagesResponse,
    },
    core::{
        errors::{FieldError, FieldErrors},
        models::{
            appointment::{Appointment, InsertAppointment},
            contact_message::{ContactMessage, InsertContactMessage},
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_appointment,
        super::handlers::list_appointments,
        super::handlers::create_contact_message,
        super::handlers::list_contact_messages
    ),
    components(schemas(
        InsertAppointment,
        InsertContactMessage,
        Appointment,
        ContactMessage,
        CreateAppointmentResponse,
        ListAppointmentsResponse,
        CreateContactMessageResponse,
        ListContactMessagesResponse,
        ErrorResponse,
        FieldError,
        FieldErrors
    )),
    info(
        title = "Techsite API",
        description = "Appointment booking and contact form endpoints for the consultancy website",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
