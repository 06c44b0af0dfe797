use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An appointment request as stored, with its generated id and creation time.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service: String,
    /// Preferred date exactly as the visitor entered it.
    pub date: String,
    pub message: Option<String>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct InsertAppointment {
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub message: Option<String>,
}

impl Appointment {
    pub fn from_insert(id: String, input: InsertAppointment, created_at: chrono::DateTime<chrono::Utc>) -> Self {
        Appointment {
            id,
            name: input.name,
            email: input.email,
            service: input.service,
            date: input.date,
            message: input.message,
            created_at,
        }
    }
}
