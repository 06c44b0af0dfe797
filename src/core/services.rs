use crate::core::errors::SiteError;
use crate::core::models::{
    appointment::Appointment,
    contact_message::ContactMessage,
    user::{InsertUser, User},
};
use crate::core::validation::{validate_appointment, validate_contact_message};
use crate::infrastructure::storage::Storage;
use serde_json::Value;
use tracing::{info, warn};

/// Entry point for the site's form submissions: validates raw input and
/// hands the typed record to storage.
pub struct SiteService<S: Storage> {
    storage: S,
}

impl<S: Storage> SiteService<S> {
    pub fn new(storage: S) -> Self {
        SiteService { storage }
    }

    pub async fn submit_appointment(&self, raw: &Value) -> Result<Appointment, SiteError> {
        let input = validate_appointment(raw).inspect_err(|errors| {
            warn!(fields = ?errors.fields(), "Rejected appointment request");
        })?;
        let appointment = self.storage.create_appointment(input).await?;
        info!(
            appointment_id = %appointment.id,
            service = %appointment.service,
            date = %appointment.date,
            "Appointment requested"
        );
        Ok(appointment)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, SiteError> {
        self.storage.list_appointments().await
    }

    pub async fn submit_contact_message(&self, raw: &Value) -> Result<ContactMessage, SiteError> {
        let input = validate_contact_message(raw).inspect_err(|errors| {
            warn!(fields = ?errors.fields(), "Rejected contact message");
        })?;
        let message = self.storage.create_contact_message(input).await?;
        info!(contact_message_id = %message.id, "Contact message received");
        Ok(message)
    }

    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, SiteError> {
        self.storage.list_contact_messages().await
    }

    pub async fn add_user(&self, username: String, password: String) -> Result<User, SiteError> {
        let user = self.storage.create_user(InsertUser { username, password }).await?;
        info!(user_id = %user.id, username = %user.username, "User added");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, SiteError> {
        self.storage.get_user(user_id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, SiteError> {
        self.storage.get_user_by_username(username).await
    }
}
