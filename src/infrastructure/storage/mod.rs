use crate::core::errors::SiteError;
use crate::core::models::{
    appointment::{Appointment, InsertAppointment},
    contact_message::{ContactMessage, InsertContactMessage},
    user::{InsertUser, User},
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SiteError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, SiteError>;
    async fn create_user(&self, user: InsertUser) -> Result<User, SiteError>;
    async fn create_appointment(&self, appointment: InsertAppointment) -> Result<Appointment, SiteError>;
    async fn list_appointments(&self) -> Result<Vec<Appointment>, SiteError>;
    async fn create_contact_message(&self, message: InsertContactMessage) -> Result<ContactMessage, SiteError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, SiteError>;
}

pub mod in_memory;
