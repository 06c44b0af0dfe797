use crate::core::errors::SiteError;
use crate::core::models::{
    appointment::{Appointment, InsertAppointment},
    contact_message::{ContactMessage, InsertContactMessage},
    user::{InsertUser, User},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use bcrypt::hash;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Appointment {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for ContactMessage {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Append-only records in insertion order, with an id -> position index.
struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed + Clone> Collection<T> {
    fn new() -> Self {
        Collection {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, record: T) -> Result<T, SiteError> {
        if self.index.contains_key(record.key()) {
            return Err(SiteError::StorageError(format!("Duplicate id {}", record.key())));
        }
        self.index.insert(record.key().to_string(), self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&i| self.records.get(i))
    }

    fn last(&self) -> Option<&T> {
        self.records.last()
    }

    fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }
}

/// Wall-clock time, held back from running behind the previous record so that
/// creation times never decrease along insertion order.
fn stamp_after(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<Collection<User>>>,
    appointments: Arc<RwLock<Collection<Appointment>>>,
    contact_messages: Arc<RwLock<Collection<ContactMessage>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(Collection::new())),
            appointments: Arc::new(RwLock::new(Collection::new())),
            contact_messages: Arc::new(RwLock::new(Collection::new())),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SiteError> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, SiteError> {
        let users = self.users.read().await;
        Ok(users.records.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: InsertUser) -> Result<User, SiteError> {
        let InsertUser { username, password } = user;
        let password = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| SiteError::InternalServerError(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| SiteError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let mut users = self.users.write().await;
        if users.records.iter().any(|u| u.username == username) {
            return Err(SiteError::UsernameTaken(username));
        }
        users.insert(User {
            id: Uuid::new_v4().to_string(),
            username,
            password,
        })
    }

    async fn create_appointment(&self, appointment: InsertAppointment) -> Result<Appointment, SiteError> {
        let mut appointments = self.appointments.write().await;
        let created_at = stamp_after(appointments.last().map(|a| a.created_at));
        appointments.insert(Appointment::from_insert(
            Uuid::new_v4().to_string(),
            appointment,
            created_at,
        ))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, SiteError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.snapshot())
    }

    async fn create_contact_message(&self, message: InsertContactMessage) -> Result<ContactMessage, SiteError> {
        let mut contact_messages = self.contact_messages.write().await;
        let created_at = stamp_after(contact_messages.last().map(|m| m.created_at));
        contact_messages.insert(ContactMessage::from_insert(
            Uuid::new_v4().to_string(),
            message,
            created_at,
        ))
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, SiteError> {
        let contact_messages = self.contact_messages.read().await;
        Ok(contact_messages.snapshot())
    }
}
