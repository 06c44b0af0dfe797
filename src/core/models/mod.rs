pub mod appointment;
pub mod contact_message;
pub mod user;
