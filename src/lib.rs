pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::SiteError;
pub use crate::core::services::SiteService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
