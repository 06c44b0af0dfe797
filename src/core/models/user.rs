use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String, // bcrypt hash
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}
