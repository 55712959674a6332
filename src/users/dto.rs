use serde::{Deserialize, Serialize};

use crate::users::repo::User;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for a full-field replace.
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
