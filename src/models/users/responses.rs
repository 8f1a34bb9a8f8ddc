use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::users::entities::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

pub type UserListResponse = PaginatedResponse<User>;
