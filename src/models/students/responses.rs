use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::students::entities::StudentWithUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student: StudentWithUser,
}

pub type StudentListResponse = PaginatedResponse<StudentWithUser>;
