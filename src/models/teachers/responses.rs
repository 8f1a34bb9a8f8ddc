use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::teachers::entities::TeacherWithUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub teacher: TeacherWithUser,
}

pub type TeacherListResponse = PaginatedResponse<TeacherWithUser>;
