use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::exams::entities::Exam;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExamResponse {
    pub exam: Exam,
}

pub type ExamListResponse = PaginatedResponse<Exam>;
