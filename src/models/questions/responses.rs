use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::questions::entities::Question;

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: Question,
}

pub type QuestionListResponse = PaginatedResponse<Question>;
