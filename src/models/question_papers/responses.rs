use serde::{Deserialize, Serialize};

use crate::models::common::pagination::PaginatedResponse;
use crate::models::question_papers::entities::{PaperQuestion, QuestionPaper};

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPaperResponse {
    #[serde(flatten)]
    pub paper: QuestionPaper,
    pub questions: Vec<PaperQuestion>,
}

pub type PaperListResponse = PaginatedResponse<QuestionPaper>;
