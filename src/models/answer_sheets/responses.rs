use serde::{Deserialize, Serialize};

use crate::models::answer_sheets::entities::AnswerSheet;
use crate::models::common::pagination::PaginatedResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerSheetResponse {
    pub answer_sheet: AnswerSheet,
}

pub type SheetListResponse = PaginatedResponse<AnswerSheet>;
