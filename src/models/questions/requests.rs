use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;
use crate::models::questions::entities::{BloomsLevel, Difficulty, QuestionType};

/// 创建题目请求
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub subject_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub marks: i32,
    pub blooms_level: BloomsLevel,
    pub difficulty: Difficulty,
}

/// 更新题目请求
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub marks: Option<i32>,
    pub blooms_level: Option<BloomsLevel>,
    pub difficulty: Option<Difficulty>,
}

/// 题目列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub question_type: Option<QuestionType>,
    pub blooms_level: Option<BloomsLevel>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct QuestionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub question_type: Option<QuestionType>,
    pub blooms_level: Option<BloomsLevel>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub school_id: i64,
}
