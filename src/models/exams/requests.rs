use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;
use crate::models::exams::entities::ExamStatus;

/// 创建考试请求
#[derive(Debug, Deserialize)]
pub struct CreateExamRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub exam_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-03-14T09:00:00Z"
    pub duration_minutes: i32,
    pub total_marks: i32,
}

/// 更新考试请求
#[derive(Debug, Deserialize)]
pub struct UpdateExamRequest {
    pub title: Option<String>,
    pub exam_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub total_marks: Option<i32>,
    pub status: Option<ExamStatus>,
}

/// 考试列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct ExamListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub status: Option<ExamStatus>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ExamListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub status: Option<ExamStatus>,
    pub search: Option<String>,
    pub school_id: i64,
}
