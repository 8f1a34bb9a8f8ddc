use serde::{Deserialize, Serialize};

use crate::models::common::pagination::{PaginatedResponse, PaginationQuery};

// 缺勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenteeismRecord {
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    // 缺勤日期（YYYY-MM-DD）
    pub date: chrono::NaiveDate,
    pub reason: Option<String>,
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 记录缺勤请求
#[derive(Debug, Deserialize)]
pub struct RecordAbsenceRequest {
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub reason: Option<String>,
}

/// 缺勤列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct AbsenteeismListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AbsenteeismListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub school_id: i64,
}

pub type AbsenteeismListResponse = PaginatedResponse<AbsenteeismRecord>;
