use serde::{Deserialize, Serialize};

use crate::models::common::pagination::{PaginatedResponse, PaginationQuery};

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub school_id: i64,
    pub name: String,
    // 科目代码，每校唯一，如 "MATH09"
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 创建科目请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
}

/// 更新科目请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// 科目列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub school_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub subject: Subject,
}

pub type SubjectListResponse = PaginatedResponse<Subject>;
