use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;

/// 创建教师请求（账号 + 档案一并创建）
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub employee_no: String,
    pub qualification: Option<String>,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}

/// 更新教师档案请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub qualification: Option<String>,
    pub subject_ids: Option<Vec<i64>>,
}

/// 教师列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub subject_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub subject_id: Option<i64>,
    pub school_id: i64,
}

// 用于存储层的档案创建记录（账号已先行创建）
#[derive(Debug, Clone)]
pub struct CreateTeacherProfile {
    pub user_id: i64,
    pub school_id: i64,
    pub employee_no: String,
    pub qualification: Option<String>,
    pub subject_ids: Vec<i64>,
}
