use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;

/// 创建学生请求（账号 + 档案一并创建）
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub class_id: Option<i64>,
    pub admission_no: String,
    pub roll_no: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// 更新学生档案请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub class_id: Option<i64>,
    pub roll_no: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// 学生列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub class_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub class_id: Option<i64>,
    pub school_id: i64,
}

// 用于存储层的档案创建记录（账号已先行创建）
#[derive(Debug, Clone)]
pub struct CreateStudentProfile {
    pub user_id: i64,
    pub school_id: i64,
    pub class_id: Option<i64>,
    pub admission_no: String,
    pub roll_no: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}
