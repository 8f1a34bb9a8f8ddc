use serde::{Deserialize, Serialize};

use crate::models::common::pagination::{PaginatedResponse, PaginationQuery};

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub school_id: i64,
    pub name: String,
    // 年级（1-12）
    pub grade_level: i32,
    pub section: Option<String>,
    // 班主任（教师档案 ID）
    pub class_teacher_id: Option<i64>,
    // 学年，如 "2026-2027"
    pub academic_year: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 创建班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub grade_level: i32,
    pub section: Option<String>,
    pub class_teacher_id: Option<i64>,
    pub academic_year: String,
}

/// 更新班级请求
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub grade_level: Option<i32>,
    pub section: Option<String>,
    pub class_teacher_id: Option<i64>,
    pub academic_year: Option<String>,
}

/// 班级列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct ClassListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub school_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassResponse {
    pub class: Class,
}

pub type ClassListResponse = PaginatedResponse<Class>;
