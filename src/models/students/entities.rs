use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// 学生档案实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub school_id: i64,
    pub class_id: Option<i64>,
    // 学籍号，每校唯一
    pub admission_no: String,
    pub roll_no: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生档案 + 账号信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentWithUser {
    #[serde(flatten)]
    pub student: Student,
    pub user: User,
}
