use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// 教师档案实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub school_id: i64,
    // 工号，每校唯一
    pub employee_no: String,
    pub qualification: Option<String>,
    // 任教科目 ID 列表
    pub subject_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师档案 + 账号信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherWithUser {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub user: User,
}
