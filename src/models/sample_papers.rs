use serde::{Deserialize, Serialize};

use crate::models::common::pagination::{PaginatedResponse, PaginationQuery};

// 样卷实体（指向已上传的文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePaper {
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub grade_level: i32,
    pub title: String,
    pub download_token: String,
    pub uploaded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 登记样卷请求（文件需先经 /files/upload 上传）
#[derive(Debug, Deserialize)]
pub struct CreateSamplePaperRequest {
    pub subject_id: i64,
    pub grade_level: i32,
    pub title: String,
    pub download_token: String,
}

/// 样卷列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SamplePaperListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub grade_level: Option<i32>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SamplePaperListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub grade_level: Option<i32>,
    pub school_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SamplePaperResponse {
    pub sample_paper: SamplePaper,
}

pub type SamplePaperListResponse = PaginatedResponse<SamplePaper>;
