use serde::{Deserialize, Serialize};

// 文件实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    // 下载令牌，对外的唯一标识
    pub download_token: String,
    pub original_name: String,
    #[serde(skip_serializing)] // 磁盘路径不暴露给客户端
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
