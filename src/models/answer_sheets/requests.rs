use serde::Deserialize;

use crate::models::answer_sheets::entities::SheetStatus;
use crate::models::common::pagination::PaginationQuery;

/// 答卷列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SheetListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<SheetStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SheetListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<SheetStatus>,
    pub exam_id: i64,
}
