use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;
use crate::models::question_papers::entities::{BloomsDistribution, PaperStatus};
use crate::models::questions::entities::Difficulty;

/// 手动组卷：从题库挑题
#[derive(Debug, Deserialize)]
pub struct CreatePaperRequest {
    pub subject_id: i64,
    pub class_id: i64,
    pub exam_id: Option<i64>,
    pub title: String,
    pub instructions: Option<String>,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub blooms_distribution: BloomsDistribution,
    pub questions: Vec<PaperQuestionEntry>,
}

/// 组卷时的单题条目
#[derive(Debug, Deserialize)]
pub struct PaperQuestionEntry {
    pub question_id: i64,
    pub position: i32,
    pub marks: i32,
}

/// AI 生成试卷请求
#[derive(Debug, Deserialize)]
pub struct GeneratePaperRequest {
    pub subject_id: i64,
    pub class_id: i64,
    pub exam_id: Option<i64>,
    pub title: String,
    pub instructions: Option<String>,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub question_count: i32,
    pub difficulty: Difficulty,
    pub blooms_distribution: BloomsDistribution,
    // 附加给模型的主题提示，可选
    pub topics: Option<String>,
}

/// 试卷状态流转请求
#[derive(Debug, Deserialize)]
pub struct UpdatePaperStatusRequest {
    pub status: PaperStatus,
}

/// 试卷列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct PaperListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub class_id: Option<i64>,
    pub status: Option<PaperStatus>,
    pub search: Option<String>,
}

// 用于存储层的新建试卷记录（校验已在业务层完成）
#[derive(Debug, Clone)]
pub struct NewQuestionPaper {
    pub school_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub exam_id: Option<i64>,
    pub paper_code: String,
    pub title: String,
    pub instructions: Option<String>,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub blooms_distribution: crate::models::question_papers::entities::BloomsDistribution,
    pub status: PaperStatus,
    pub created_by: i64,
    // (question_id, position, marks)
    pub entries: Vec<(i64, i32, i32)>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct PaperListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub class_id: Option<i64>,
    pub status: Option<PaperStatus>,
    pub search: Option<String>,
    pub school_id: i64,
}
