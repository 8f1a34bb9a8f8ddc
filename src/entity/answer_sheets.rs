//! 答卷实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answer_sheets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub download_token: String,
    pub status: String,
    pub score: Option<f64>,
    // JSON 编码的 AI 批改反馈
    pub ai_feedback: Option<String>,
    pub checked_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_answer_sheet(self) -> crate::models::answer_sheets::entities::AnswerSheet {
        use crate::models::answer_sheets::entities::{AnswerSheet, SheetStatus};
        use chrono::{DateTime, Utc};

        AnswerSheet {
            id: self.id,
            school_id: self.school_id,
            exam_id: self.exam_id,
            student_id: self.student_id,
            download_token: self.download_token,
            status: self
                .status
                .parse::<SheetStatus>()
                .unwrap_or(SheetStatus::Uploaded),
            score: self.score,
            ai_feedback: self
                .ai_feedback
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
            checked_at: self
                .checked_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
