//! 考试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub exam_date: i64,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub status: String,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::answer_sheets::Entity")]
    AnswerSheets,
}

impl Related<super::answer_sheets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnswerSheets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::{Exam, ExamStatus};
        use chrono::{DateTime, Utc};

        Exam {
            id: self.id,
            school_id: self.school_id,
            class_id: self.class_id,
            subject_id: self.subject_id,
            title: self.title,
            exam_date: DateTime::<Utc>::from_timestamp(self.exam_date, 0).unwrap_or_default(),
            duration_minutes: self.duration_minutes,
            total_marks: self.total_marks,
            status: self
                .status
                .parse::<ExamStatus>()
                .unwrap_or(ExamStatus::Scheduled),
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
