//! 试卷实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question_papers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub exam_id: Option<i64>,
    #[sea_orm(unique)]
    pub paper_code: String,
    pub title: String,
    pub instructions: Option<String>,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub blooms_remember: i32,
    pub blooms_understand: i32,
    pub blooms_apply: i32,
    pub blooms_analyze: i32,
    pub blooms_evaluate: i32,
    pub blooms_create: i32,
    pub status: String,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paper_questions::Entity")]
    PaperQuestions,
}

impl Related<super::paper_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_paper(self) -> crate::models::question_papers::entities::QuestionPaper {
        use crate::models::question_papers::entities::{
            BloomsDistribution, PaperStatus, QuestionPaper,
        };
        use chrono::{DateTime, Utc};

        QuestionPaper {
            id: self.id,
            school_id: self.school_id,
            subject_id: self.subject_id,
            class_id: self.class_id,
            exam_id: self.exam_id,
            paper_code: self.paper_code,
            title: self.title,
            instructions: self.instructions,
            total_marks: self.total_marks,
            duration_minutes: self.duration_minutes,
            blooms_distribution: BloomsDistribution {
                remember: self.blooms_remember,
                understand: self.blooms_understand,
                apply: self.blooms_apply,
                analyze: self.blooms_analyze,
                evaluate: self.blooms_evaluate,
                create: self.blooms_create,
            },
            status: self
                .status
                .parse::<PaperStatus>()
                .unwrap_or(PaperStatus::Draft),
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
