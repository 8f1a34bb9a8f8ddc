//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub question_text: String,
    pub question_type: String,
    // JSON 编码的选项列表（仅选择题）
    pub options: Option<String>,
    pub correct_answer: Option<String>,
    pub marks: i32,
    pub blooms_level: String,
    pub difficulty: String,
    pub ai_generated: bool,
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
    pub fn into_question(self) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::{BloomsLevel, Difficulty, Question, QuestionType};
        use chrono::{DateTime, Utc};

        Question {
            id: self.id,
            school_id: self.school_id,
            subject_id: self.subject_id,
            question_text: self.question_text,
            question_type: self
                .question_type
                .parse::<QuestionType>()
                .unwrap_or(QuestionType::ShortAnswer),
            options: self
                .options
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok())
                .unwrap_or_default(),
            correct_answer: self.correct_answer,
            marks: self.marks,
            blooms_level: self
                .blooms_level
                .parse::<BloomsLevel>()
                .unwrap_or(BloomsLevel::Remember),
            difficulty: self
                .difficulty
                .parse::<Difficulty>()
                .unwrap_or(Difficulty::Medium),
            ai_generated: self.ai_generated,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
