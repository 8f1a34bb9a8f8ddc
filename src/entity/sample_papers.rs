//! 样卷实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sample_papers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub grade_level: i32,
    pub title: String,
    pub download_token: String,
    pub uploaded_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_sample_paper(self) -> crate::models::sample_papers::SamplePaper {
        use crate::models::sample_papers::SamplePaper;
        use chrono::{DateTime, Utc};

        SamplePaper {
            id: self.id,
            school_id: self.school_id,
            subject_id: self.subject_id,
            grade_level: self.grade_level,
            title: self.title,
            download_token: self.download_token,
            uploaded_by: self.uploaded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
