//! 缺勤记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "absenteeism")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    // YYYY-MM-DD
    pub date: String,
    pub reason: Option<String>,
    pub recorded_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_record(self) -> crate::models::absenteeism::AbsenteeismRecord {
        use crate::models::absenteeism::AbsenteeismRecord;
        use chrono::{DateTime, NaiveDate, Utc};

        AbsenteeismRecord {
            id: self.id,
            school_id: self.school_id,
            student_id: self.student_id,
            class_id: self.class_id,
            date: NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").unwrap_or_default(),
            reason: self.reason,
            recorded_by: self.recorded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
