//! 教职工模块权限实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff_access")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub user_id: i64,
    pub module: String,
    pub granted_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grant(self) -> Option<crate::models::staff_access::StaffAccessGrant> {
        use crate::models::staff_access::{AccessModule, StaffAccessGrant};
        use chrono::{DateTime, Utc};

        // 未知模块名视为脏数据，跳过
        let module = self.module.parse::<AccessModule>().ok()?;

        Some(StaffAccessGrant {
            id: self.id,
            school_id: self.school_id,
            user_id: self.user_id,
            module,
            granted_by: self.granted_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}
