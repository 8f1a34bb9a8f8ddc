use super::SeaOrmStorage;
use crate::entity::staff_access::{ActiveModel, Column, Entity as Grants};
use crate::errors::{EduSystemError, Result};
use crate::models::staff_access::{AccessModule, StaffAccessGrant};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 授予模块权限
    ///
    /// (user_id, module) 上有唯一索引，重复授权由数据库拒绝。
    pub async fn grant_staff_access_impl(
        &self,
        school_id: i64,
        user_id: i64,
        module: AccessModule,
        granted_by: i64,
    ) -> Result<StaffAccessGrant> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            user_id: Set(user_id),
            module: Set(module.to_string()),
            granted_by: Set(granted_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("授予模块权限失败: {e}")))?;

        result
            .into_grant()
            .ok_or_else(|| EduSystemError::database_operation("授权记录模块名非法"))
    }

    /// 撤销模块权限
    pub async fn revoke_staff_access_impl(
        &self,
        user_id: i64,
        module: AccessModule,
    ) -> Result<bool> {
        let result = Grants::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Module.eq(module.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("撤销模块权限失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出用户的全部授权
    pub async fn list_staff_access_impl(&self, user_id: i64) -> Result<Vec<StaffAccessGrant>> {
        let rows = Grants::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Module)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询模块权限失败: {e}")))?;

        Ok(rows.into_iter().filter_map(|m| m.into_grant()).collect())
    }

    /// 检查用户是否具有某模块权限
    pub async fn has_staff_access_impl(&self, user_id: i64, module: AccessModule) -> Result<bool> {
        let count = Grants::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Module.eq(module.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("检查模块权限失败: {e}")))?;

        Ok(count > 0)
    }
}
