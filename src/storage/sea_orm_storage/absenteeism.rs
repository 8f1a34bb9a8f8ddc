use super::SeaOrmStorage;
use crate::entity::absenteeism::{ActiveModel, Column, Entity as Records};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    absenteeism::{
        AbsenteeismListQuery, AbsenteeismListResponse, AbsenteeismRecord, RecordAbsenceRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 记录缺勤
    ///
    /// (student_id, date) 上有唯一索引，同日重复记录由数据库拒绝。
    pub async fn record_absence_impl(
        &self,
        school_id: i64,
        class_id: i64,
        recorded_by: i64,
        record: RecordAbsenceRequest,
    ) -> Result<AbsenteeismRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            student_id: Set(record.student_id),
            class_id: Set(class_id),
            date: Set(record.date.format("%Y-%m-%d").to_string()),
            reason: Set(record.reason),
            recorded_by: Set(recorded_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("记录缺勤失败: {e}")))?;

        Ok(result.into_record())
    }

    /// 通过 ID 获取缺勤记录
    pub async fn get_absence_by_id_impl(&self, id: i64) -> Result<Option<AbsenteeismRecord>> {
        let result = Records::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询缺勤记录失败: {e}")))?;

        Ok(result.map(|m| m.into_record()))
    }

    /// 分页列出缺勤记录
    pub async fn list_absences_with_pagination_impl(
        &self,
        query: AbsenteeismListQuery,
    ) -> Result<AbsenteeismListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Records::find().filter(Column::SchoolId.eq(query.school_id));

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 日期列为 YYYY-MM-DD 文本，字典序即日期序
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from.format("%Y-%m-%d").to_string()));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to.format("%Y-%m-%d").to_string()));
        }

        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询缺勤总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询缺勤页数失败: {e}")))?;
        let records = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询缺勤列表失败: {e}")))?;

        Ok(AbsenteeismListResponse {
            items: records.into_iter().map(|m| m.into_record()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除缺勤记录
    pub async fn delete_absence_impl(&self, id: i64) -> Result<bool> {
        let result = Records::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除缺勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
