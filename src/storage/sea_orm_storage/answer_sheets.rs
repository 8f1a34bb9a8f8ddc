use super::SeaOrmStorage;
use crate::entity::answer_sheets::{ActiveModel, Column, Entity as AnswerSheets};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    answer_sheets::{
        entities::{AnswerSheet, SheetFeedback, SheetStatus},
        requests::SheetListQuery,
        responses::SheetListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建答卷记录
    ///
    /// (exam_id, student_id) 上有唯一索引，重复上传由数据库拒绝。
    pub async fn create_answer_sheet_impl(
        &self,
        school_id: i64,
        exam_id: i64,
        student_id: i64,
        download_token: &str,
    ) -> Result<AnswerSheet> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            exam_id: Set(exam_id),
            student_id: Set(student_id),
            download_token: Set(download_token.to_string()),
            status: Set(SheetStatus::Uploaded.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建答卷失败: {e}")))?;

        Ok(result.into_answer_sheet())
    }

    /// 通过 ID 获取答卷
    pub async fn get_answer_sheet_by_id_impl(&self, id: i64) -> Result<Option<AnswerSheet>> {
        let result = AnswerSheets::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询答卷失败: {e}")))?;

        Ok(result.map(|m| m.into_answer_sheet()))
    }

    /// 通过考试与学生获取答卷
    pub async fn get_answer_sheet_by_exam_and_student_impl(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<AnswerSheet>> {
        let result = AnswerSheets::find()
            .filter(Column::ExamId.eq(exam_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询答卷失败: {e}")))?;

        Ok(result.map(|m| m.into_answer_sheet()))
    }

    /// 分页列出某场考试的答卷
    pub async fn list_answer_sheets_with_pagination_impl(
        &self,
        query: SheetListQuery,
    ) -> Result<SheetListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AnswerSheets::find().filter(Column::ExamId.eq(query.exam_id));

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_asc(Column::StudentId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询答卷总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询答卷页数失败: {e}")))?;
        let sheets = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询答卷列表失败: {e}")))?;

        Ok(SheetListResponse {
            items: sheets.into_iter().map(|m| m.into_answer_sheet()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新答卷状态
    pub async fn update_sheet_status_impl(&self, id: i64, status: SheetStatus) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = AnswerSheets::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新答卷状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入批改结果并置为已批改
    pub async fn complete_sheet_check_impl(
        &self,
        id: i64,
        score: f64,
        feedback: &SheetFeedback,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let feedback_json = serde_json::to_string(feedback)
            .map_err(|e| EduSystemError::serialization(format!("批改反馈序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(id),
            status: Set(SheetStatus::Checked.to_string()),
            score: Set(Some(score)),
            ai_feedback: Set(Some(feedback_json)),
            checked_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("写入批改结果失败: {e}")))?;

        Ok(true)
    }
}
