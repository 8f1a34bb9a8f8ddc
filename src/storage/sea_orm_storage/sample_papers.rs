use super::SeaOrmStorage;
use crate::entity::sample_papers::{ActiveModel, Column, Entity as SamplePapers};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    sample_papers::{
        CreateSamplePaperRequest, SamplePaper, SamplePaperListQuery, SamplePaperListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 登记样卷
    pub async fn create_sample_paper_impl(
        &self,
        school_id: i64,
        uploaded_by: i64,
        req: CreateSamplePaperRequest,
    ) -> Result<SamplePaper> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            subject_id: Set(req.subject_id),
            grade_level: Set(req.grade_level),
            title: Set(req.title),
            download_token: Set(req.download_token),
            uploaded_by: Set(uploaded_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("登记样卷失败: {e}")))?;

        Ok(result.into_sample_paper())
    }

    /// 通过 ID 获取样卷
    pub async fn get_sample_paper_by_id_impl(&self, id: i64) -> Result<Option<SamplePaper>> {
        let result = SamplePapers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询样卷失败: {e}")))?;

        Ok(result.map(|m| m.into_sample_paper()))
    }

    /// 分页列出样卷
    pub async fn list_sample_papers_with_pagination_impl(
        &self,
        query: SamplePaperListQuery,
    ) -> Result<SamplePaperListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = SamplePapers::find().filter(Column::SchoolId.eq(query.school_id));

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询样卷总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询样卷页数失败: {e}")))?;
        let papers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询样卷列表失败: {e}")))?;

        Ok(SamplePaperListResponse {
            items: papers.into_iter().map(|m| m.into_sample_paper()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除样卷
    pub async fn delete_sample_paper_impl(&self, id: i64) -> Result<bool> {
        let result = SamplePapers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除样卷失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
