use super::SeaOrmStorage;
use crate::entity::paper_questions::{
    ActiveModel as PaperQuestionActiveModel, Column as PaperQuestionColumn,
    Entity as PaperQuestions,
};
use crate::entity::question_papers::{ActiveModel, Column, Entity as Papers};
use crate::entity::questions::Entity as Questions;
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    question_papers::{
        entities::{PaperQuestion, PaperStatus, QuestionPaper},
        requests::{NewQuestionPaper, PaperListQuery},
        responses::PaperListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait, Set,
};

impl SeaOrmStorage {
    /// 创建试卷及其题目关联（单事务）
    pub async fn create_paper_with_questions_impl(
        &self,
        paper: NewQuestionPaper,
    ) -> Result<QuestionPaper> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let dist = paper.blooms_distribution;
        let model = ActiveModel {
            school_id: Set(paper.school_id),
            subject_id: Set(paper.subject_id),
            class_id: Set(paper.class_id),
            exam_id: Set(paper.exam_id),
            paper_code: Set(paper.paper_code),
            title: Set(paper.title),
            instructions: Set(paper.instructions),
            total_marks: Set(paper.total_marks),
            duration_minutes: Set(paper.duration_minutes),
            blooms_remember: Set(dist.remember),
            blooms_understand: Set(dist.understand),
            blooms_apply: Set(dist.apply),
            blooms_analyze: Set(dist.analyze),
            blooms_evaluate: Set(dist.evaluate),
            blooms_create: Set(dist.create),
            status: Set(paper.status.to_string()),
            created_by: Set(paper.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建试卷失败: {e}")))?;

        for (question_id, position, marks) in paper.entries {
            let entry = PaperQuestionActiveModel {
                paper_id: Set(created.id),
                question_id: Set(question_id),
                position: Set(position),
                marks: Set(marks),
                ..Default::default()
            };
            entry
                .insert(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("写入试卷题目失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created.into_paper())
    }

    /// 通过 ID 获取试卷
    pub async fn get_paper_by_id_impl(&self, id: i64) -> Result<Option<QuestionPaper>> {
        let result = Papers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷失败: {e}")))?;

        Ok(result.map(|m| m.into_paper()))
    }

    /// 查找某场考试关联的试卷
    pub async fn get_paper_by_exam_id_impl(&self, exam_id: i64) -> Result<Option<QuestionPaper>> {
        let result = Papers::find()
            .filter(Column::ExamId.eq(exam_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷失败: {e}")))?;

        Ok(result.map(|m| m.into_paper()))
    }

    /// 按题号顺序取出试卷题目
    pub async fn get_paper_questions_impl(&self, paper_id: i64) -> Result<Vec<PaperQuestion>> {
        let rows = PaperQuestions::find()
            .find_also_related(Questions)
            .filter(PaperQuestionColumn::PaperId.eq(paper_id))
            .order_by_asc(PaperQuestionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷题目失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, question)| {
                question.map(|q| PaperQuestion {
                    position: entry.position,
                    marks: entry.marks,
                    question: q.into_question(),
                })
            })
            .collect())
    }

    /// 分页列出试卷
    pub async fn list_papers_with_pagination_impl(
        &self,
        query: PaperListQuery,
    ) -> Result<PaperListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Papers::find().filter(Column::SchoolId.eq(query.school_id));

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                sea_orm::Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::PaperCode.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷页数失败: {e}")))?;
        let papers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询试卷列表失败: {e}")))?;

        Ok(PaperListResponse {
            items: papers.into_iter().map(|m| m.into_paper()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新试卷状态
    pub async fn update_paper_status_impl(&self, id: i64, status: PaperStatus) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Papers::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新试卷状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除试卷（题目关联随外键级联删除）
    pub async fn delete_paper_impl(&self, id: i64) -> Result<bool> {
        let result = Papers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除试卷失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
