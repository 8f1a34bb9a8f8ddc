use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::QuestionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait, Set,
};

fn encode_options(options: &[String]) -> Result<Option<String>> {
    if options.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(options)
        .map(Some)
        .map_err(|e| EduSystemError::serialization(format!("选项序列化失败: {e}")))
}

fn build_question_model(
    school_id: i64,
    created_by: i64,
    ai_generated: bool,
    req: CreateQuestionRequest,
    now: i64,
) -> Result<ActiveModel> {
    Ok(ActiveModel {
        school_id: Set(school_id),
        subject_id: Set(req.subject_id),
        question_text: Set(req.question_text),
        question_type: Set(req.question_type.to_string()),
        options: Set(encode_options(&req.options)?),
        correct_answer: Set(req.correct_answer),
        marks: Set(req.marks),
        blooms_level: Set(req.blooms_level.to_string()),
        difficulty: Set(req.difficulty.to_string()),
        ai_generated: Set(ai_generated),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    })
}

impl SeaOrmStorage {
    /// 创建题目
    pub async fn create_question_impl(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        req: CreateQuestionRequest,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();
        let model = build_question_model(school_id, created_by, ai_generated, req, now)?;

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 批量创建题目（同一事务）
    pub async fn create_questions_impl(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        requests: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<Question>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(requests.len());
        for req in requests {
            let model = build_question_model(school_id, created_by, ai_generated, req, now)?;
            let result = model
                .insert(&txn)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("批量创建题目失败: {e}")))?;
            created.push(result.into_question());
        }

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 批量获取题目
    pub async fn get_questions_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Question>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Questions::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("批量查询题目失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_question()).collect())
    }

    /// 分页列出题目
    pub async fn list_questions_with_pagination_impl(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Questions::find().filter(Column::SchoolId.eq(query.school_id));

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(ref question_type) = query.question_type {
            select = select.filter(Column::QuestionType.eq(question_type.to_string()));
        }

        if let Some(ref blooms_level) = query.blooms_level {
            select = select.filter(Column::BloomsLevel.eq(blooms_level.to_string()));
        }

        if let Some(ref difficulty) = query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::QuestionText.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询题目总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询题目页数失败: {e}")))?;
        let questions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(QuestionListResponse {
            items: questions.into_iter().map(|m| m.into_question()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新题目
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = self.get_question_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(question_text) = update.question_text {
            model.question_text = Set(question_text);
        }

        if let Some(options) = update.options {
            model.options = Set(encode_options(&options)?);
        }

        if let Some(correct_answer) = update.correct_answer {
            model.correct_answer = Set(Some(correct_answer));
        }

        if let Some(marks) = update.marks {
            model.marks = Set(marks);
        }

        if let Some(blooms_level) = update.blooms_level {
            model.blooms_level = Set(blooms_level.to_string());
        }

        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(difficulty.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
