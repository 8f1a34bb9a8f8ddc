pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::questions::requests::{
    CreateQuestionRequest, QuestionListParams, UpdateQuestionRequest,
};
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建题目
    pub async fn create_question(
        &self,
        question_data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, question_data, request).await
    }

    // 列出题目
    pub async fn list_questions(
        &self,
        params: QuestionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, params, request).await
    }

    // 获取题目详情
    pub async fn get_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_question(self, question_id, request).await
    }

    // 更新题目
    pub async fn update_question(
        &self,
        question_id: i64,
        update_data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, question_id, update_data, request).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, question_id, request).await
    }
}

/// 选择题必须有至少两个选项，非选择题不允许携带选项
pub(crate) fn validate_options(
    question_type: crate::models::questions::entities::QuestionType,
    options: &[String],
) -> Result<(), &'static str> {
    use crate::models::questions::entities::QuestionType;

    match question_type {
        QuestionType::Mcq => {
            if options.len() < 2 {
                return Err("选择题至少需要 2 个选项");
            }
            if options.iter().any(|o| o.trim().is_empty()) {
                return Err("选项内容不能为空");
            }
            Ok(())
        }
        _ => {
            if options.is_empty() {
                Ok(())
            } else {
                Err("非选择题不能携带选项")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_options;
    use crate::models::questions::entities::QuestionType;

    #[test]
    fn test_mcq_needs_two_options() {
        assert!(validate_options(QuestionType::Mcq, &["A".into()]).is_err());
        assert!(validate_options(QuestionType::Mcq, &["A".into(), "B".into()]).is_ok());
    }

    #[test]
    fn test_mcq_rejects_blank_option() {
        assert!(validate_options(QuestionType::Mcq, &["A".into(), "  ".into()]).is_err());
    }

    #[test]
    fn test_non_mcq_rejects_options() {
        assert!(validate_options(QuestionType::ShortAnswer, &[]).is_ok());
        assert!(validate_options(QuestionType::LongAnswer, &["A".into()]).is_err());
    }
}
