use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{QuestionService, validate_options};
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{requests::CreateQuestionRequest, responses::QuestionResponse},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_staff_access, require_school};

pub async fn create_question(
    service: &QuestionService,
    question_data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let school_id = match require_school(&operator) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if question_data.question_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题干不能为空",
        )));
    }
    if question_data.marks <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "分值必须为正数",
        )));
    }
    if let Err(msg) = validate_options(question_data.question_type, &question_data.options) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuestionOptionsInvalid, msg)));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Questions).await {
        return Ok(resp);
    }

    // 科目必须属于本校
    match storage.get_subject_by_id(question_data.subject_id).await {
        Ok(Some(subject)) if subject.school_id == school_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在或不属于本校",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    }

    match storage
        .create_question(school_id, operator.id, false, question_data)
        .await
    {
        Ok(question) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(QuestionResponse { question }, "题目创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建题目失败: {e}"),
            )),
        ),
    }
}
