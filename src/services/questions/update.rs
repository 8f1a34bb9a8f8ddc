use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{QuestionService, validate_options};
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{requests::UpdateQuestionRequest, responses::QuestionResponse},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

pub async fn update_question(
    service: &QuestionService,
    question_id: i64,
    update_data: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Questions).await {
        return Ok(resp);
    }

    let existing = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = ensure_same_school(&operator, existing.school_id) {
        return Ok(resp);
    }

    if let Some(ref question_text) = update_data.question_text
        && question_text.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题干不能为空",
        )));
    }

    if let Some(marks) = update_data.marks
        && marks <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "分值必须为正数",
        )));
    }

    // 题型不可变，选项校验基于已有题型
    if let Some(ref options) = update_data.options
        && let Err(msg) = validate_options(existing.question_type, options)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuestionOptionsInvalid, msg)));
    }

    match storage.update_question(question_id, update_data).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(QuestionResponse { question }, "题目已更新"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新题目失败: {e}"),
            )),
        ),
    }
}
