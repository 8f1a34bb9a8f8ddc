use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{ApiResponse, ErrorCode, questions::responses::QuestionResponse};
use crate::services::guard::{current_user, ensure_same_school};

pub async fn get_question(
    service: &QuestionService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => {
            if let Err(resp) = ensure_same_school(&operator, question.school_id) {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(QuestionResponse { question }, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目失败: {e}"),
            )),
        ),
    }
}
