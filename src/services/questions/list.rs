use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::requests::{QuestionListParams, QuestionListQuery},
};
use crate::services::guard::{current_user, require_school};

pub async fn list_questions(
    service: &QuestionService,
    params: QuestionListParams,
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

    let query = QuestionListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        subject_id: params.subject_id,
        question_type: params.question_type,
        blooms_level: params.blooms_level,
        difficulty: params.difficulty,
        search: params.search,
        school_id,
    };

    let storage = service.get_storage(request);

    match storage.list_questions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目列表失败: {e}"),
            )),
        ),
    }
}
