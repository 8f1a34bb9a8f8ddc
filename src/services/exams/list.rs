use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::requests::{ExamListParams, ExamListQuery},
};
use crate::services::guard::{current_user, require_school};

pub async fn list_exams(
    service: &ExamService,
    params: ExamListParams,
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

    let query = ExamListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_id: params.class_id,
        subject_id: params.subject_id,
        status: params.status,
        search: params.search,
        school_id,
    };

    let storage = service.get_storage(request);

    match storage.list_exams_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考试列表失败: {e}"),
            )),
        ),
    }
}
