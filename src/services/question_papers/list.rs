use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::{
        entities::PaperStatus,
        requests::{PaperListParams, PaperListQuery},
    },
    users::entities::UserRole,
};
use crate::services::guard::{current_user, require_school};

pub async fn list_papers(
    service: &QuestionPaperService,
    params: PaperListParams,
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

    // 学生只能看到已发布的试卷
    let status = if operator.role == UserRole::Student {
        Some(PaperStatus::Published)
    } else {
        params.status
    };

    let query = PaperListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        subject_id: params.subject_id,
        class_id: params.class_id,
        status,
        search: params.search,
        school_id,
    };

    let storage = service.get_storage(request);

    match storage.list_papers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询试卷列表失败: {e}"),
            )),
        ),
    }
}
