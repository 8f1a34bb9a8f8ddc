use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode, question_papers::entities::PaperStatus, staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

/// 删除试卷：只允许删除草稿
pub async fn delete_paper(
    service: &QuestionPaperService,
    paper_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::QuestionPapers).await
    {
        return Ok(resp);
    }

    let paper = match storage.get_paper_by_id(paper_id).await {
        Ok(Some(paper)) => paper,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionPaperNotFound,
                "试卷不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询试卷失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = ensure_same_school(&operator, paper.school_id) {
        return Ok(resp);
    }

    if paper.status != PaperStatus::Draft {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            "只能删除草稿状态的试卷",
        )));
    }

    match storage.delete_paper(paper_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("试卷已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionPaperNotFound,
            "试卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除试卷失败: {e}"),
            )),
        ),
    }
}
