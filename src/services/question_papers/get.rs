use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::{entities::PaperStatus, responses::QuestionPaperResponse},
    users::entities::UserRole,
};
use crate::services::guard::{current_user, ensure_same_school};

pub async fn get_paper(
    service: &QuestionPaperService,
    paper_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

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

    // 学生只能查看已发布的试卷
    if operator.role == UserRole::Student && paper.status != PaperStatus::Published {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "试卷尚未发布",
        )));
    }

    match storage.get_paper_questions(paper.id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionPaperResponse { paper, questions },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询试卷题目失败: {e}"),
            )),
        ),
    }
}
