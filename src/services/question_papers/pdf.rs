use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::entities::PaperStatus,
    users::entities::UserRole,
};
use crate::services::guard::{current_user, ensure_same_school};
use crate::services::pdf::{PaperRenderContext, PdfGenerationService};

/// 下载试卷 PDF
pub async fn download_paper_pdf(
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

    // 学生只能下载已发布的试卷
    if operator.role == UserRole::Student && paper.status != PaperStatus::Published {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "试卷尚未发布",
        )));
    }

    let questions = match storage.get_paper_questions(paper.id).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询试卷题目失败: {e}"),
                )),
            );
        }
    };

    // 页面展示用的名称
    let school_name = match storage.get_school_by_id(paper.school_id).await {
        Ok(Some(school)) => school.name,
        _ => String::from("School"),
    };
    let subject_name = match storage.get_subject_by_id(paper.subject_id).await {
        Ok(Some(subject)) => subject.name,
        _ => String::from("Subject"),
    };
    let class_name = match storage.get_class_by_id(paper.class_id).await {
        Ok(Some(class)) => class.name,
        _ => String::from("Class"),
    };

    let ctx = PaperRenderContext {
        school_name: &school_name,
        subject_name: &subject_name,
        class_name: &class_name,
    };

    match PdfGenerationService::render_paper(&paper, &questions, &ctx) {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}.pdf\"", paper.paper_code),
            ))
            .body(bytes)),
        Err(e) => {
            error!("试卷 PDF 渲染失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PdfRenderFailed,
                    format!("试卷 PDF 渲染失败: {e}"),
                )),
            )
        }
    }
}
