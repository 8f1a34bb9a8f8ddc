use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::{entities::PaperStatus, requests::UpdatePaperStatusRequest},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

/// 试卷状态流转：DRAFT → GENERATED → PUBLISHED → ARCHIVED，只进不退
pub async fn update_paper_status(
    service: &QuestionPaperService,
    paper_id: i64,
    status_data: UpdatePaperStatusRequest,
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

    let next = status_data.status;
    if !paper.status.can_transition_to(next) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!("试卷状态不能从 {} 变更为 {next}", paper.status),
        )));
    }

    match storage.update_paper_status(paper_id, next).await {
        Ok(true) => {
            // 发布时通知班级学生
            if next == PaperStatus::Published {
                notify_class_students(service, request, &paper).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "试卷状态已更新为 {next}"
            ))))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionPaperNotFound,
            "试卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新试卷状态失败: {e}"),
            )),
        ),
    }
}

/// 发布通知（失败只记日志，不影响主流程）
async fn notify_class_students(
    service: &QuestionPaperService,
    request: &HttpRequest,
    paper: &crate::models::question_papers::entities::QuestionPaper,
) {
    let storage = service.get_storage(request);

    let user_ids = match storage.list_student_user_ids_by_class(paper.class_id).await {
        Ok(ids) => ids,
        Err(e) => {
            warn!("查询班级学生失败，跳过发布通知: {}", e);
            return;
        }
    };

    if let Err(e) = storage
        .create_notifications(
            &user_ids,
            "新试卷发布",
            &format!("试卷《{}》（{}）已发布", paper.title, paper.paper_code),
        )
        .await
    {
        warn!("发送试卷发布通知失败: {}", e);
    }
}
