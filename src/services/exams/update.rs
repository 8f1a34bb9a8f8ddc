use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::{requests::UpdateExamRequest, responses::ExamResponse},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

pub async fn update_exam(
    service: &ExamService,
    exam_id: i64,
    update_data: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Exams).await {
        return Ok(resp);
    }

    let existing = match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "考试不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考试失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = ensure_same_school(&operator, existing.school_id) {
        return Ok(resp);
    }

    // 状态流转：前进式，取消只能发生在结束前
    if let Some(next_status) = update_data.status
        && !existing.status.can_transition_to(next_status)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!("考试状态不能从 {} 变更为 {next_status}", existing.status),
        )));
    }

    if let Some(duration_minutes) = update_data.duration_minutes
        && duration_minutes <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考试时长必须为正数",
        )));
    }

    if let Some(total_marks) = update_data.total_marks
        && total_marks <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考试总分必须为正数",
        )));
    }

    match storage.update_exam(exam_id, update_data).await {
        Ok(Some(exam)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ExamResponse { exam }, "考试已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "考试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新考试失败: {e}"),
            )),
        ),
    }
}
