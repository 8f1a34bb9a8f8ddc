use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::{requests::CreateExamRequest, responses::ExamResponse},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_staff_access, require_school};

pub async fn create_exam(
    service: &ExamService,
    exam_data: CreateExamRequest,
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

    if exam_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考试标题不能为空",
        )));
    }
    if exam_data.duration_minutes <= 0 || exam_data.total_marks <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考试时长与总分必须为正数",
        )));
    }

    let storage = service.get_storage(request);

    // 教师需要考试模块授权
    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Exams).await {
        return Ok(resp);
    }

    // 班级与科目必须属于本校
    match storage.get_class_by_id(exam_data.class_id).await {
        Ok(Some(class)) if class.school_id == school_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在或不属于本校",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    }

    match storage.get_subject_by_id(exam_data.subject_id).await {
        Ok(Some(subject)) if subject.school_id == school_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在或不属于本校",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_exam(school_id, operator.id, exam_data).await {
        Ok(exam) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(ExamResponse { exam }, "考试创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建考试失败: {e}"),
            )),
        ),
    }
}
