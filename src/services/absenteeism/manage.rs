use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenteeismService;
use crate::models::{
    ApiResponse, ErrorCode,
    absenteeism::{AbsenteeismListParams, AbsenteeismListQuery, RecordAbsenceRequest},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access, require_school};

/// 记录缺勤：学生必须在本校且已分班
pub async fn record_absence(
    service: &AbsenteeismService,
    record_data: RecordAbsenceRequest,
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

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Absenteeism).await {
        return Ok(resp);
    }

    let student = match storage.get_student_by_id(record_data.student_id).await {
        Ok(Some(student)) if student.school_id == school_id => student,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在或不属于本校",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };

    let Some(class_id) = student.class_id else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "该学生尚未分班，无法记录缺勤",
        )));
    };

    match storage
        .record_absence(school_id, class_id, operator.id, record_data)
        .await
    {
        Ok(record) => Ok(HttpResponse::Created().json(ApiResponse::success(record, "缺勤已记录"))),
        Err(e) => {
            let msg = format!("记录缺勤失败: {e}");
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AbsenteeismAlreadyRecorded,
                    "该学生当日已有缺勤记录",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

/// 列出缺勤记录（班级、学生、日期范围筛选）
pub async fn list_absences(
    service: &AbsenteeismService,
    params: AbsenteeismListParams,
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

    let query = AbsenteeismListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_id: params.class_id,
        student_id: params.student_id,
        from: params.from,
        to: params.to,
        school_id,
    };

    let storage = service.get_storage(request);

    match storage.list_absences_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询缺勤列表失败: {e}"),
            )),
        ),
    }
}

/// 删除缺勤记录
pub async fn delete_absence(
    service: &AbsenteeismService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::Absenteeism).await {
        return Ok(resp);
    }

    match storage.get_absence_by_id(absence_id).await {
        Ok(Some(record)) => {
            if let Err(resp) = ensure_same_school(&operator, record.school_id) {
                return Ok(resp);
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "缺勤记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询缺勤记录失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_absence(absence_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("缺勤记录已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "缺勤记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除缺勤记录失败: {e}"),
            )),
        ),
    }
}
