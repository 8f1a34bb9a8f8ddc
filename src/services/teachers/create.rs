use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        entities::TeacherWithUser,
        requests::{CreateTeacherProfile, CreateTeacherRequest},
        responses::TeacherResponse,
    },
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::services::guard::{current_user, require_school};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

/// 创建教师：先建账号再建档案
pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
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

    if let Err(msg) = validate_username(&teacher_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_email(&teacher_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_password_simple(&teacher_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if teacher_data.employee_no.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "工号不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 任教科目必须属于本校
    for subject_id in &teacher_data.subject_ids {
        match storage.get_subject_by_id(*subject_id).await {
            Ok(Some(subject)) if subject.school_id == school_id => {}
            Ok(_) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::SubjectNotFound,
                    format!("科目 {subject_id} 不存在或不属于本校"),
                )));
            }
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )));
            }
        }
    }

    let password_hash = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    // 1. 创建账号
    let user = match storage
        .create_user(CreateUserRequest {
            username: teacher_data.username,
            email: teacher_data.email,
            password: password_hash,
            role: UserRole::Teacher,
            school_id: Some(school_id),
            display_name: teacher_data.display_name,
            avatar_url: None,
        })
        .await
    {
        Ok(user) => user,
        Err(e) => {
            let msg = format!("创建教师账号失败: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )));
            }
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)));
        }
    };

    // 2. 创建档案；失败时回收刚建的账号
    match storage
        .create_teacher_profile(CreateTeacherProfile {
            user_id: user.id,
            school_id,
            employee_no: teacher_data.employee_no,
            qualification: teacher_data.qualification,
            subject_ids: teacher_data.subject_ids,
        })
        .await
    {
        Ok(teacher) => Ok(HttpResponse::Created().json(ApiResponse::success(
            TeacherResponse {
                teacher: TeacherWithUser { teacher, user },
            },
            "教师创建成功",
        ))),
        Err(e) => {
            let msg = format!("创建教师档案失败: {e}");
            error!("{}", msg);
            if let Err(cleanup) = storage.delete_user(user.id).await {
                warn!("回收教师账号失败 (user_id: {}): {}", user.id, cleanup);
            }
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::Conflict,
                    "Employee number already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
