use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        entities::StudentWithUser,
        requests::{CreateStudentProfile, CreateStudentRequest},
        responses::StudentResponse,
    },
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::services::guard::{current_user, require_school};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

/// 创建学生：先建账号再建档案
pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
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

    if let Err(msg) = validate_username(&student_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_password_simple(&student_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if student_data.admission_no.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学籍号不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 班级必须属于本校
    if let Some(class_id) = student_data.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(class)) if class.school_id == school_id => {}
            Ok(_) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "班级不存在或不属于本校",
                )));
            }
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )));
            }
        }
    }

    let password_hash = match hash_password(&student_data.password) {
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
            username: student_data.username,
            email: student_data.email,
            password: password_hash,
            role: UserRole::Student,
            school_id: Some(school_id),
            display_name: student_data.display_name,
            avatar_url: None,
        })
        .await
    {
        Ok(user) => user,
        Err(e) => {
            let msg = format!("创建学生账号失败: {e}");
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
        .create_student_profile(CreateStudentProfile {
            user_id: user.id,
            school_id,
            class_id: student_data.class_id,
            admission_no: student_data.admission_no,
            roll_no: student_data.roll_no,
            guardian_name: student_data.guardian_name,
            guardian_phone: student_data.guardian_phone,
        })
        .await
    {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            StudentResponse {
                student: StudentWithUser { student, user },
            },
            "学生创建成功",
        ))),
        Err(e) => {
            let msg = format!("创建学生档案失败: {e}");
            error!("{}", msg);
            if let Err(cleanup) = storage.delete_user(user.id).await {
                warn!("回收学生账号失败 (user_id: {}): {}", user.id, cleanup);
            }
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::Conflict,
                    "Admission number already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
