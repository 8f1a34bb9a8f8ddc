use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolService;
use crate::models::{
    ApiResponse, ErrorCode,
    schools::{
        CreateSchoolRequest, SchoolListParams, SchoolListQuery, SchoolResponse,
        UpdateSchoolRequest,
    },
};
use crate::utils::validate::validate_school_code;

/// 创建学校（SUPER_ADMIN）
pub async fn create_school(
    service: &SchoolService,
    school_data: CreateSchoolRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if school_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学校名称不能为空",
        )));
    }

    if let Err(msg) = validate_school_code(&school_data.code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_school(school_data).await {
        Ok(school) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(SchoolResponse { school }, "学校创建成功"))),
        Err(e) => {
            let msg = format!("创建学校失败: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SchoolAlreadyExists,
                    "School code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

/// 列出学校（SUPER_ADMIN）
pub async fn list_schools(
    service: &SchoolService,
    params: SchoolListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let query = SchoolListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        status: params.status,
    };

    let storage = service.get_storage(request);

    match storage.list_schools_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学校列表失败: {e}"),
            )),
        ),
    }
}

/// 获取学校详情
pub async fn get_school(
    service: &SchoolService,
    school_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_by_id(school_id).await {
        Ok(Some(school)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(SchoolResponse { school }, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "学校不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学校失败: {e}"),
            )),
        ),
    }
}

/// 更新学校
pub async fn update_school(
    service: &SchoolService,
    school_id: i64,
    update_data: UpdateSchoolRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_school(school_id, update_data).await {
        Ok(Some(school)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(SchoolResponse { school }, "学校已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "学校不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新学校失败: {e}"),
            )),
        ),
    }
}

/// 删除学校（连带删除其所有数据）
pub async fn delete_school(
    service: &SchoolService,
    school_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_school(school_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("学校已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "学校不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除学校失败: {e}"),
            )),
        ),
    }
}
