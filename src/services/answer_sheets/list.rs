use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerSheetService;
use crate::models::{
    ApiResponse, ErrorCode,
    answer_sheets::requests::{SheetListParams, SheetListQuery},
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

/// 列出某场考试的全部答卷（教职工）
pub async fn list_sheets(
    service: &AnswerSheetService,
    exam_id: i64,
    params: SheetListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::AnswerSheets).await {
        return Ok(resp);
    }

    let exam = match storage.get_exam_by_id(exam_id).await {
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

    if let Err(resp) = ensure_same_school(&operator, exam.school_id) {
        return Ok(resp);
    }

    let query = SheetListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        exam_id,
    };

    match storage.list_answer_sheets_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询答卷列表失败: {e}"),
            )),
        ),
    }
}
