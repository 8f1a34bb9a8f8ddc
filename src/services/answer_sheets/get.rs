use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerSheetService;
use crate::models::{
    ApiResponse, ErrorCode,
    answer_sheets::responses::AnswerSheetResponse,
    users::entities::UserRole,
};
use crate::services::guard::{current_user, ensure_same_school};

/// 获取答卷详情：学生查看本人的，教职工查看本校的
pub async fn get_sheet(
    service: &AnswerSheetService,
    sheet_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let answer_sheet = match storage.get_answer_sheet_by_id(sheet_id).await {
        Ok(Some(sheet)) => sheet,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AnswerSheetNotFound,
                "答卷不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答卷失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = ensure_same_school(&operator, answer_sheet.school_id) {
        return Ok(resp);
    }

    // 学生只能查看自己的答卷
    if operator.role == UserRole::Student {
        let owns_sheet = match storage.get_student_by_user_id(operator.id).await {
            Ok(Some(student)) => student.id == answer_sheet.student_id,
            Ok(None) => false,
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生档案失败: {e}"),
                )));
            }
        };
        if !owns_sheet {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己的答卷",
            )));
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AnswerSheetResponse { answer_sheet },
        "查询成功",
    )))
}
