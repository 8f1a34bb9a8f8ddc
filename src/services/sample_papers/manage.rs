use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SamplePaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    sample_papers::{
        CreateSamplePaperRequest, SamplePaperListParams, SamplePaperListQuery, SamplePaperResponse,
    },
};
use crate::services::guard::{current_user, ensure_same_school, require_school};

/// 登记样卷：文件需先通过 /files/upload 上传
pub async fn create_sample_paper(
    service: &SamplePaperService,
    paper_data: CreateSamplePaperRequest,
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

    if paper_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "样卷标题不能为空",
        )));
    }
    if !(1..=12).contains(&paper_data.grade_level) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "年级必须在 1-12 之间",
        )));
    }

    let storage = service.get_storage(request);

    // 科目必须属于本校
    match storage.get_subject_by_id(paper_data.subject_id).await {
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

    // 文件必须已经上传
    match storage.get_file_by_token(&paper_data.download_token).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "样卷文件不存在，请先上传",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询文件失败: {e}"),
                )),
            );
        }
    }

    match storage
        .create_sample_paper(school_id, operator.id, paper_data)
        .await
    {
        Ok(sample_paper) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SamplePaperResponse { sample_paper },
            "样卷登记成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("登记样卷失败: {e}"),
            )),
        ),
    }
}

/// 列出本校样卷
pub async fn list_sample_papers(
    service: &SamplePaperService,
    params: SamplePaperListParams,
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

    let query = SamplePaperListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        subject_id: params.subject_id,
        grade_level: params.grade_level,
        school_id,
    };

    let storage = service.get_storage(request);

    match storage.list_sample_papers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询样卷列表失败: {e}"),
            )),
        ),
    }
}

/// 获取样卷详情
pub async fn get_sample_paper(
    service: &SamplePaperService,
    paper_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_sample_paper_by_id(paper_id).await {
        Ok(Some(sample_paper)) => {
            if let Err(resp) = ensure_same_school(&operator, sample_paper.school_id) {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SamplePaperResponse { sample_paper },
                "查询成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SamplePaperNotFound,
            "样卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询样卷失败: {e}"),
            )),
        ),
    }
}

/// 删除样卷
pub async fn delete_sample_paper(
    service: &SamplePaperService,
    paper_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_sample_paper_by_id(paper_id).await {
        Ok(Some(sample_paper)) => {
            if let Err(resp) = ensure_same_school(&operator, sample_paper.school_id) {
                return Ok(resp);
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SamplePaperNotFound,
                "样卷不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询样卷失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_sample_paper(paper_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("样卷已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SamplePaperNotFound,
            "样卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除样卷失败: {e}"),
            )),
        ),
    }
}
