use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FileService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 按下载令牌取回文件
pub async fn handle_download(
    service: &FileService,
    token: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let file = match storage.get_file_by_token(&token).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件不存在",
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
    };

    let config = AppConfig::get();
    let path = format!("{}/{}", config.upload.dir, file.stored_name);

    match std::fs::read(&path) {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(if file.file_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                file.file_type.clone()
            })
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", file.original_name),
            ))
            .body(bytes)),
        Err(e) => {
            error!("读取文件失败 ({}): {}", path, e);
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件已丢失",
            )))
        }
    }
}
