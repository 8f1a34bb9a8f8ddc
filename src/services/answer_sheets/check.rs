use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use base64::Engine;
use tracing::{error, warn};

use super::AnswerSheetService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    answer_sheets::{entities::SheetStatus, responses::AnswerSheetResponse},
    staff_access::AccessModule,
};
use crate::services::ai::{self, LlmService};
use crate::services::guard::{current_user, ensure_same_school, ensure_staff_access};

/// 触发 AI 批改：UPLOADED → CHECKING → CHECKED / FAILED
pub async fn check_sheet(
    service: &AnswerSheetService,
    sheet_id: i64,
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

    let sheet = match storage.get_answer_sheet_by_id(sheet_id).await {
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

    if let Err(resp) = ensure_same_school(&operator, sheet.school_id) {
        return Ok(resp);
    }

    // 已批改或正在批改的不重复触发；失败的允许重试
    if !matches!(sheet.status, SheetStatus::Uploaded | SheetStatus::Failed) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!("答卷当前状态为 {}，不能触发批改", sheet.status),
        )));
    }

    // 考试与关联试卷
    let exam = match storage.get_exam_by_id(sheet.exam_id).await {
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

    let paper = match storage.get_paper_by_exam_id(exam.id).await {
        Ok(Some(paper)) => paper,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::QuestionPaperNotFound,
                "该考试没有关联试卷，无法批改",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询试卷失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage.get_paper_questions(paper.id).await {
        Ok(questions) if !questions.is_empty() => questions,
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::QuestionPaperNotFound,
                "试卷没有题目，无法批改",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询试卷题目失败: {e}"),
                )),
            );
        }
    };

    // 答卷文件
    let sheet_file = match storage.get_file_by_token(&sheet.download_token).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "答卷文件不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答卷文件失败: {e}"),
                )),
            );
        }
    };

    // 置为批改中
    if let Err(e) = storage
        .update_sheet_status(sheet.id, SheetStatus::Checking)
        .await
    {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新答卷状态失败: {e}"),
            )),
        );
    }

    // 图片答卷以 data URL 附到批改 prompt；PDF 只按文件名描述
    let image_urls = load_image_data_urls(&sheet_file);

    let llm = LlmService::from_config();
    let outcome = match ai::answer_checker::check_answer_sheet(
        &llm,
        &questions,
        &sheet_file.original_name,
        &image_urls,
        exam.total_marks as f64,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("AI 批改失败 (sheet {}): {}", sheet.id, e);
            let _ = storage
                .update_sheet_status(sheet.id, SheetStatus::Failed)
                .await;
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiCheckFailed,
                format!("AI 批改失败: {e}"),
            )));
        }
    };

    // 写入结果
    if let Err(e) = storage
        .complete_sheet_check(sheet.id, outcome.score, &outcome.feedback)
        .await
    {
        let _ = storage
            .update_sheet_status(sheet.id, SheetStatus::Failed)
            .await;
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入批改结果失败: {e}"),
            )),
        );
    }

    // 通知学生（失败只记日志）
    if let Ok(Some(student)) = storage.get_student_by_id(sheet.student_id).await {
        if let Err(e) = storage
            .create_notification(
                student.user_id,
                "答卷批改完成",
                &format!("《{}》的答卷已批改，得分 {:.1}", exam.title, outcome.score),
            )
            .await
        {
            warn!("发送批改完成通知失败: {}", e);
        }
    }

    match storage.get_answer_sheet_by_id(sheet.id).await {
        Ok(Some(answer_sheet)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnswerSheetResponse { answer_sheet },
            "批改完成",
        ))),
        _ => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("批改完成"))),
    }
}

/// 图片答卷读成 base64 data URL；读不到或非图片返回空列表
fn load_image_data_urls(file: &crate::models::files::File) -> Vec<String> {
    if !file.file_type.starts_with("image/") {
        return Vec::new();
    }

    let config = AppConfig::get();
    let path = format!("{}/{}", config.upload.dir, file.stored_name);
    match std::fs::read(&path) {
        Ok(bytes) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            vec![format!("data:{};base64,{encoded}", file.file_type)]
        }
        Err(e) => {
            warn!("读取答卷文件失败 ({}): {}", path, e);
            Vec::new()
        }
    }
}
