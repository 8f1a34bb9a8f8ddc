use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::{
        entities::PaperStatus,
        requests::{CreatePaperRequest, NewQuestionPaper},
        responses::QuestionPaperResponse,
    },
    staff_access::AccessModule,
};
use crate::services::guard::{current_user, ensure_staff_access, require_school};
use crate::utils::generate_paper_code;

/// 手动组卷：从题库挑题
pub async fn create_paper(
    service: &QuestionPaperService,
    paper_data: CreatePaperRequest,
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
            "试卷标题不能为空",
        )));
    }
    if paper_data.total_marks <= 0 || paper_data.duration_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "总分与时长必须为正数",
        )));
    }

    // 认知层级分布必须合计 100
    if let Err(msg) = paper_data.blooms_distribution.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BloomsDistributionInvalid,
            msg,
        )));
    }

    if paper_data.questions.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "试卷至少需要一道题",
        )));
    }

    // 题号必须为 1..N 且不重复
    let mut positions: HashSet<i32> = HashSet::new();
    for entry in &paper_data.questions {
        if entry.marks <= 0 {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "题目分值必须为正数",
            )));
        }
        if entry.position < 1 || !positions.insert(entry.position) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "题号必须为不重复的正整数",
            )));
        }
    }
    let count = paper_data.questions.len() as i32;
    if positions.iter().any(|p| *p > count) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题号必须连续（1 到题目数量）",
        )));
    }

    // 各题分值之和必须等于总分
    let marks_sum: i32 = paper_data.questions.iter().map(|e| e.marks).sum();
    if marks_sum != paper_data.total_marks {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaperMarksMismatch,
            format!(
                "各题分值之和 {marks_sum} 与总分 {} 不一致",
                paper_data.total_marks
            ),
        )));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::QuestionPapers).await
    {
        return Ok(resp);
    }

    // 科目与班级必须属于本校
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

    match storage.get_class_by_id(paper_data.class_id).await {
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

    // 所选题目必须都在本校题库中
    let question_ids: Vec<i64> = paper_data.questions.iter().map(|e| e.question_id).collect();
    let questions = match storage.get_questions_by_ids(&question_ids).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    if questions.len() != question_ids.len()
        || questions.iter().any(|q| q.school_id != school_id)
    {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "部分题目不存在或不属于本校",
        )));
    }

    let new_paper = NewQuestionPaper {
        school_id,
        subject_id: paper_data.subject_id,
        class_id: paper_data.class_id,
        exam_id: paper_data.exam_id,
        paper_code: generate_paper_code(),
        title: paper_data.title,
        instructions: paper_data.instructions,
        total_marks: paper_data.total_marks,
        duration_minutes: paper_data.duration_minutes,
        blooms_distribution: paper_data.blooms_distribution,
        status: PaperStatus::Draft,
        created_by: operator.id,
        entries: paper_data
            .questions
            .iter()
            .map(|e| (e.question_id, e.position, e.marks))
            .collect(),
    };

    match storage.create_paper_with_questions(new_paper).await {
        Ok(paper) => {
            let questions = storage
                .get_paper_questions(paper.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                QuestionPaperResponse { paper, questions },
                "试卷创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建试卷失败: {e}"),
            )),
        ),
    }
}
