use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuestionPaperService;
use crate::models::{
    ApiResponse, ErrorCode,
    question_papers::{
        entities::PaperStatus,
        requests::{GeneratePaperRequest, NewQuestionPaper},
        responses::QuestionPaperResponse,
    },
    staff_access::AccessModule,
};
use crate::services::ai::{self, LlmService};
use crate::services::guard::{current_user, ensure_staff_access, require_school};
use crate::utils::generate_paper_code;

/// AI 组卷：调用模型生成整卷题目并落库
pub async fn generate_paper(
    service: &QuestionPaperService,
    generate_data: GeneratePaperRequest,
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

    if generate_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "试卷标题不能为空",
        )));
    }
    if generate_data.total_marks <= 0 || generate_data.duration_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "总分与时长必须为正数",
        )));
    }
    if !(1..=50).contains(&generate_data.question_count) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目数量必须在 1-50 之间",
        )));
    }

    // 认知层级分布必须合计 100
    if let Err(msg) = generate_data.blooms_distribution.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BloomsDistributionInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = ensure_staff_access(&storage, &operator, AccessModule::QuestionPapers).await
    {
        return Ok(resp);
    }

    // 科目与班级必须属于本校
    let subject = match storage.get_subject_by_id(generate_data.subject_id).await {
        Ok(Some(subject)) if subject.school_id == school_id => subject,
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
    };

    let class = match storage.get_class_by_id(generate_data.class_id).await {
        Ok(Some(class)) if class.school_id == school_id => class,
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
    };

    // 调用模型；失败不落任何数据
    let llm = LlmService::from_config();
    let generated = match ai::question_generator::generate_questions(
        &llm,
        &subject.name,
        class.grade_level,
        &generate_data,
    )
    .await
    {
        Ok(generated) => generated,
        Err(e) => {
            error!("AI 组卷失败: {}", e);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiGenerationFailed,
                format!("AI 组卷失败: {e}"),
            )));
        }
    };

    // 模型必须把分值配平到总分
    let marks_sum: i32 = generated.iter().map(|q| q.marks).sum();
    if marks_sum != generate_data.total_marks {
        error!(
            "AI 组卷分值不配平: 生成 {} 分，要求 {} 分",
            marks_sum, generate_data.total_marks
        );
        return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
            ErrorCode::AiGenerationFailed,
            format!(
                "模型生成的分值之和 {marks_sum} 与总分 {} 不一致",
                generate_data.total_marks
            ),
        )));
    }

    // 题目落库（标记 AI 生成）
    let marks: Vec<i32> = generated.iter().map(|q| q.marks).collect();
    let create_requests = generated
        .into_iter()
        .map(|q| q.into_create_request(generate_data.subject_id))
        .collect();

    let questions = match storage
        .create_questions(school_id, operator.id, true, create_requests)
        .await
    {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存生成题目失败: {e}"),
                )),
            );
        }
    };

    let entries = questions
        .iter()
        .zip(marks.iter())
        .enumerate()
        .map(|(idx, (question, marks))| (question.id, idx as i32 + 1, *marks))
        .collect();

    let new_paper = NewQuestionPaper {
        school_id,
        subject_id: generate_data.subject_id,
        class_id: generate_data.class_id,
        exam_id: generate_data.exam_id,
        paper_code: generate_paper_code(),
        title: generate_data.title,
        instructions: generate_data.instructions,
        total_marks: generate_data.total_marks,
        duration_minutes: generate_data.duration_minutes,
        blooms_distribution: generate_data.blooms_distribution,
        status: PaperStatus::Generated,
        created_by: operator.id,
        entries,
    };

    match storage.create_paper_with_questions(new_paper).await {
        Ok(paper) => {
            info!(
                "AI 组卷成功: paper {} ({} 道题)",
                paper.paper_code,
                questions.len()
            );
            let questions = storage
                .get_paper_questions(paper.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                QuestionPaperResponse { paper, questions },
                "AI 组卷成功",
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
