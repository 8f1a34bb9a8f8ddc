//! AI 批改：答卷逐题评分
//!
//! 把试卷题目与学生上传的答卷（图片走 Vision 通道，PDF 仅按文件名
//! 说明）交给模型，要求回复逐题得分的 JSON，总分在落库前钳制到
//! [0, 考试总分]。

use serde::Deserialize;
use tracing::{debug, warn};

use super::{LlmService, strip_code_fences};
use crate::errors::{EduSystemError, Result};
use crate::models::answer_sheets::entities::{QuestionFeedback, SheetFeedback};
use crate::models::question_papers::entities::PaperQuestion;

/// 模型回复中的逐题判定
#[derive(Debug, Deserialize)]
struct RawVerdict {
    position: i32,
    awarded: f64,
    #[serde(default)]
    remark: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCheckReply {
    #[serde(default)]
    remarks: Option<String>,
    per_question: Vec<RawVerdict>,
}

/// 批改结果
#[derive(Debug)]
pub struct AnswerCheckOutcome {
    pub score: f64,
    pub feedback: SheetFeedback,
}

const SYSTEM_PROMPT: &str = "你是一名严谨的阅卷教师。根据试卷题目与学生作答评分，\
输出 JSON 对象：{\"remarks\": 总评, \"per_question\": [{\"position\": 题号, \
\"awarded\": 得分, \"remark\": 评语}]}。每题得分不得超过该题分值，不要输出 JSON \
以外的内容。";

/// 组装批改 prompt
pub fn build_check_prompt(questions: &[PaperQuestion], sheet_file_name: &str) -> String {
    let mut prompt = String::from("试卷题目如下：\n");

    for pq in questions {
        prompt.push_str(&format!(
            "{}. ({} 分) {}\n",
            pq.position, pq.marks, pq.question.question_text
        ));
        for (idx, option) in pq.question.options.iter().enumerate() {
            let label = (b'A' + idx as u8) as char;
            prompt.push_str(&format!("   {label}. {option}\n"));
        }
        if let Some(ref answer) = pq.question.correct_answer {
            prompt.push_str(&format!("   参考答案: {answer}\n"));
        }
    }

    prompt.push_str(&format!(
        "\n学生答卷文件: {sheet_file_name}（附件中）。请逐题评分。"
    ));
    prompt
}

/// 解析批改回复，并把总分钳制在 [0, max_total]
pub fn parse_check_reply(
    raw: &str,
    questions: &[PaperQuestion],
    max_total: f64,
) -> Result<AnswerCheckOutcome> {
    let payload = strip_code_fences(raw);
    let reply: RawCheckReply = serde_json::from_str(payload)
        .map_err(|e| EduSystemError::ai_provider(format!("模型回复不是合法的批改结果: {e}")))?;

    if reply.per_question.is_empty() {
        return Err(EduSystemError::ai_provider("批改结果为空"));
    }

    let mut per_question = Vec::with_capacity(reply.per_question.len());
    for verdict in reply.per_question {
        let Some(pq) = questions.iter().find(|q| q.position == verdict.position) else {
            return Err(EduSystemError::ai_provider(format!(
                "批改结果包含不存在的题号: {}",
                verdict.position
            )));
        };

        // 单题得分钳制到 [0, 该题分值]
        let awarded = verdict.awarded.clamp(0.0, pq.marks as f64);
        per_question.push(QuestionFeedback {
            position: verdict.position,
            awarded,
            max_marks: pq.marks,
            remark: verdict.remark,
        });
    }

    let total: f64 = per_question.iter().map(|q| q.awarded).sum();
    let score = total.clamp(0.0, max_total);

    Ok(AnswerCheckOutcome {
        score,
        feedback: SheetFeedback {
            total_awarded: score,
            remarks: reply.remarks,
            per_question,
        },
    })
}

/// 调用模型批改答卷
///
/// `image_data_urls` 为空时按纯文本批改（例如 PDF 答卷只能靠参考
/// 答案与文件描述）。
pub async fn check_answer_sheet(
    llm: &LlmService,
    questions: &[PaperQuestion],
    sheet_file_name: &str,
    image_data_urls: &[String],
    max_total: f64,
) -> Result<AnswerCheckOutcome> {
    let prompt = build_check_prompt(questions, sheet_file_name);
    debug!(
        "AI 批改 prompt 长度: {} 字符，附图 {} 张",
        prompt.len(),
        image_data_urls.len()
    );

    let imgs = (!image_data_urls.is_empty()).then_some(image_data_urls);
    let raw = llm.send_to_llm(&prompt, Some(SYSTEM_PROMPT), imgs).await?;

    parse_check_reply(&raw, questions, max_total).inspect_err(|_| {
        warn!("AI 批改回复解析失败，原始回复前 200 字符: {:.200}", raw);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questions::entities::{BloomsLevel, Difficulty, Question, QuestionType};

    fn paper_question(position: i32, marks: i32) -> PaperQuestion {
        PaperQuestion {
            position,
            marks,
            question: Question {
                id: position as i64,
                school_id: 1,
                subject_id: 1,
                question_text: format!("question {position}"),
                question_type: QuestionType::ShortAnswer,
                options: vec![],
                correct_answer: Some("42".to_string()),
                marks,
                blooms_level: BloomsLevel::Apply,
                difficulty: Difficulty::Medium,
                ai_generated: false,
                created_by: 1,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
        }
    }

    #[test]
    fn test_parse_and_sum() {
        let questions = vec![paper_question(1, 10), paper_question(2, 5)];
        let raw = r#"{"remarks": "不错", "per_question": [
            {"position": 1, "awarded": 8.0, "remark": "部分正确"},
            {"position": 2, "awarded": 5.0}
        ]}"#;
        let outcome = parse_check_reply(raw, &questions, 15.0).unwrap();
        assert_eq!(outcome.score, 13.0);
        assert_eq!(outcome.feedback.per_question.len(), 2);
    }

    #[test]
    fn test_per_question_clamp() {
        let questions = vec![paper_question(1, 10)];
        let raw = r#"{"per_question": [{"position": 1, "awarded": 99.0}]}"#;
        let outcome = parse_check_reply(raw, &questions, 10.0).unwrap();
        assert_eq!(outcome.score, 10.0);
        assert_eq!(outcome.feedback.per_question[0].awarded, 10.0);
    }

    #[test]
    fn test_negative_award_clamped_to_zero() {
        let questions = vec![paper_question(1, 10)];
        let raw = r#"{"per_question": [{"position": 1, "awarded": -3.0}]}"#;
        let outcome = parse_check_reply(raw, &questions, 10.0).unwrap();
        assert_eq!(outcome.score, 0.0);
    }

    #[test]
    fn test_unknown_position_rejected() {
        let questions = vec![paper_question(1, 10)];
        let raw = r#"{"per_question": [{"position": 7, "awarded": 5.0}]}"#;
        assert!(parse_check_reply(raw, &questions, 10.0).is_err());
    }

    #[test]
    fn test_prompt_lists_questions_and_options() {
        let mut pq = paper_question(1, 10);
        pq.question.question_type = QuestionType::Mcq;
        pq.question.options = vec!["one".to_string(), "two".to_string()];
        let prompt = build_check_prompt(&[pq], "sheet.jpg");
        assert!(prompt.contains("1. (10 分)"));
        assert!(prompt.contains("A. one"));
        assert!(prompt.contains("B. two"));
        assert!(prompt.contains("sheet.jpg"));
    }
}
