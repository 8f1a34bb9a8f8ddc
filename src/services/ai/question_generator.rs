//! AI 组卷：生成整卷题目
//!
//! 把科目、年级、总分、难度与认知层级分布拼成一条结构化 prompt，
//! 要求模型回复 JSON 数组，解析后交给存储层落库。

use serde::Deserialize;
use tracing::{debug, warn};

use super::{LlmService, strip_code_fences};
use crate::errors::{EduSystemError, Result};
use crate::models::question_papers::requests::GeneratePaperRequest;
use crate::models::questions::entities::{BloomsLevel, Difficulty, QuestionType};
use crate::models::questions::requests::CreateQuestionRequest;

/// 模型回复中的单道题
#[derive(Debug, Deserialize)]
pub struct GeneratedQuestion {
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub marks: i32,
    pub blooms_level: BloomsLevel,
    pub difficulty: Difficulty,
}

const SYSTEM_PROMPT: &str = "你是一名资深命题教师。严格按照要求输出 JSON 数组，\
不要输出任何额外的说明文字。数组中每个元素的字段为：question_text、\
question_type（mcq/short_answer/long_answer）、options（仅选择题，字符串数组）、\
correct_answer、marks（正整数）、blooms_level（remember/understand/apply/\
analyze/evaluate/create）、difficulty（easy/medium/hard）。";

/// 组装生成 prompt
pub fn build_generation_prompt(
    subject_name: &str,
    grade_level: i32,
    request: &GeneratePaperRequest,
) -> String {
    let dist = &request.blooms_distribution;
    let mut prompt = format!(
        "请为 {grade_level} 年级的《{subject_name}》命制一套共 {count} 道题、\
总分 {total} 分的试卷，整体难度为 {difficulty}。\n\
认知层级分布（按分值占比）：记忆 {remember}%、理解 {understand}%、应用 {apply}%、\
分析 {analyze}%、评价 {evaluate}%、创造 {create}%。\n\
各题分值之和必须恰好等于总分。",
        count = request.question_count,
        total = request.total_marks,
        difficulty = request.difficulty,
        remember = dist.remember,
        understand = dist.understand,
        apply = dist.apply,
        analyze = dist.analyze,
        evaluate = dist.evaluate,
        create = dist.create,
    );

    if let Some(ref topics) = request.topics {
        prompt.push_str(&format!("\n命题范围限定在以下主题：{topics}。"));
    }

    prompt.push_str("\n只输出 JSON 数组。");
    prompt
}

/// 解析模型回复为题目列表
pub fn parse_generated_questions(raw: &str) -> Result<Vec<GeneratedQuestion>> {
    let payload = strip_code_fences(raw);
    let questions: Vec<GeneratedQuestion> = serde_json::from_str(payload)
        .map_err(|e| EduSystemError::ai_provider(format!("模型回复不是合法的题目数组: {e}")))?;

    if questions.is_empty() {
        return Err(EduSystemError::ai_provider("模型没有生成任何题目"));
    }

    for (idx, q) in questions.iter().enumerate() {
        if q.question_text.trim().is_empty() {
            return Err(EduSystemError::ai_provider(format!(
                "第 {} 题题干为空",
                idx + 1
            )));
        }
        if q.marks <= 0 {
            return Err(EduSystemError::ai_provider(format!(
                "第 {} 题分值非法: {}",
                idx + 1,
                q.marks
            )));
        }
        if q.question_type == QuestionType::Mcq && q.options.len() < 2 {
            return Err(EduSystemError::ai_provider(format!(
                "第 {} 题为选择题但选项不足",
                idx + 1
            )));
        }
    }

    Ok(questions)
}

/// 调用模型生成整卷题目
pub async fn generate_questions(
    llm: &LlmService,
    subject_name: &str,
    grade_level: i32,
    request: &GeneratePaperRequest,
) -> Result<Vec<GeneratedQuestion>> {
    let prompt = build_generation_prompt(subject_name, grade_level, request);
    debug!("AI 组卷 prompt 长度: {} 字符", prompt.len());

    let raw = llm.send_to_llm(&prompt, Some(SYSTEM_PROMPT), None).await?;

    let questions = parse_generated_questions(&raw).inspect_err(|_| {
        warn!("AI 组卷回复解析失败，原始回复前 200 字符: {:.200}", raw);
    })?;

    debug!("AI 组卷成功，共 {} 道题", questions.len());
    Ok(questions)
}

impl GeneratedQuestion {
    /// 转换为入库请求
    pub fn into_create_request(self, subject_id: i64) -> CreateQuestionRequest {
        CreateQuestionRequest {
            subject_id,
            question_text: self.question_text,
            question_type: self.question_type,
            options: self.options,
            correct_answer: self.correct_answer,
            marks: self.marks,
            blooms_level: self.blooms_level,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question_papers::entities::BloomsDistribution;

    fn sample_request() -> GeneratePaperRequest {
        GeneratePaperRequest {
            subject_id: 1,
            class_id: 1,
            exam_id: None,
            title: "期中测验".to_string(),
            instructions: None,
            total_marks: 100,
            duration_minutes: 90,
            question_count: 10,
            difficulty: Difficulty::Medium,
            blooms_distribution: BloomsDistribution {
                remember: 20,
                understand: 30,
                apply: 30,
                analyze: 10,
                evaluate: 5,
                create: 5,
            },
            topics: Some("二次函数".to_string()),
        }
    }

    #[test]
    fn test_prompt_mentions_distribution_and_topics() {
        let prompt = build_generation_prompt("数学", 9, &sample_request());
        assert!(prompt.contains("数学"));
        assert!(prompt.contains("10 道题"));
        assert!(prompt.contains("记忆 20%"));
        assert!(prompt.contains("二次函数"));
    }

    #[test]
    fn test_parse_valid_reply() {
        let raw = r#"```json
[
  {"question_text": "1+1=?", "question_type": "mcq", "options": ["1", "2"],
   "correct_answer": "2", "marks": 5, "blooms_level": "remember", "difficulty": "easy"}
]
```"#;
        let questions = parse_generated_questions(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].marks, 5);
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        assert!(parse_generated_questions("[]").is_err());
    }

    #[test]
    fn test_parse_rejects_mcq_without_options() {
        let raw = r#"[{"question_text": "x?", "question_type": "mcq", "options": [],
   "correct_answer": null, "marks": 5, "blooms_level": "apply", "difficulty": "easy"}]"#;
        assert!(parse_generated_questions(raw).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_generated_questions("I cannot help with that").is_err());
    }
}
