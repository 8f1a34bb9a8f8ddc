//! AI 服务边界
//!
//! 所有对大模型的调用都收敛在这里：题目生成与答卷批改只负责
//! 组装 prompt 与解析 JSON 回复，模型本身是外部黑盒。

pub mod answer_checker;
pub mod llm;
pub mod question_generator;

pub use answer_checker::AnswerCheckOutcome;
pub use llm::LlmService;
pub use question_generator::GeneratedQuestion;

/// 剥掉模型回复外层的 markdown 代码围栏
///
/// 模型经常把 JSON 包在 ```json ... ``` 中，解析前先剥掉。
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 去掉 "json" 之类的语言标签行
    let inner = match inner.find('\n') {
        Some(idx) => &inner[idx + 1..],
        None => inner,
    };
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn test_plain_json_untouched() {
        assert_eq!(strip_code_fences(r#"{"a":1}"#), r#"{"a":1}"#);
        assert_eq!(strip_code_fences("  [1,2]  "), "[1,2]");
    }

    #[test]
    fn test_strips_json_fence() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn test_strips_bare_fence() {
        let raw = "```\n[1,2,3]\n```";
        assert_eq!(strip_code_fences(raw), "[1,2,3]");
    }
}
