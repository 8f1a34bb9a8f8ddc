use serde::{Deserialize, Serialize};

// 题型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    ShortAnswer,
    LongAnswer,
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::Mcq => "mcq",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::LongAnswer => "long_answer",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcq" => Ok(QuestionType::Mcq),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "long_answer" => Ok(QuestionType::LongAnswer),
            _ => Err(format!(
                "无效的题型: '{s}'. 支持: mcq, short_answer, long_answer"
            )),
        }
    }
}

// 布鲁姆认知层级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BloomsLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomsLevel {
    pub const ALL: [BloomsLevel; 6] = [
        BloomsLevel::Remember,
        BloomsLevel::Understand,
        BloomsLevel::Apply,
        BloomsLevel::Analyze,
        BloomsLevel::Evaluate,
        BloomsLevel::Create,
    ];
}

impl<'de> Deserialize<'de> for BloomsLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for BloomsLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BloomsLevel::Remember => "remember",
            BloomsLevel::Understand => "understand",
            BloomsLevel::Apply => "apply",
            BloomsLevel::Analyze => "analyze",
            BloomsLevel::Evaluate => "evaluate",
            BloomsLevel::Create => "create",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BloomsLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remember" => Ok(BloomsLevel::Remember),
            "understand" => Ok(BloomsLevel::Understand),
            "apply" => Ok(BloomsLevel::Apply),
            "analyze" => Ok(BloomsLevel::Analyze),
            "evaluate" => Ok(BloomsLevel::Evaluate),
            "create" => Ok(BloomsLevel::Create),
            _ => Err(format!(
                "无效的认知层级: '{s}'. 支持: remember, understand, apply, analyze, evaluate, create"
            )),
        }
    }
}

// 难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("无效的难度: '{s}'. 支持: easy, medium, hard")),
        }
    }
}

// 题目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    // 选择题选项，其他题型为空
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub marks: i32,
    pub blooms_level: BloomsLevel,
    pub difficulty: Difficulty,
    pub ai_generated: bool,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_blooms_parse_is_case_insensitive() {
        assert_eq!(
            BloomsLevel::from_str("REMEMBER").unwrap(),
            BloomsLevel::Remember
        );
        assert_eq!(BloomsLevel::from_str("Create").unwrap(), BloomsLevel::Create);
        assert!(BloomsLevel::from_str("memorize").is_err());
    }

    #[test]
    fn test_question_type_roundtrip() {
        for s in ["mcq", "short_answer", "long_answer"] {
            assert_eq!(QuestionType::from_str(s).unwrap().to_string(), s);
        }
    }
}
