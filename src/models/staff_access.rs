use serde::{Deserialize, Serialize};

// 可授权给教师的后台模块
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessModule {
    Exams,
    Questions,
    QuestionPapers,
    AnswerSheets,
    Absenteeism,
}

impl<'de> Deserialize<'de> for AccessModule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AccessModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccessModule::Exams => "exams",
            AccessModule::Questions => "questions",
            AccessModule::QuestionPapers => "question_papers",
            AccessModule::AnswerSheets => "answer_sheets",
            AccessModule::Absenteeism => "absenteeism",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AccessModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exams" => Ok(AccessModule::Exams),
            "questions" => Ok(AccessModule::Questions),
            "question_papers" => Ok(AccessModule::QuestionPapers),
            "answer_sheets" => Ok(AccessModule::AnswerSheets),
            "absenteeism" => Ok(AccessModule::Absenteeism),
            _ => Err(format!(
                "无效的模块: '{s}'. 支持: exams, questions, question_papers, answer_sheets, absenteeism"
            )),
        }
    }
}

// 教职工模块授权实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAccessGrant {
    pub id: i64,
    pub school_id: i64,
    pub user_id: i64,
    pub module: AccessModule,
    pub granted_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 授权请求
#[derive(Debug, Deserialize)]
pub struct GrantAccessRequest {
    pub user_id: i64,
    pub module: AccessModule,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StaffAccessListResponse {
    pub grants: Vec<StaffAccessGrant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_module_roundtrip() {
        for s in [
            "exams",
            "questions",
            "question_papers",
            "answer_sheets",
            "absenteeism",
        ] {
            assert_eq!(AccessModule::from_str(s).unwrap().to_string(), s);
        }
        assert!(AccessModule::from_str("grades").is_err());
    }
}
