use serde::{Deserialize, Serialize};

// 答卷状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SheetStatus {
    Uploaded,
    Checking,
    Checked,
    Failed,
}

impl<'de> Deserialize<'de> for SheetStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SheetStatus::Uploaded => "uploaded",
            SheetStatus::Checking => "checking",
            SheetStatus::Checked => "checked",
            SheetStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SheetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploaded" => Ok(SheetStatus::Uploaded),
            "checking" => Ok(SheetStatus::Checking),
            "checked" => Ok(SheetStatus::Checked),
            "failed" => Ok(SheetStatus::Failed),
            _ => Err(format!(
                "无效的答卷状态: '{s}'. 支持: uploaded, checking, checked, failed"
            )),
        }
    }
}

// 答卷实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub id: i64,
    pub school_id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub download_token: String,
    pub status: SheetStatus,
    pub score: Option<f64>,
    // AI 批改反馈（逐题得分与评语）
    pub ai_feedback: Option<SheetFeedback>,
    pub checked_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// AI 批改反馈
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetFeedback {
    pub total_awarded: f64,
    pub remarks: Option<String>,
    pub per_question: Vec<QuestionFeedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionFeedback {
    pub position: i32,
    pub awarded: f64,
    pub max_marks: i32,
    pub remark: Option<String>,
}
