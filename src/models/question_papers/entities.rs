use serde::{Deserialize, Serialize};

use crate::models::questions::entities::{BloomsLevel, Question};

// 试卷状态（生命周期只允许前进）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    Draft,
    Generated,
    Published,
    Archived,
}

impl PaperStatus {
    fn rank(self) -> u8 {
        match self {
            PaperStatus::Draft => 0,
            PaperStatus::Generated => 1,
            PaperStatus::Published => 2,
            PaperStatus::Archived => 3,
        }
    }

    /// DRAFT → GENERATED → PUBLISHED → ARCHIVED，单次只能前进
    pub fn can_transition_to(self, next: PaperStatus) -> bool {
        next.rank() > self.rank()
    }
}

impl<'de> Deserialize<'de> for PaperStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaperStatus::Draft => "draft",
            PaperStatus::Generated => "generated",
            PaperStatus::Published => "published",
            PaperStatus::Archived => "archived",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PaperStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PaperStatus::Draft),
            "generated" => Ok(PaperStatus::Generated),
            "published" => Ok(PaperStatus::Published),
            "archived" => Ok(PaperStatus::Archived),
            _ => Err(format!(
                "无效的试卷状态: '{s}'. 支持: draft, generated, published, archived"
            )),
        }
    }
}

// 布鲁姆认知层级分布（百分比，总和必须为 100）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloomsDistribution {
    pub remember: i32,
    pub understand: i32,
    pub apply: i32,
    pub analyze: i32,
    pub evaluate: i32,
    pub create: i32,
}

impl BloomsDistribution {
    pub fn total(&self) -> i32 {
        self.remember + self.understand + self.apply + self.analyze + self.evaluate + self.create
    }

    /// 各层级百分比非负且总和为 100
    pub fn validate(&self) -> Result<(), String> {
        let parts = [
            self.remember,
            self.understand,
            self.apply,
            self.analyze,
            self.evaluate,
            self.create,
        ];
        if parts.iter().any(|p| *p < 0) {
            return Err("认知层级百分比不能为负数".to_string());
        }
        if self.total() != 100 {
            return Err(format!(
                "认知层级百分比总和必须为 100，当前为 {}",
                self.total()
            ));
        }
        Ok(())
    }

    pub fn percent_for(&self, level: BloomsLevel) -> i32 {
        match level {
            BloomsLevel::Remember => self.remember,
            BloomsLevel::Understand => self.understand,
            BloomsLevel::Apply => self.apply,
            BloomsLevel::Analyze => self.analyze,
            BloomsLevel::Evaluate => self.evaluate,
            BloomsLevel::Create => self.create,
        }
    }
}

// 试卷实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPaper {
    pub id: i64,
    pub school_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub exam_id: Option<i64>,
    // 对外展示的试卷编号，如 "QP-7F3K2A"
    pub paper_code: String,
    pub title: String,
    pub instructions: Option<String>,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub blooms_distribution: BloomsDistribution,
    pub status: PaperStatus,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 试卷内的一道题（含题号与该卷内分值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperQuestion {
    pub position: i32,
    pub marks: i32,
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(parts: [i32; 6]) -> BloomsDistribution {
        BloomsDistribution {
            remember: parts[0],
            understand: parts[1],
            apply: parts[2],
            analyze: parts[3],
            evaluate: parts[4],
            create: parts[5],
        }
    }

    #[test]
    fn test_blooms_sum_must_be_100() {
        assert!(dist([20, 20, 20, 20, 10, 10]).validate().is_ok());
        assert!(dist([100, 0, 0, 0, 0, 0]).validate().is_ok());
        assert!(dist([20, 20, 20, 20, 10, 11]).validate().is_err());
        assert!(dist([0, 0, 0, 0, 0, 0]).validate().is_err());
    }

    #[test]
    fn test_blooms_rejects_negative() {
        assert!(dist([110, -10, 0, 0, 0, 0]).validate().is_err());
    }

    #[test]
    fn test_paper_status_forward_only() {
        assert!(PaperStatus::Draft.can_transition_to(PaperStatus::Generated));
        assert!(PaperStatus::Draft.can_transition_to(PaperStatus::Published));
        assert!(PaperStatus::Generated.can_transition_to(PaperStatus::Archived));
        assert!(!PaperStatus::Published.can_transition_to(PaperStatus::Draft));
        assert!(!PaperStatus::Archived.can_transition_to(PaperStatus::Published));
        assert!(!PaperStatus::Draft.can_transition_to(PaperStatus::Draft));
    }
}
