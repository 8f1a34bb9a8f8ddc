use serde::{Deserialize, Serialize};

// 考试状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

impl ExamStatus {
    fn rank(self) -> u8 {
        match self {
            ExamStatus::Scheduled => 0,
            ExamStatus::Ongoing => 1,
            ExamStatus::Completed => 2,
            ExamStatus::Cancelled => 3,
        }
    }

    /// 状态只允许前进；取消只能发生在考试结束前
    pub fn can_transition_to(self, next: ExamStatus) -> bool {
        match next {
            ExamStatus::Cancelled => self.rank() < ExamStatus::Completed.rank(),
            _ => self != ExamStatus::Cancelled && next.rank() > self.rank(),
        }
    }
}

impl<'de> Deserialize<'de> for ExamStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExamStatus::Scheduled => "scheduled",
            ExamStatus::Ongoing => "ongoing",
            ExamStatus::Completed => "completed",
            ExamStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ExamStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(ExamStatus::Scheduled),
            "ongoing" => Ok(ExamStatus::Ongoing),
            "completed" => Ok(ExamStatus::Completed),
            "cancelled" => Ok(ExamStatus::Cancelled),
            _ => Err(format!(
                "无效的考试状态: '{s}'. 支持: scheduled, ongoing, completed, cancelled"
            )),
        }
    }
}

// 考试实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub school_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub status: ExamStatus,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only_transitions() {
        assert!(ExamStatus::Scheduled.can_transition_to(ExamStatus::Ongoing));
        assert!(ExamStatus::Ongoing.can_transition_to(ExamStatus::Completed));
        assert!(!ExamStatus::Completed.can_transition_to(ExamStatus::Ongoing));
        assert!(!ExamStatus::Ongoing.can_transition_to(ExamStatus::Ongoing));
    }

    #[test]
    fn test_cancellation_window() {
        assert!(ExamStatus::Scheduled.can_transition_to(ExamStatus::Cancelled));
        assert!(ExamStatus::Ongoing.can_transition_to(ExamStatus::Cancelled));
        assert!(!ExamStatus::Completed.can_transition_to(ExamStatus::Cancelled));
        assert!(!ExamStatus::Cancelled.can_transition_to(ExamStatus::Completed));
    }
}
