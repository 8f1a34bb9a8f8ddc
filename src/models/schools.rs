use serde::{Deserialize, Serialize};

use crate::models::common::pagination::{PaginatedResponse, PaginationQuery};

// 学校状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SchoolStatus {
    Active,
    Suspended,
}

impl<'de> Deserialize<'de> for SchoolStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(SchoolStatus::Active),
            "suspended" => Ok(SchoolStatus::Suspended),
            _ => Err(serde::de::Error::custom(format!(
                "无效的学校状态: '{s}'. 支持的状态: active, suspended"
            ))),
        }
    }
}

impl std::fmt::Display for SchoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchoolStatus::Active => write!(f, "active"),
            SchoolStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for SchoolStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SchoolStatus::Active),
            "suspended" => Ok(SchoolStatus::Suspended),
            _ => Err(format!("Invalid school status: {s}")),
        }
    }
}

// 学校（租户）实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub status: SchoolStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 创建学校请求
#[derive(Debug, Deserialize)]
pub struct CreateSchoolRequest {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
}

/// 更新学校请求
#[derive(Debug, Deserialize)]
pub struct UpdateSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub status: Option<SchoolStatus>,
}

/// 学校列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<SchoolStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SchoolListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub status: Option<SchoolStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SchoolResponse {
    pub school: School,
}

pub type SchoolListResponse = PaginatedResponse<School>;
