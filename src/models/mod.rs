pub mod common;

pub mod absenteeism;
pub mod answer_sheets;
pub mod auth;
pub mod classes;
pub mod exams;
pub mod files;
pub mod notifications;
pub mod question_papers;
pub mod questions;
pub mod sample_papers;
pub mod schools;
pub mod staff_access;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// 按 HTTP 状态分段：40xxx 客户端错误，50xxx 服务端错误，
/// 其中 502xx 预留给 AI 服务边界。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 400 参数与校验
    BadRequest = 40000,
    ValidationFailed = 40001,
    BloomsDistributionInvalid = 40002,
    FileTypeNotAllowed = 40003,
    FileSizeExceeded = 40004,
    MultifileUploadNotAllowed = 40005,
    InvalidStatusTransition = 40006,
    QuestionOptionsInvalid = 40007,
    PaperMarksMismatch = 40008,

    // 401 / 403
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    SchoolPermissionDenied = 40301,
    StaffAccessDenied = 40302,

    // 404
    NotFound = 40400,
    UserNotFound = 40401,
    SchoolNotFound = 40402,
    TeacherNotFound = 40403,
    StudentNotFound = 40404,
    ClassNotFound = 40405,
    SubjectNotFound = 40406,
    ExamNotFound = 40407,
    QuestionNotFound = 40408,
    QuestionPaperNotFound = 40409,
    AnswerSheetNotFound = 40410,
    SamplePaperNotFound = 40411,
    NotificationNotFound = 40412,
    FileNotFound = 40413,
    StaffAccessNotFound = 40414,

    // 409
    Conflict = 40900,
    UserAlreadyExists = 40901,
    SchoolAlreadyExists = 40902,
    AnswerSheetAlreadyExists = 40903,
    AbsenteeismAlreadyRecorded = 40904,
    StaffAccessAlreadyGranted = 40905,

    // 429
    RateLimitExceeded = 42900,

    // 5xx
    InternalServerError = 50000,
    FileUploadFailed = 50001,
    PdfRenderFailed = 50002,
    AiGenerationFailed = 50201,
    AiCheckFailed = 50202,
}

/// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
