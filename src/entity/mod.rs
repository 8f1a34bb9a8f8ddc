//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod absenteeism;
pub mod answer_sheets;
pub mod classes;
pub mod exams;
pub mod files;
pub mod notifications;
pub mod paper_questions;
pub mod question_papers;
pub mod questions;
pub mod sample_papers;
pub mod schools;
pub mod staff_access;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
