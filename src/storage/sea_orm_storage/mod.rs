//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod absenteeism;
mod answer_sheets;
mod classes;
mod exams;
mod files;
mod notifications;
mod question_papers;
mod questions;
mod sample_papers;
mod schools;
mod staff_access;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{EduSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    absenteeism::{AbsenteeismListQuery, AbsenteeismListResponse, AbsenteeismRecord,
        RecordAbsenceRequest},
    answer_sheets::{
        entities::{AnswerSheet, SheetFeedback, SheetStatus},
        requests::SheetListQuery,
        responses::SheetListResponse,
    },
    classes::{Class, ClassListQuery, ClassListResponse, CreateClassRequest, UpdateClassRequest},
    exams::{
        entities::{Exam, ExamStatus},
        requests::{CreateExamRequest, ExamListQuery, UpdateExamRequest},
        responses::ExamListResponse,
    },
    files::File,
    notifications::{Notification, NotificationListQuery, NotificationListResponse},
    question_papers::{
        entities::{PaperQuestion, PaperStatus, QuestionPaper},
        requests::{NewQuestionPaper, PaperListQuery},
        responses::PaperListResponse,
    },
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::QuestionListResponse,
    },
    sample_papers::{
        CreateSamplePaperRequest, SamplePaper, SamplePaperListQuery, SamplePaperListResponse,
    },
    schools::{
        CreateSchoolRequest, School, SchoolListQuery, SchoolListResponse, UpdateSchoolRequest,
    },
    staff_access::{AccessModule, StaffAccessGrant},
    students::{
        entities::Student,
        requests::{CreateStudentProfile, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        CreateSubjectRequest, Subject, SubjectListQuery, SubjectListResponse, UpdateSubjectRequest,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherProfile, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学校模块
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School> {
        self.create_school_impl(school).await
    }

    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>> {
        self.get_school_by_id_impl(id).await
    }

    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse> {
        self.list_schools_with_pagination_impl(query).await
    }

    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>> {
        self.update_school_impl(id, update).await
    }

    async fn delete_school(&self, id: i64) -> Result<bool> {
        self.delete_school_impl(id).await
    }

    // 教师模块
    async fn create_teacher_profile(&self, profile: CreateTeacherProfile) -> Result<Teacher> {
        self.create_teacher_profile_impl(profile).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    // 学生模块
    async fn create_student_profile(&self, profile: CreateStudentProfile) -> Result<Student> {
        self.create_student_profile_impl(profile).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn list_student_user_ids_by_class(&self, class_id: i64) -> Result<Vec<i64>> {
        self.list_student_user_ids_by_class_impl(class_id).await
    }

    // 班级模块
    async fn create_class(&self, school_id: i64, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(school_id, class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 科目模块
    async fn create_subject(
        &self,
        school_id: i64,
        subject: CreateSubjectRequest,
    ) -> Result<Subject> {
        self.create_subject_impl(school_id, subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 考试模块
    async fn create_exam(
        &self,
        school_id: i64,
        created_by: i64,
        exam: CreateExamRequest,
    ) -> Result<Exam> {
        self.create_exam_impl(school_id, created_by, exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams_with_pagination(&self, query: ExamListQuery) -> Result<ExamListResponse> {
        self.list_exams_with_pagination_impl(query).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn update_exam_status(&self, id: i64, status: ExamStatus) -> Result<bool> {
        self.update_exam_status_impl(id, status).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 题库模块
    async fn create_question(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        question: CreateQuestionRequest,
    ) -> Result<Question> {
        self.create_question_impl(school_id, created_by, ai_generated, question)
            .await
    }

    async fn create_questions(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<Question>> {
        self.create_questions_impl(school_id, created_by, ai_generated, questions)
            .await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn get_questions_by_ids(&self, ids: &[i64]) -> Result<Vec<Question>> {
        self.get_questions_by_ids_impl(ids).await
    }

    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        self.list_questions_with_pagination_impl(query).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 试卷模块
    async fn create_paper_with_questions(&self, paper: NewQuestionPaper) -> Result<QuestionPaper> {
        self.create_paper_with_questions_impl(paper).await
    }

    async fn get_paper_by_id(&self, id: i64) -> Result<Option<QuestionPaper>> {
        self.get_paper_by_id_impl(id).await
    }

    async fn get_paper_by_exam_id(&self, exam_id: i64) -> Result<Option<QuestionPaper>> {
        self.get_paper_by_exam_id_impl(exam_id).await
    }

    async fn get_paper_questions(&self, paper_id: i64) -> Result<Vec<PaperQuestion>> {
        self.get_paper_questions_impl(paper_id).await
    }

    async fn list_papers_with_pagination(
        &self,
        query: PaperListQuery,
    ) -> Result<PaperListResponse> {
        self.list_papers_with_pagination_impl(query).await
    }

    async fn update_paper_status(&self, id: i64, status: PaperStatus) -> Result<bool> {
        self.update_paper_status_impl(id, status).await
    }

    async fn delete_paper(&self, id: i64) -> Result<bool> {
        self.delete_paper_impl(id).await
    }

    // 答卷模块
    async fn create_answer_sheet(
        &self,
        school_id: i64,
        exam_id: i64,
        student_id: i64,
        download_token: &str,
    ) -> Result<AnswerSheet> {
        self.create_answer_sheet_impl(school_id, exam_id, student_id, download_token)
            .await
    }

    async fn get_answer_sheet_by_id(&self, id: i64) -> Result<Option<AnswerSheet>> {
        self.get_answer_sheet_by_id_impl(id).await
    }

    async fn get_answer_sheet_by_exam_and_student(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<AnswerSheet>> {
        self.get_answer_sheet_by_exam_and_student_impl(exam_id, student_id)
            .await
    }

    async fn list_answer_sheets_with_pagination(
        &self,
        query: SheetListQuery,
    ) -> Result<SheetListResponse> {
        self.list_answer_sheets_with_pagination_impl(query).await
    }

    async fn update_sheet_status(&self, id: i64, status: SheetStatus) -> Result<bool> {
        self.update_sheet_status_impl(id, status).await
    }

    async fn complete_sheet_check(
        &self,
        id: i64,
        score: f64,
        feedback: &SheetFeedback,
    ) -> Result<bool> {
        self.complete_sheet_check_impl(id, score, feedback).await
    }

    // 权限模块
    async fn grant_staff_access(
        &self,
        school_id: i64,
        user_id: i64,
        module: AccessModule,
        granted_by: i64,
    ) -> Result<StaffAccessGrant> {
        self.grant_staff_access_impl(school_id, user_id, module, granted_by)
            .await
    }

    async fn revoke_staff_access(&self, user_id: i64, module: AccessModule) -> Result<bool> {
        self.revoke_staff_access_impl(user_id, module).await
    }

    async fn list_staff_access(&self, user_id: i64) -> Result<Vec<StaffAccessGrant>> {
        self.list_staff_access_impl(user_id).await
    }

    async fn has_staff_access(&self, user_id: i64, module: AccessModule) -> Result<bool> {
        self.has_staff_access_impl(user_id, module).await
    }

    // 缺勤模块
    async fn record_absence(
        &self,
        school_id: i64,
        class_id: i64,
        recorded_by: i64,
        record: RecordAbsenceRequest,
    ) -> Result<AbsenteeismRecord> {
        self.record_absence_impl(school_id, class_id, recorded_by, record)
            .await
    }

    async fn get_absence_by_id(&self, id: i64) -> Result<Option<AbsenteeismRecord>> {
        self.get_absence_by_id_impl(id).await
    }

    async fn list_absences_with_pagination(
        &self,
        query: AbsenteeismListQuery,
    ) -> Result<AbsenteeismListResponse> {
        self.list_absences_with_pagination_impl(query).await
    }

    async fn delete_absence(&self, id: i64) -> Result<bool> {
        self.delete_absence_impl(id).await
    }

    // 样卷模块
    async fn create_sample_paper(
        &self,
        school_id: i64,
        uploaded_by: i64,
        paper: CreateSamplePaperRequest,
    ) -> Result<SamplePaper> {
        self.create_sample_paper_impl(school_id, uploaded_by, paper)
            .await
    }

    async fn get_sample_paper_by_id(&self, id: i64) -> Result<Option<SamplePaper>> {
        self.get_sample_paper_by_id_impl(id).await
    }

    async fn list_sample_papers_with_pagination(
        &self,
        query: SamplePaperListQuery,
    ) -> Result<SamplePaperListResponse> {
        self.list_sample_papers_with_pagination_impl(query).await
    }

    async fn delete_sample_paper(&self, id: i64) -> Result<bool> {
        self.delete_sample_paper_impl(id).await
    }

    // 通知模块
    async fn create_notification(
        &self,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Notification> {
        self.create_notification_impl(user_id, title, content).await
    }

    async fn create_notifications(
        &self,
        user_ids: &[i64],
        title: &str,
        content: &str,
    ) -> Result<u64> {
        self.create_notifications_impl(user_ids, title, content)
            .await
    }

    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(query).await
    }

    async fn get_unread_notification_count(&self, user_id: i64) -> Result<u64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id, user_id).await
    }

    // 文件模块
    async fn create_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploaded_by: i64,
    ) -> Result<File> {
        self.create_file_impl(original_name, stored_name, file_size, file_type, uploaded_by)
            .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }
}
