use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学校（租户）管理方法
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School>;
    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>>;
    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse>;
    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>>;
    async fn delete_school(&self, id: i64) -> Result<bool>;

    /// 教师档案管理方法
    async fn create_teacher_profile(&self, profile: CreateTeacherProfile) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;

    /// 学生档案管理方法
    async fn create_student_profile(&self, profile: CreateStudentProfile) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 列出班级所有学生的用户 ID（用于发送通知）
    async fn list_student_user_ids_by_class(&self, class_id: i64) -> Result<Vec<i64>>;

    /// 班级管理方法
    async fn create_class(&self, school_id: i64, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(&self, query: ClassListQuery)
    -> Result<ClassListResponse>;
    async fn update_class(&self, class_id: i64, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, school_id: i64, subject: CreateSubjectRequest)
    -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 考试管理方法
    async fn create_exam(
        &self,
        school_id: i64,
        created_by: i64,
        exam: CreateExamRequest,
    ) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams_with_pagination(&self, query: ExamListQuery) -> Result<ExamListResponse>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn update_exam_status(&self, id: i64, status: ExamStatus) -> Result<bool>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 题库管理方法
    async fn create_question(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        question: CreateQuestionRequest,
    ) -> Result<Question>;
    // 批量入库（AI 生成的整卷题目）
    async fn create_questions(
        &self,
        school_id: i64,
        created_by: i64,
        ai_generated: bool,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<Question>>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn get_questions_by_ids(&self, ids: &[i64]) -> Result<Vec<Question>>;
    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 试卷管理方法
    // 创建试卷及其题目关联（事务）
    async fn create_paper_with_questions(&self, paper: NewQuestionPaper) -> Result<QuestionPaper>;
    async fn get_paper_by_id(&self, id: i64) -> Result<Option<QuestionPaper>>;
    // 查找某场考试关联的试卷
    async fn get_paper_by_exam_id(&self, exam_id: i64) -> Result<Option<QuestionPaper>>;
    // 按题号顺序取出试卷题目
    async fn get_paper_questions(&self, paper_id: i64) -> Result<Vec<PaperQuestion>>;
    async fn list_papers_with_pagination(&self, query: PaperListQuery) -> Result<PaperListResponse>;
    async fn update_paper_status(&self, id: i64, status: PaperStatus) -> Result<bool>;
    async fn delete_paper(&self, id: i64) -> Result<bool>;

    /// 答卷管理方法
    async fn create_answer_sheet(
        &self,
        school_id: i64,
        exam_id: i64,
        student_id: i64,
        download_token: &str,
    ) -> Result<AnswerSheet>;
    async fn get_answer_sheet_by_id(&self, id: i64) -> Result<Option<AnswerSheet>>;
    async fn get_answer_sheet_by_exam_and_student(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<AnswerSheet>>;
    async fn list_answer_sheets_with_pagination(
        &self,
        query: SheetListQuery,
    ) -> Result<SheetListResponse>;
    async fn update_sheet_status(&self, id: i64, status: SheetStatus) -> Result<bool>;
    // 写入批改结果并置状态
    async fn complete_sheet_check(
        &self,
        id: i64,
        score: f64,
        feedback: &SheetFeedback,
    ) -> Result<bool>;

    /// 教职工模块权限方法
    async fn grant_staff_access(
        &self,
        school_id: i64,
        user_id: i64,
        module: AccessModule,
        granted_by: i64,
    ) -> Result<StaffAccessGrant>;
    async fn revoke_staff_access(&self, user_id: i64, module: AccessModule) -> Result<bool>;
    async fn list_staff_access(&self, user_id: i64) -> Result<Vec<StaffAccessGrant>>;
    async fn has_staff_access(&self, user_id: i64, module: AccessModule) -> Result<bool>;

    /// 缺勤记录方法
    async fn record_absence(
        &self,
        school_id: i64,
        class_id: i64,
        recorded_by: i64,
        record: RecordAbsenceRequest,
    ) -> Result<AbsenteeismRecord>;
    async fn get_absence_by_id(&self, id: i64) -> Result<Option<AbsenteeismRecord>>;
    async fn list_absences_with_pagination(
        &self,
        query: AbsenteeismListQuery,
    ) -> Result<AbsenteeismListResponse>;
    async fn delete_absence(&self, id: i64) -> Result<bool>;

    /// 样卷方法
    async fn create_sample_paper(
        &self,
        school_id: i64,
        uploaded_by: i64,
        paper: CreateSamplePaperRequest,
    ) -> Result<SamplePaper>;
    async fn get_sample_paper_by_id(&self, id: i64) -> Result<Option<SamplePaper>>;
    async fn list_sample_papers_with_pagination(
        &self,
        query: SamplePaperListQuery,
    ) -> Result<SamplePaperListResponse>;
    async fn delete_sample_paper(&self, id: i64) -> Result<bool>;

    /// 通知方法
    async fn create_notification(
        &self,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Notification>;
    // 批量发送同一条通知
    async fn create_notifications(
        &self,
        user_ids: &[i64],
        title: &str,
        content: &str,
    ) -> Result<u64>;
    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<u64>;
    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool>;

    /// 文件管理方法
    async fn create_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploaded_by: i64,
    ) -> Result<File>;
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
