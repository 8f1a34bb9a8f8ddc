use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学校（租户）表
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Schools::Address).string().null())
                    .col(ColumnDef::new(Schools::ContactEmail).string().null())
                    .col(ColumnDef::new(Schools::Status).string().not_null())
                    .col(ColumnDef::new(Schools::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Schools::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::SchoolId).big_integer().null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师档案表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::EmployeeNo).string().not_null())
                    .col(ColumnDef::new(Teachers::Qualification).string().null())
                    .col(ColumnDef::new(Teachers::SubjectIds).string().null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::GradeLevel).integer().not_null())
                    .col(ColumnDef::new(Classes::Section).string().null())
                    .col(ColumnDef::new(Classes::ClassTeacherId).big_integer().null())
                    .col(ColumnDef::new(Classes::AcademicYear).string().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::ClassTeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Students::ClassId).big_integer().null())
                    .col(ColumnDef::new(Students::AdmissionNo).string().not_null())
                    .col(ColumnDef::new(Students::RollNo).integer().null())
                    .col(ColumnDef::new(Students::GuardianName).string().null())
                    .col(ColumnDef::new(Students::GuardianPhone).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Code).string().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Title).string().not_null())
                    .col(ColumnDef::new(Exams::ExamDate).big_integer().not_null())
                    .col(ColumnDef::new(Exams::DurationMinutes).integer().not_null())
                    .col(ColumnDef::new(Exams::TotalMarks).integer().not_null())
                    .col(ColumnDef::new(Exams::Status).string().not_null())
                    .col(ColumnDef::new(Exams::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::QuestionText).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionType).string().not_null())
                    .col(ColumnDef::new(Questions::Options).text().null())
                    .col(ColumnDef::new(Questions::CorrectAnswer).text().null())
                    .col(ColumnDef::new(Questions::Marks).integer().not_null())
                    .col(ColumnDef::new(Questions::BloomsLevel).string().not_null())
                    .col(ColumnDef::new(Questions::Difficulty).string().not_null())
                    .col(
                        ColumnDef::new(Questions::AiGenerated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Questions::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Questions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Questions::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建试卷表
        manager
            .create_table(
                Table::create()
                    .table(QuestionPapers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionPapers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuestionPapers::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::ExamId).big_integer().null())
                    .col(
                        ColumnDef::new(QuestionPapers::PaperCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(QuestionPapers::Title).string().not_null())
                    .col(ColumnDef::new(QuestionPapers::Instructions).text().null())
                    .col(ColumnDef::new(QuestionPapers::TotalMarks).integer().not_null())
                    .col(
                        ColumnDef::new(QuestionPapers::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionPapers::BloomsRemember).integer().not_null())
                    .col(
                        ColumnDef::new(QuestionPapers::BloomsUnderstand)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionPapers::BloomsApply).integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::BloomsAnalyze).integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::BloomsEvaluate).integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::BloomsCreate).integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::Status).string().not_null())
                    .col(ColumnDef::new(QuestionPapers::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(QuestionPapers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionPapers::Table, QuestionPapers::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionPapers::Table, QuestionPapers::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建试卷题目关联表
        manager
            .create_table(
                Table::create()
                    .table(PaperQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaperQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaperQuestions::PaperId).big_integer().not_null())
                    .col(
                        ColumnDef::new(PaperQuestions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaperQuestions::Position).integer().not_null())
                    .col(ColumnDef::new(PaperQuestions::Marks).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(PaperQuestions::Table, PaperQuestions::PaperId)
                            .to(QuestionPapers::Table, QuestionPapers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PaperQuestions::Table, PaperQuestions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建答卷表
        manager
            .create_table(
                Table::create()
                    .table(AnswerSheets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnswerSheets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AnswerSheets::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(AnswerSheets::ExamId).big_integer().not_null())
                    .col(ColumnDef::new(AnswerSheets::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(AnswerSheets::DownloadToken)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AnswerSheets::Status).string().not_null())
                    .col(ColumnDef::new(AnswerSheets::Score).double().null())
                    .col(ColumnDef::new(AnswerSheets::AiFeedback).text().null())
                    .col(ColumnDef::new(AnswerSheets::CheckedAt).big_integer().null())
                    .col(ColumnDef::new(AnswerSheets::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(AnswerSheets::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AnswerSheets::Table, AnswerSheets::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AnswerSheets::Table, AnswerSheets::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教职工模块权限表
        manager
            .create_table(
                Table::create()
                    .table(StaffAccess::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StaffAccess::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StaffAccess::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(StaffAccess::UserId).big_integer().not_null())
                    .col(ColumnDef::new(StaffAccess::Module).string().not_null())
                    .col(ColumnDef::new(StaffAccess::GrantedBy).big_integer().not_null())
                    .col(ColumnDef::new(StaffAccess::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StaffAccess::Table, StaffAccess::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缺勤记录表
        manager
            .create_table(
                Table::create()
                    .table(Absenteeism::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Absenteeism::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Absenteeism::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Absenteeism::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Absenteeism::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Absenteeism::Date).string().not_null())
                    .col(ColumnDef::new(Absenteeism::Reason).string().null())
                    .col(ColumnDef::new(Absenteeism::RecordedBy).big_integer().not_null())
                    .col(ColumnDef::new(Absenteeism::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absenteeism::Table, Absenteeism::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建样卷表
        manager
            .create_table(
                Table::create()
                    .table(SamplePapers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SamplePapers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SamplePapers::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(SamplePapers::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(SamplePapers::GradeLevel).integer().not_null())
                    .col(ColumnDef::new(SamplePapers::Title).string().not_null())
                    .col(
                        ColumnDef::new(SamplePapers::DownloadToken)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SamplePapers::UploadedBy).big_integer().not_null())
                    .col(ColumnDef::new(SamplePapers::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(SamplePapers::Table, SamplePapers::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Content).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notifications::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Files::DownloadToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Files::OriginalName).string().not_null())
                    .col(ColumnDef::new(Files::StoredName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UploadedBy).big_integer().not_null())
                    .col(ColumnDef::new(Files::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 租户维度索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_school_id")
                    .table(Users::Table)
                    .col(Users::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 教师工号：每校唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_teachers_school_employee_no")
                    .table(Teachers::Table)
                    .col(Teachers::SchoolId)
                    .col(Teachers::EmployeeNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 学籍号：每校唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_students_school_admission_no")
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .col(Students::AdmissionNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .to_owned(),
            )
            .await?;

        // 科目代码：每校唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_subjects_school_code")
                    .table(Subjects::Table)
                    .col(Subjects::SchoolId)
                    .col(Subjects::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exams_class_id")
                    .table(Exams::Table)
                    .col(Exams::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_subject_id")
                    .table(Questions::Table)
                    .col(Questions::SubjectId)
                    .to_owned(),
            )
            .await?;

        // 试卷内题号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_paper_questions_paper_position")
                    .table(PaperQuestions::Table)
                    .col(PaperQuestions::PaperId)
                    .col(PaperQuestions::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每场考试每个学生只允许一份答卷
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_answer_sheets_exam_student")
                    .table(AnswerSheets::Table)
                    .col(AnswerSheets::ExamId)
                    .col(AnswerSheets::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每用户每模块一条授权
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_staff_access_user_module")
                    .table(StaffAccess::Table)
                    .col(StaffAccess::UserId)
                    .col(StaffAccess::Module)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每个学生每天一条缺勤记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_absenteeism_student_date")
                    .table(Absenteeism::Table)
                    .col(Absenteeism::StudentId)
                    .col(Absenteeism::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SamplePapers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Absenteeism::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaffAccess::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnswerSheets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PaperQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionPapers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Schools {
    #[sea_orm(iden = "schools")]
    Table,
    Id,
    Name,
    Code,
    Address,
    ContactEmail,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    SchoolId,
    DisplayName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    SchoolId,
    EmployeeNo,
    Qualification,
    SubjectIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    SchoolId,
    ClassId,
    AdmissionNo,
    RollNo,
    GuardianName,
    GuardianPhone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    SchoolId,
    Name,
    GradeLevel,
    Section,
    ClassTeacherId,
    AcademicYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    SchoolId,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    SchoolId,
    ClassId,
    SubjectId,
    Title,
    ExamDate,
    DurationMinutes,
    TotalMarks,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    SchoolId,
    SubjectId,
    QuestionText,
    QuestionType,
    Options,
    CorrectAnswer,
    Marks,
    BloomsLevel,
    Difficulty,
    AiGenerated,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuestionPapers {
    #[sea_orm(iden = "question_papers")]
    Table,
    Id,
    SchoolId,
    SubjectId,
    ClassId,
    ExamId,
    PaperCode,
    Title,
    Instructions,
    TotalMarks,
    DurationMinutes,
    BloomsRemember,
    BloomsUnderstand,
    BloomsApply,
    BloomsAnalyze,
    BloomsEvaluate,
    BloomsCreate,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaperQuestions {
    #[sea_orm(iden = "paper_questions")]
    Table,
    Id,
    PaperId,
    QuestionId,
    Position,
    Marks,
}

#[derive(DeriveIden)]
enum AnswerSheets {
    #[sea_orm(iden = "answer_sheets")]
    Table,
    Id,
    SchoolId,
    ExamId,
    StudentId,
    DownloadToken,
    Status,
    Score,
    AiFeedback,
    CheckedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StaffAccess {
    #[sea_orm(iden = "staff_access")]
    Table,
    Id,
    SchoolId,
    UserId,
    Module,
    GrantedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Absenteeism {
    #[sea_orm(iden = "absenteeism")]
    Table,
    Id,
    SchoolId,
    StudentId,
    ClassId,
    Date,
    Reason,
    RecordedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SamplePapers {
    #[sea_orm(iden = "sample_papers")]
    Table,
    Id,
    SchoolId,
    SubjectId,
    GradeLevel,
    Title,
    DownloadToken,
    UploadedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    Title,
    Content,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    Id,
    DownloadToken,
    OriginalName,
    StoredName,
    FileSize,
    FileType,
    UploadedBy,
    CreatedAt,
}
