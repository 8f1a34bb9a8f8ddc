//! 预导入模块，方便使用

pub use super::absenteeism::{
    ActiveModel as AbsenteeismActiveModel, Entity as AbsenteeismRecords, Model as AbsenteeismModel,
};
pub use super::answer_sheets::{
    ActiveModel as AnswerSheetActiveModel, Entity as AnswerSheets, Model as AnswerSheetModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::paper_questions::{
    ActiveModel as PaperQuestionActiveModel, Entity as PaperQuestions, Model as PaperQuestionModel,
};
pub use super::question_papers::{
    ActiveModel as QuestionPaperActiveModel, Entity as QuestionPapers, Model as QuestionPaperModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::sample_papers::{
    ActiveModel as SamplePaperActiveModel, Entity as SamplePapers, Model as SamplePaperModel,
};
pub use super::schools::{
    ActiveModel as SchoolActiveModel, Entity as Schools, Model as SchoolModel,
};
pub use super::staff_access::{
    ActiveModel as StaffAccessActiveModel, Entity as StaffAccessGrants, Model as StaffAccessModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
