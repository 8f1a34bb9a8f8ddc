pub mod absenteeism;
pub mod ai;
pub mod answer_sheets;
pub mod auth;
pub mod classes;
pub mod exams;
pub mod files;
pub mod guard;
pub mod notifications;
pub mod pdf;
pub mod question_papers;
pub mod questions;
pub mod sample_papers;
pub mod schools;
pub mod staff_access;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use absenteeism::AbsenteeismService;
pub use answer_sheets::AnswerSheetService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use exams::ExamService;
pub use files::FileService;
pub use notifications::NotificationService;
pub use question_papers::QuestionPaperService;
pub use questions::QuestionService;
pub use sample_papers::SamplePaperService;
pub use schools::SchoolService;
pub use staff_access::StaffAccessService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;
