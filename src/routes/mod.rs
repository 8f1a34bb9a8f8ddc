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

pub use absenteeism::configure_absenteeism_routes;
pub use answer_sheets::configure_answer_sheet_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use exams::configure_exam_routes;
pub use files::configure_file_routes;
pub use notifications::configure_notification_routes;
pub use question_papers::configure_question_paper_routes;
pub use questions::configure_question_routes;
pub use sample_papers::configure_sample_paper_routes;
pub use schools::configure_school_routes;
pub use staff_access::configure_staff_access_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
