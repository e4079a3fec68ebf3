pub mod use_grades;
pub mod use_session;

pub use use_grades::{use_grades, UseGradesHandle};
pub use use_session::{use_session, UseSessionHandle};
