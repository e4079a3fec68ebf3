pub mod grade_service;
pub mod session_service;

pub use grade_service::{create_grade, fetch_grades, grades_endpoint, FetchError};
pub use session_service::{decode_claims, redirect_to_login, resolve_role};
