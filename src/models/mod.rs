pub mod auth;
pub mod grade;

pub use auth::{TokenClaims, UserRole};
pub use grade::{ApiErrorBody, Grade, NewGrade};
