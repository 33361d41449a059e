//! Read-side query objects
//!
//! Joins over repositories and statistics for informational responses.
//! Queries never mutate state; every workflow transition lives in the
//! services module.

pub mod question;
pub mod report;
pub mod staff;

// Re-export query objects
pub use question::{AnswerInfo, QuestionInfo, QuestionQueries};
pub use report::ReportQueries;
pub use staff::{RoleInfo, StaffQueries, SupportUserInfo};
