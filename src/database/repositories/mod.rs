//! Database repositories module
//!
//! This module contains the abstract persistence contracts the workflow
//! depends on, one per entity family.

pub mod answer;
pub mod question;
pub mod regular_user;
pub mod role;
pub mod support_user;

// Re-export repository contracts
pub use answer::AnswerRepository;
pub use question::QuestionRepository;
pub use regular_user::RegularUserRepository;
pub use role::RoleRepository;
pub use support_user::SupportUserRepository;
