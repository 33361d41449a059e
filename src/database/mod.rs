//! Database module
//!
//! This module holds the persistence contracts, the in-memory reference
//! adapter, and the service bundling the repository handles.

pub mod memory;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use memory::MemoryStore;
pub use repositories::{
    AnswerRepository, QuestionRepository, RegularUserRepository, RoleRepository,
    SupportUserRepository,
};
pub use service::DatabaseService;
