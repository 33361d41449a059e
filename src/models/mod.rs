//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod answer;
pub mod dto;
pub mod events;
pub mod question;
pub mod regular_user;
pub mod role;
pub mod support_user;
pub mod values;

// Re-export commonly used models
pub use answer::{Answer, NewAnswer};
pub use dto::{
    AnswerDto, AttachmentDto, QuestionDto, RegularUserDto, RoleDto, SupportUserDto,
    SupportUserRoleDto,
};
pub use events::{
    AnswerAttachmentAddedEvent, AnswerEstimatedEvent, QuestionAnsweredEvent,
    QuestionAttachmentAddedEvent,
};
pub use question::{NewQuestion, Question};
pub use regular_user::{NewRegularUser, RegularUser};
pub use role::{NewRole, Role, RolePermissions};
pub use support_user::{NewSupportUser, SupportUser, SupportUserRole};
pub use values::{
    AnswerId, Attachment, AttachmentCaption, AttachmentKind, DescriptiveName, MessageText,
    QuestionId, RegularUserId, RoleDescription, RoleId, RoleName, SupportUserId,
};
