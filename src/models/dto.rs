//! Data transfer objects
//!
//! Immutable snapshots of persisted state handed across the service
//! boundary. Services take DTOs in and reload the live entity from the
//! repository before mutating, so the repository stays the single source
//! of truth between requests; the transport adapter only ever sees DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::regular_user::RegularUser;
use crate::models::role::{Role, RolePermissions};
use crate::models::support_user::{SupportUser, SupportUserRole};
use crate::models::values::{Attachment, AttachmentKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub permissions: RolePermissions,
    pub created_at: DateTime<Utc>,
}

impl From<&Role> for RoleDto {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.value(),
            name: role.name.as_str().to_string(),
            description: role.description.as_str().to_string(),
            permissions: role.permissions,
            created_at: role.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularUserDto {
    pub id: i64,
    pub telegram_id: i64,
    pub joined_at: DateTime<Utc>,
}

impl From<&RegularUser> for RegularUserDto {
    fn from(user: &RegularUser) -> Self {
        Self {
            id: user.id.value(),
            telegram_id: user.telegram_id,
            joined_at: user.joined_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportUserRoleDto {
    pub role_id: i64,
    pub permissions: RolePermissions,
}

impl From<&SupportUserRole> for SupportUserRoleDto {
    fn from(role: &SupportUserRole) -> Self {
        Self {
            role_id: role.role_id.value(),
            permissions: role.permissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportUserDto {
    pub id: i64,
    pub telegram_id: i64,
    pub descriptive_name: String,
    pub role: Option<SupportUserRoleDto>,
    pub bound_question_id: Option<i64>,
    pub joined_at: DateTime<Utc>,
    pub is_owner: bool,
    pub is_active: bool,
}

impl From<&SupportUser> for SupportUserDto {
    fn from(user: &SupportUser) -> Self {
        Self {
            id: user.id.value(),
            telegram_id: user.telegram_id,
            descriptive_name: user.descriptive_name.as_str().to_string(),
            role: user.role.as_ref().map(SupportUserRoleDto::from),
            bound_question_id: user.current_question_id.map(|id| id.value()),
            joined_at: user.joined_at,
            is_owner: user.is_owner,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentDto {
    pub tg_file_id: String,
    pub kind: AttachmentKind,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Attachment> for AttachmentDto {
    fn from(attachment: &Attachment) -> Self {
        Self {
            tg_file_id: attachment.tg_file_id.clone(),
            kind: attachment.kind,
            caption: attachment.caption.as_ref().map(|c| c.as_str().to_string()),
            created_at: attachment.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDto {
    pub id: i64,
    pub regular_user_id: i64,
    pub message: String,
    pub tg_message_id: i64,
    pub attachments: Vec<AttachmentDto>,
    pub created_at: DateTime<Utc>,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.value(),
            regular_user_id: question.regular_user_id.value(),
            message: question.message.as_str().to_string(),
            tg_message_id: question.tg_message_id,
            attachments: question.attachments.iter().map(AttachmentDto::from).collect(),
            created_at: question.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDto {
    pub id: i64,
    pub support_user_id: i64,
    pub question_id: i64,
    pub message: String,
    pub tg_message_id: i64,
    pub is_useful: Option<bool>,
    pub attachments: Vec<AttachmentDto>,
    pub created_at: DateTime<Utc>,
}

impl From<&Answer> for AnswerDto {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.value(),
            support_user_id: answer.support_user_id.value(),
            question_id: answer.question_id.value(),
            message: answer.message.as_str().to_string(),
            tg_message_id: answer.tg_message_id,
            is_useful: answer.is_useful,
            attachments: answer.attachments.iter().map(AttachmentDto::from).collect(),
            created_at: answer.created_at,
        }
    }
}
