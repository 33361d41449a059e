//! Permission policy
//!
//! Every staff use case states the capability it needs and evaluates it
//! here exactly once, against the actor snapshot it was handed. The owner
//! holds every capability; everyone else is scoped by their role snapshot.

use tracing::warn;

use crate::models::dto::SupportUserDto;
use crate::utils::errors::{Result, SupportDeskError};

/// Capabilities a staff use case can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AnswerQuestions,
    ManageSupportUsers,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::AnswerQuestions => "answer questions",
            Capability::ManageSupportUsers => "manage support users",
        };
        f.write_str(name)
    }
}

/// Check whether the actor holds the capability
pub fn has_capability(actor: &SupportUserDto, capability: Capability) -> bool {
    if actor.is_owner {
        return true;
    }
    let Some(role) = actor.role else {
        return false;
    };
    match capability {
        Capability::AnswerQuestions => role.permissions.can_answer_questions,
        Capability::ManageSupportUsers => role.permissions.can_manage_support_users,
    }
}

/// Require the capability or fail with `PermissionDenied`
pub fn require(actor: &SupportUserDto, capability: Capability) -> Result<()> {
    if has_capability(actor, capability) {
        return Ok(());
    }
    warn!(
        support_user_id = actor.id,
        telegram_id = actor.telegram_id,
        capability = %capability,
        "Capability check failed"
    );
    Err(SupportDeskError::PermissionDenied(format!(
        "support user {} may not {}",
        actor.id, capability
    )))
}
