//! Support user model
//!
//! A support user moves along two independent axes: owner / role-holder /
//! no-role, and active / inactive. Every mutator below distinguishes
//! "already in this state" (`SameValueAssigning`) from "not allowed
//! regardless of state" (`IncorrectAction`); there are no silent no-ops.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::role::{Role, RolePermissions};
use crate::models::values::{DescriptiveName, QuestionId, RoleId, SupportUserId};
use crate::utils::errors::{Result, SupportDeskError};

/// Snapshot of the role a support user currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportUserRole {
    pub role_id: RoleId,
    pub permissions: RolePermissions,
}

impl From<&Role> for SupportUserRole {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id,
            permissions: role.permissions,
        }
    }
}

/// A staff member answering questions, gated by role permissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportUser {
    pub id: SupportUserId,
    pub telegram_id: i64,
    pub descriptive_name: DescriptiveName,
    pub role: Option<SupportUserRole>,
    pub current_question_id: Option<QuestionId>,
    pub joined_at: DateTime<Utc>,
    pub is_owner: bool,
    pub is_active: bool,
}

impl SupportUser {
    /// Whether this user may answer and bind/unbind questions
    pub fn can_answer_questions(&self) -> bool {
        self.is_owner
            || self
                .role
                .map(|role| role.permissions.can_answer_questions)
                .unwrap_or(false)
    }

    /// Whether this user may manage support users and roles
    pub fn can_manage_support_users(&self) -> bool {
        self.is_owner
            || self
                .role
                .map(|role| role.permissions.can_manage_support_users)
                .unwrap_or(false)
    }

    pub fn promote_to_owner(&mut self) -> Result<()> {
        if self.is_owner {
            return Err(SupportDeskError::SameValueAssigning(
                "user is already the owner".to_string(),
            ));
        }
        self.is_owner = true;
        self.role = None;
        Ok(())
    }

    pub fn remove_owner_rights(&mut self) -> Result<()> {
        if !self.is_owner {
            return Err(SupportDeskError::SameValueAssigning(
                "user is not the owner".to_string(),
            ));
        }
        self.is_owner = false;
        Ok(())
    }

    /// Assign a role snapshot. When the new role does not grant answering,
    /// any current question binding is released.
    pub fn assign_role(&mut self, role: SupportUserRole) -> Result<()> {
        if self.is_owner {
            return Err(SupportDeskError::IncorrectAction(
                "the owner cannot hold a role".to_string(),
            ));
        }
        if self.role.map(|current| current.role_id) == Some(role.role_id) {
            return Err(SupportDeskError::SameValueAssigning(format!(
                "role {} is already assigned",
                role.role_id
            )));
        }
        self.role = Some(role);
        if !role.permissions.can_answer_questions {
            self.current_question_id = None;
        }
        Ok(())
    }

    /// Remove the current role, releasing any question binding with it.
    pub fn remove_role(&mut self) -> Result<()> {
        if self.is_owner {
            return Err(SupportDeskError::IncorrectAction(
                "the owner has no role to remove".to_string(),
            ));
        }
        if self.role.is_none() {
            return Err(SupportDeskError::SameValueAssigning(
                "no role is assigned".to_string(),
            ));
        }
        self.role = None;
        self.current_question_id = None;
        Ok(())
    }

    pub fn bind_question(&mut self, question_id: QuestionId) -> Result<()> {
        if !self.can_answer_questions() {
            return Err(SupportDeskError::IncorrectAction(
                "user is not permitted to answer questions".to_string(),
            ));
        }
        if self.current_question_id == Some(question_id) {
            return Err(SupportDeskError::SameValueAssigning(format!(
                "question {question_id} is already bound"
            )));
        }
        self.current_question_id = Some(question_id);
        Ok(())
    }

    pub fn unbind_question(&mut self) -> Result<()> {
        if !self.can_answer_questions() {
            return Err(SupportDeskError::IncorrectAction(
                "user is not permitted to answer questions".to_string(),
            ));
        }
        if self.current_question_id.is_none() {
            return Err(SupportDeskError::SameValueAssigning(
                "no question is bound".to_string(),
            ));
        }
        self.current_question_id = None;
        Ok(())
    }

    pub fn activate(&mut self) -> Result<()> {
        if self.is_active {
            return Err(SupportDeskError::SameValueAssigning(
                "user is already active".to_string(),
            ));
        }
        self.is_active = true;
        Ok(())
    }

    /// Deactivate the user, releasing any question binding. The owner can
    /// never be deactivated.
    pub fn deactivate(&mut self) -> Result<()> {
        if self.is_owner {
            return Err(SupportDeskError::IncorrectAction(
                "the owner cannot be deactivated".to_string(),
            ));
        }
        if !self.is_active {
            return Err(SupportDeskError::SameValueAssigning(
                "user is already inactive".to_string(),
            ));
        }
        self.is_active = false;
        self.current_question_id = None;
        Ok(())
    }
}

/// Fields of a support user that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupportUser {
    pub telegram_id: i64,
    pub descriptive_name: DescriptiveName,
    pub role: Option<SupportUserRole>,
    pub is_owner: bool,
}

impl NewSupportUser {
    /// An ordinary staff member, optionally holding a role from day one
    pub fn member(
        telegram_id: i64,
        descriptive_name: DescriptiveName,
        role: Option<SupportUserRole>,
    ) -> Self {
        Self {
            telegram_id,
            descriptive_name,
            role,
            is_owner: false,
        }
    }

    /// The owner; created exactly once, holds no role
    pub fn owner(telegram_id: i64, descriptive_name: DescriptiveName) -> Self {
        Self {
            telegram_id,
            descriptive_name,
            role: None,
            is_owner: true,
        }
    }
}
