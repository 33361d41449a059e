//! Role model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::values::{RoleDescription, RoleId, RoleName};
use crate::utils::errors::{Result, SupportDeskError};

/// Permissions granted by a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissions {
    pub can_answer_questions: bool,
    pub can_manage_support_users: bool,
}

impl RolePermissions {
    pub fn new(can_answer_questions: bool, can_manage_support_users: bool) -> Self {
        Self {
            can_answer_questions,
            can_manage_support_users,
        }
    }

    /// Full permission set held by the owner
    pub fn all() -> Self {
        Self::new(true, true)
    }

    /// Empty permission set, the state of a support user without a role
    pub fn none() -> Self {
        Self::new(false, false)
    }
}

/// A named bundle of permissions assignable to support users.
///
/// Name uniqueness spans all roles and is enforced at the orchestration
/// layer, backed by the repository's uniqueness conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
    pub description: RoleDescription,
    pub permissions: RolePermissions,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Rename the role. Reassigning the current name is an error, not a no-op.
    pub fn change_name(&mut self, name: RoleName) -> Result<()> {
        if self.name == name {
            return Err(SupportDeskError::SameValueAssigning(format!(
                "role is already named {}",
                name
            )));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_description(&mut self, description: RoleDescription) -> Result<()> {
        if self.description == description {
            return Err(SupportDeskError::SameValueAssigning(
                "role already has this description".to_string(),
            ));
        }
        self.description = description;
        Ok(())
    }

    pub fn change_permissions(&mut self, permissions: RolePermissions) -> Result<()> {
        if self.permissions == permissions {
            return Err(SupportDeskError::SameValueAssigning(
                "role already has these permissions".to_string(),
            ));
        }
        self.permissions = permissions;
        Ok(())
    }
}

/// Fields of a role that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRole {
    pub name: RoleName,
    pub description: RoleDescription,
    pub permissions: RolePermissions,
}

impl NewRole {
    pub fn new(name: RoleName, description: RoleDescription, permissions: RolePermissions) -> Self {
        Self {
            name,
            description,
            permissions,
        }
    }
}
