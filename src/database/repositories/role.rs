//! Role repository contract

use async_trait::async_trait;

use crate::models::role::{NewRole, Role};
use crate::models::values::RoleId;
use crate::utils::errors::Result;

/// Persistence boundary for roles.
///
/// `add` fails with `EntityAlreadyExists` when the role name collides;
/// `update` is an upsert by id.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn add(&self, role: NewRole) -> Result<Role>;

    async fn update(&self, role: &Role) -> Result<()>;

    async fn get_by_id(&self, id: RoleId) -> Result<Option<Role>>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>>;

    async fn get_all(&self) -> Result<Vec<Role>>;

    async fn delete(&self, id: RoleId) -> Result<()>;
}
