//! Support user repository contract

use async_trait::async_trait;

use crate::models::support_user::{NewSupportUser, SupportUser};
use crate::models::values::{RoleId, SupportUserId};
use crate::utils::errors::Result;

/// Persistence boundary for support users.
///
/// `add` fails with `EntityAlreadyExists` when the telegram id collides;
/// `update` is an upsert by id.
#[async_trait]
pub trait SupportUserRepository: Send + Sync {
    async fn add(&self, user: NewSupportUser) -> Result<SupportUser>;

    async fn update(&self, user: &SupportUser) -> Result<()>;

    async fn get_by_id(&self, id: SupportUserId) -> Result<Option<SupportUser>>;

    async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<Option<SupportUser>>;

    /// The distinguished owner record, if one has been initialized
    async fn get_owner(&self) -> Result<Option<SupportUser>>;

    /// All support users currently holding the given role
    async fn get_by_role_id(&self, role_id: RoleId) -> Result<Vec<SupportUser>>;

    async fn get_all(&self) -> Result<Vec<SupportUser>>;

    async fn delete(&self, id: SupportUserId) -> Result<()>;
}
