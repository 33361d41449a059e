//! Regular user repository contract

use async_trait::async_trait;

use crate::models::regular_user::{NewRegularUser, RegularUser};
use crate::models::values::RegularUserId;
use crate::utils::errors::Result;

/// Persistence boundary for regular users.
///
/// `add` fails with `EntityAlreadyExists` when the telegram id collides;
/// `update` is an upsert by id.
#[async_trait]
pub trait RegularUserRepository: Send + Sync {
    async fn add(&self, user: NewRegularUser) -> Result<RegularUser>;

    async fn update(&self, user: &RegularUser) -> Result<()>;

    async fn get_by_id(&self, id: RegularUserId) -> Result<Option<RegularUser>>;

    async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<Option<RegularUser>>;

    async fn get_all(&self) -> Result<Vec<RegularUser>>;

    async fn delete(&self, id: RegularUserId) -> Result<()>;
}
