//! Staff read queries
//!
//! Projections over support users and roles, joined with their counters.

use std::sync::Arc;

use crate::database::DatabaseService;
use crate::models::dto::{RoleDto, SupportUserDto};
use crate::models::values::{RoleId, SupportUserId};
use crate::services::statistics::{RoleStatistics, StatisticsService, SupportUserStatistics};
use crate::utils::errors::{Result, SupportDeskError};

/// A support user joined with the full role record and counters.
///
/// `role` is `None` both for the owner and when the referenced role has
/// been deleted since the snapshot was taken.
#[derive(Debug, Clone)]
pub struct SupportUserInfo {
    pub support_user: SupportUserDto,
    pub role: Option<RoleDto>,
    pub statistics: SupportUserStatistics,
}

/// A role joined with its membership counters
#[derive(Debug, Clone)]
pub struct RoleInfo {
    pub role: RoleDto,
    pub statistics: RoleStatistics,
}

#[derive(Clone)]
pub struct StaffQueries {
    db: DatabaseService,
    statistics: Arc<dyn StatisticsService>,
}

impl StaffQueries {
    pub fn new(db: DatabaseService, statistics: Arc<dyn StatisticsService>) -> Self {
        Self { db, statistics }
    }

    pub async fn get_support_user_info(&self, telegram_id: i64) -> Result<SupportUserInfo> {
        let user = self
            .db
            .support_users
            .get_by_telegram_id(telegram_id)
            .await?
            .ok_or(SupportDeskError::SupportUserNotFound { user_id: telegram_id })?;
        self.build_support_user_info(&SupportUserDto::from(&user), user.id).await
    }

    pub async fn get_role_info(&self, role_id: i64) -> Result<RoleInfo> {
        let role = self
            .db
            .roles
            .get_by_id(RoleId::new(role_id))
            .await?
            .ok_or(SupportDeskError::RoleNotFound { role_id })?;
        let statistics = self.statistics.role_statistics(role.id).await?;
        Ok(RoleInfo {
            role: RoleDto::from(&role),
            statistics,
        })
    }

    /// The whole roster with per-member counters, ordered by id.
    pub async fn list_support_users(&self) -> Result<Vec<SupportUserInfo>> {
        let users = self.db.support_users.get_all().await?;
        let mut infos = Vec::with_capacity(users.len());
        for user in &users {
            infos.push(
                self.build_support_user_info(&SupportUserDto::from(user), user.id)
                    .await?,
            );
        }
        Ok(infos)
    }

    async fn build_support_user_info(
        &self,
        dto: &SupportUserDto,
        id: SupportUserId,
    ) -> Result<SupportUserInfo> {
        let role = match dto.role {
            Some(role) => self
                .db
                .roles
                .get_by_id(RoleId::new(role.role_id))
                .await?
                .as_ref()
                .map(RoleDto::from),
            None => None,
        };
        let statistics = self.statistics.support_user_statistics(id).await?;
        Ok(SupportUserInfo {
            support_user: dto.clone(),
            role,
            statistics,
        })
    }
}
