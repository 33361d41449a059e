//! Statistics service contract
//!
//! Read-only aggregate counters keyed by entity id, consumed by the query
//! layer for informational responses. No workflow decision reads these.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::values::{RegularUserId, RoleId, SupportUserId};
use crate::utils::errors::Result;

/// Counters describing a regular user's activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularUserStatistics {
    pub asked_questions: i64,
    pub answered_questions: i64,
    pub unanswered_questions: i64,
    pub useful_answers: i64,
    pub unuseful_answers: i64,
    pub unestimated_answers: i64,
}

/// Counters describing a support user's answering record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportUserStatistics {
    pub total_answers: i64,
    pub useful_answers: i64,
    pub unuseful_answers: i64,
    pub unestimated_answers: i64,
}

/// Counters describing a role's membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStatistics {
    pub total_users: i64,
}

/// System-wide counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStatistics {
    pub total_regular_users: i64,
    pub total_support_users: i64,
    pub total_roles: i64,
    pub total_questions: i64,
    pub answered_questions: i64,
    pub unanswered_questions: i64,
    pub total_answers: i64,
    pub useful_answers: i64,
    pub unuseful_answers: i64,
}

/// Read-side statistics collaborator.
///
/// Implementations receive entity ids only, never live entities.
#[async_trait]
pub trait StatisticsService: Send + Sync {
    async fn regular_user_statistics(&self, id: RegularUserId) -> Result<RegularUserStatistics>;

    async fn support_user_statistics(&self, id: SupportUserId) -> Result<SupportUserStatistics>;

    async fn role_statistics(&self, id: RoleId) -> Result<RoleStatistics>;

    async fn global_statistics(&self) -> Result<GlobalStatistics>;
}
