//! Database service layer
//!
//! This module bundles one handle per repository contract so services and
//! queries receive a single database dependency.

use std::sync::Arc;

use crate::database::memory::{
    MemoryAnswerRepository, MemoryQuestionRepository, MemoryRegularUserRepository,
    MemoryRoleRepository, MemoryStatisticsService, MemoryStore, MemorySupportUserRepository,
};
use crate::database::repositories::{
    AnswerRepository, QuestionRepository, RegularUserRepository, RoleRepository,
    SupportUserRepository,
};
use crate::services::statistics::StatisticsService;

#[derive(Clone)]
pub struct DatabaseService {
    pub roles: Arc<dyn RoleRepository>,
    pub regular_users: Arc<dyn RegularUserRepository>,
    pub support_users: Arc<dyn SupportUserRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
}

impl DatabaseService {
    pub fn new(
        roles: Arc<dyn RoleRepository>,
        regular_users: Arc<dyn RegularUserRepository>,
        support_users: Arc<dyn SupportUserRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            roles,
            regular_users,
            support_users,
            questions,
            answers,
        }
    }

    /// Wire every repository over a fresh in-memory store. Returns the
    /// statistics handle alongside since it reads the same store.
    pub fn in_memory() -> (Self, Arc<dyn StatisticsService>) {
        let store = MemoryStore::new();
        let service = Self::new(
            Arc::new(MemoryRoleRepository::new(store.clone())),
            Arc::new(MemoryRegularUserRepository::new(store.clone())),
            Arc::new(MemorySupportUserRepository::new(store.clone())),
            Arc::new(MemoryQuestionRepository::new(store.clone())),
            Arc::new(MemoryAnswerRepository::new(store.clone())),
        );
        (service, Arc::new(MemoryStatisticsService::new(store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::regular_user::NewRegularUser;

    #[test]
    fn test_in_memory_wiring_shares_one_store() {
        tokio_test::block_on(async {
            let (db, statistics) = DatabaseService::in_memory();
            db.regular_users.add(NewRegularUser::new(100)).await.unwrap();
            let global = statistics.global_statistics().await.unwrap();
            assert_eq!(global.total_regular_users, 1);
        });
    }
}
