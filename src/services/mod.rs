//! Services module
//!
//! This module contains the workflow orchestration services

pub mod policy;
pub mod regular_user;
pub mod statistics;
pub mod support_user;

// Re-export commonly used services
pub use policy::{has_capability, require, Capability};
pub use regular_user::RegularUserService;
pub use statistics::{
    GlobalStatistics, RegularUserStatistics, RoleStatistics, StatisticsService,
    SupportUserStatistics,
};
pub use support_user::SupportUserService;

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::queries::{QuestionQueries, ReportQueries, StaffQueries};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub support_user_service: SupportUserService,
    pub regular_user_service: RegularUserService,
    pub question_queries: QuestionQueries,
    pub staff_queries: StaffQueries,
    pub report_queries: ReportQueries,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(
        db: DatabaseService,
        statistics: Arc<dyn StatisticsService>,
        settings: Settings,
    ) -> Self {
        let support_user_service = SupportUserService::new(db.clone(), settings);
        let regular_user_service = RegularUserService::new(db.clone());
        let question_queries = QuestionQueries::new(db.clone(), statistics.clone());
        let staff_queries = StaffQueries::new(db, statistics.clone());
        let report_queries = ReportQueries::new(statistics);

        Self {
            support_user_service,
            regular_user_service,
            question_queries,
            staff_queries,
            report_queries,
        }
    }

    /// Wire the whole stack over a fresh in-memory store
    pub fn in_memory(settings: Settings) -> Self {
        let (db, statistics) = DatabaseService::in_memory();
        Self::new(db, statistics, settings)
    }
}
