//! Global report query

use std::sync::Arc;

use crate::services::statistics::StatisticsService;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct ReportQueries {
    statistics: Arc<dyn StatisticsService>,
}

impl ReportQueries {
    pub fn new(statistics: Arc<dyn StatisticsService>) -> Self {
        Self { statistics }
    }

    /// System-wide counters bundled for the admin overview message.
    pub async fn get_global_report(&self) -> Result<serde_json::Value> {
        let stats = self.statistics.global_statistics().await?;
        Ok(serde_json::json!({
            "users": {
                "regular": stats.total_regular_users,
                "support": stats.total_support_users,
                "roles": stats.total_roles,
            },
            "questions": {
                "total": stats.total_questions,
                "answered": stats.answered_questions,
                "unanswered": stats.unanswered_questions,
            },
            "answers": {
                "total": stats.total_answers,
                "useful": stats.useful_answers,
                "unuseful": stats.unuseful_answers,
            },
        }))
    }
}
