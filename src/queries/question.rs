//! Question read queries
//!
//! Pure projections joining questions with their askers, answers, and
//! statistics counters. No state transitions happen here.

use std::sync::Arc;

use crate::database::DatabaseService;
use crate::models::dto::{AnswerDto, QuestionDto, RegularUserDto, SupportUserDto};
use crate::services::statistics::{RegularUserStatistics, StatisticsService};
use crate::utils::errors::{Result, SupportDeskError};

/// A question joined with its asker and the asker's counters
#[derive(Debug, Clone)]
pub struct QuestionInfo {
    pub question: QuestionDto,
    pub asked_by: RegularUserDto,
    pub asker_statistics: RegularUserStatistics,
    pub answers: Vec<AnswerDto>,
}

/// An answer joined with its question and author
#[derive(Debug, Clone)]
pub struct AnswerInfo {
    pub answer: AnswerDto,
    pub question: QuestionDto,
    pub answered_by: SupportUserDto,
}

#[derive(Clone)]
pub struct QuestionQueries {
    db: DatabaseService,
    statistics: Arc<dyn StatisticsService>,
}

impl QuestionQueries {
    pub fn new(db: DatabaseService, statistics: Arc<dyn StatisticsService>) -> Self {
        Self { db, statistics }
    }

    /// Everything the transport layer shows about one question.
    pub async fn get_question_info(&self, question_tg_message_id: i64) -> Result<QuestionInfo> {
        let question = self
            .db
            .questions
            .get_by_tg_message_id(question_tg_message_id)
            .await?
            .ok_or(SupportDeskError::QuestionNotFound {
                question_id: question_tg_message_id,
            })?;
        let asked_by = self
            .db
            .regular_users
            .get_by_id(question.regular_user_id)
            .await?
            .ok_or(SupportDeskError::RegularUserNotFound {
                user_id: question.regular_user_id.value(),
            })?;
        let asker_statistics = self
            .statistics
            .regular_user_statistics(question.regular_user_id)
            .await?;
        let answers = self.db.answers.get_for_question(question.id).await?;

        Ok(QuestionInfo {
            question: QuestionDto::from(&question),
            asked_by: RegularUserDto::from(&asked_by),
            asker_statistics,
            answers: answers.iter().map(AnswerDto::from).collect(),
        })
    }

    /// Everything the transport layer shows about one answer.
    pub async fn get_answer_info(&self, answer_tg_message_id: i64) -> Result<AnswerInfo> {
        let answer = self
            .db
            .answers
            .get_by_tg_message_id(answer_tg_message_id)
            .await?
            .ok_or(SupportDeskError::AnswerNotFound {
                answer_id: answer_tg_message_id,
            })?;
        let question = self
            .db
            .questions
            .get_by_id(answer.question_id)
            .await?
            .ok_or(SupportDeskError::QuestionNotFound {
                question_id: answer.question_id.value(),
            })?;
        let answered_by = self
            .db
            .support_users
            .get_by_id(answer.support_user_id)
            .await?
            .ok_or(SupportDeskError::SupportUserNotFound {
                user_id: answer.support_user_id.value(),
            })?;

        Ok(AnswerInfo {
            answer: AnswerDto::from(&answer),
            question: QuestionDto::from(&question),
            answered_by: SupportUserDto::from(&answered_by),
        })
    }

    /// All questions still waiting for an answer, oldest first.
    pub async fn get_open_questions(&self) -> Result<Vec<QuestionDto>> {
        let questions = self.db.questions.get_unanswered().await?;
        Ok(questions.iter().map(QuestionDto::from).collect())
    }
}
