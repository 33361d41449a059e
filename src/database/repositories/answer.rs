//! Answer repository contract

use async_trait::async_trait;

use crate::models::answer::{Answer, NewAnswer};
use crate::models::values::{AnswerId, QuestionId, SupportUserId};
use crate::utils::errors::Result;

/// Persistence boundary for answers.
///
/// `add` fails with `EntityAlreadyExists` when the telegram message id
/// collides; `update` is an upsert by id.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn add(&self, answer: NewAnswer) -> Result<Answer>;

    async fn update(&self, answer: &Answer) -> Result<()>;

    async fn get_by_id(&self, id: AnswerId) -> Result<Option<Answer>>;

    async fn get_by_tg_message_id(&self, tg_message_id: i64) -> Result<Option<Answer>>;

    /// All answers to a question, oldest first
    async fn get_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>>;

    /// The most recently created answer to a question
    async fn get_last_for_question(&self, question_id: QuestionId) -> Result<Option<Answer>>;

    /// All answers authored by a support user, oldest first
    async fn get_by_support_user(&self, support_user_id: SupportUserId) -> Result<Vec<Answer>>;

    async fn get_all(&self) -> Result<Vec<Answer>>;

    async fn delete(&self, id: AnswerId) -> Result<()>;
}
