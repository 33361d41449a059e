//! Question repository contract

use async_trait::async_trait;

use crate::models::question::{NewQuestion, Question};
use crate::models::values::{QuestionId, RegularUserId};
use crate::utils::errors::Result;

/// Persistence boundary for questions.
///
/// `add` fails with `EntityAlreadyExists` when the telegram message id
/// collides; `update` is an upsert by id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn add(&self, question: NewQuestion) -> Result<Question>;

    async fn update(&self, question: &Question) -> Result<()>;

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>>;

    async fn get_by_tg_message_id(&self, tg_message_id: i64) -> Result<Option<Question>>;

    /// All questions a regular user has asked, oldest first
    async fn get_by_regular_user(&self, regular_user_id: RegularUserId) -> Result<Vec<Question>>;

    /// The most recently created question of a regular user
    async fn get_last_asked(&self, regular_user_id: RegularUserId) -> Result<Option<Question>>;

    /// One question that no support user is bound to and that has no
    /// answer yet, chosen at random from the pool; `None` when the pool
    /// is empty. Random selection is a policy of this read query.
    async fn get_random_unbound_unanswered(&self) -> Result<Option<Question>>;

    /// All questions without an answer, oldest first
    async fn get_unanswered(&self) -> Result<Vec<Question>>;

    async fn get_all(&self) -> Result<Vec<Question>>;

    async fn delete(&self, id: QuestionId) -> Result<()>;
}
