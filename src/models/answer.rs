//! Answer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::values::{AnswerId, Attachment, MessageText, QuestionId, SupportUserId};
use crate::utils::errors::{Result, SupportDeskError};

/// A support user's answer to a question.
///
/// `is_useful` is a tri-state: `None` until the asking regular user
/// estimates the answer, then `Some(true)`/`Some(false)`. Re-estimating to
/// the same value fails; flipping the value is a permitted correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub support_user_id: SupportUserId,
    pub question_id: QuestionId,
    pub message: MessageText,
    pub tg_message_id: i64,
    pub is_useful: Option<bool>,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn estimate_as_useful(&mut self) -> Result<()> {
        self.estimate(true)
    }

    pub fn estimate_as_unuseful(&mut self) -> Result<()> {
        self.estimate(false)
    }

    fn estimate(&mut self, is_useful: bool) -> Result<()> {
        if self.is_useful == Some(is_useful) {
            return Err(SupportDeskError::AnswerAlreadyEstimated);
        }
        self.is_useful = Some(is_useful);
        Ok(())
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}

/// Fields of an answer that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnswer {
    pub support_user_id: SupportUserId,
    pub question_id: QuestionId,
    pub message: MessageText,
    pub tg_message_id: i64,
}

impl NewAnswer {
    pub fn new(
        support_user_id: SupportUserId,
        question_id: QuestionId,
        message: MessageText,
        tg_message_id: i64,
    ) -> Self {
        Self {
            support_user_id,
            question_id,
            message,
            tg_message_id,
        }
    }
}
