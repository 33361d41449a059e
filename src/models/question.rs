//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::values::{Attachment, MessageText, QuestionId, RegularUserId};

/// A question asked by a regular user.
///
/// Attachments are append-only; a question has no other mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub regular_user_id: RegularUserId,
    pub message: MessageText,
    pub tg_message_id: i64,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}

/// Fields of a question that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub regular_user_id: RegularUserId,
    pub message: MessageText,
    pub tg_message_id: i64,
}

impl NewQuestion {
    pub fn new(regular_user_id: RegularUserId, message: MessageText, tg_message_id: i64) -> Self {
        Self {
            regular_user_id,
            message,
            tg_message_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::values::AttachmentKind;

    #[test]
    fn test_attachments_are_append_only() {
        let mut question = Question {
            id: QuestionId::new(1),
            regular_user_id: RegularUserId::new(2),
            message: MessageText::new("Hi").unwrap(),
            tg_message_id: 100,
            attachments: vec![],
            created_at: Utc::now(),
        };

        question.add_attachment(Attachment::new("file-1", AttachmentKind::Photo, None).unwrap());
        question.add_attachment(Attachment::new("file-2", AttachmentKind::Document, None).unwrap());
        assert_eq!(question.attachments.len(), 2);
        assert_eq!(question.attachments[0].tg_file_id, "file-1");
        assert_eq!(question.attachments[1].tg_file_id, "file-2");
    }
}
