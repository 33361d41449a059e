//! Workflow events
//!
//! Named bundles of DTOs returned by use cases, so the transport adapter
//! can address every recipient of an outcome without re-querying.

use serde::{Deserialize, Serialize};

use crate::models::dto::{AnswerDto, AttachmentDto, QuestionDto, RegularUserDto, SupportUserDto};

/// A bound question was answered; the asking user is to be notified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnsweredEvent {
    pub question: QuestionDto,
    pub answer: AnswerDto,
    pub asked_by: RegularUserDto,
}

/// A regular user estimated an answer; the answering support user is to be
/// notified of the feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEstimatedEvent {
    pub answer: AnswerDto,
    pub question: QuestionDto,
    pub answered_by: SupportUserDto,
    pub asked_by: RegularUserDto,
}

/// An attachment was appended to the latest answer of a bound question;
/// both the staff member (confirmation) and the asking user (delivery)
/// are recipients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerAttachmentAddedEvent {
    pub attachment: AttachmentDto,
    pub answer: AnswerDto,
    pub support_user: SupportUserDto,
    pub asked_by: RegularUserDto,
}

/// An attachment was appended to the asker's most recent question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAttachmentAddedEvent {
    pub attachment: AttachmentDto,
    pub question: QuestionDto,
    pub asked_by: RegularUserDto,
}
