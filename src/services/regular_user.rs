//! Regular user service implementation
//!
//! End-user use cases: lazy registration on first contact, asking
//! questions, estimating answers, and appending attachments to the most
//! recently asked question.

use tracing::{debug, info};

use crate::database::DatabaseService;
use crate::models::dto::{QuestionDto, RegularUserDto};
use crate::models::events::{AnswerEstimatedEvent, QuestionAttachmentAddedEvent};
use crate::models::question::NewQuestion;
use crate::models::regular_user::{NewRegularUser, RegularUser};
use crate::models::values::{
    Attachment, AttachmentCaption, AttachmentKind, MessageText, RegularUserId,
};
use crate::models::AttachmentDto;
use crate::utils::errors::{Result, SupportDeskError};

/// Service for all regular-user use cases
#[derive(Clone)]
pub struct RegularUserService {
    db: DatabaseService,
}

impl RegularUserService {
    /// Create a new RegularUserService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Look up the acting regular user, creating the record on first
    /// contact. There is no registration step; this never fails except on
    /// repository errors.
    pub async fn authorize(&self, telegram_id: i64) -> Result<RegularUserDto> {
        debug!(telegram_id = telegram_id, "Authorizing regular user");
        if let Some(user) = self.db.regular_users.get_by_telegram_id(telegram_id).await? {
            return Ok(RegularUserDto::from(&user));
        }

        let user = self.db.regular_users.add(NewRegularUser::new(telegram_id)).await?;
        info!(
            regular_user_id = user.id.value(),
            telegram_id = telegram_id,
            "Regular user registered on first contact"
        );
        Ok(RegularUserDto::from(&user))
    }

    /// Persist a new question. There is no permission gate on asking.
    pub async fn ask_question(
        &self,
        actor: &RegularUserDto,
        text: &str,
        tg_message_id: i64,
    ) -> Result<QuestionDto> {
        let user = self.load_actor(actor).await?;
        let message = MessageText::new(text)?;
        let question = self
            .db
            .questions
            .add(NewQuestion::new(user.id, message, tg_message_id))
            .await?;

        info!(
            regular_user_id = user.id.value(),
            question_id = question.id.value(),
            "Question asked"
        );
        Ok(QuestionDto::from(&question))
    }

    /// Mark an answer as useful.
    pub async fn estimate_answer_as_useful(
        &self,
        actor: &RegularUserDto,
        answer_tg_message_id: i64,
    ) -> Result<AnswerEstimatedEvent> {
        self.estimate(actor, answer_tg_message_id, true).await
    }

    /// Mark an answer as not useful.
    pub async fn estimate_answer_as_unuseful(
        &self,
        actor: &RegularUserDto,
        answer_tg_message_id: i64,
    ) -> Result<AnswerEstimatedEvent> {
        self.estimate(actor, answer_tg_message_id, false).await
    }

    // Any authorized regular user may estimate any answer it can name by
    // chat message id; the asker check is an open product question and is
    // intentionally absent here.
    async fn estimate(
        &self,
        actor: &RegularUserDto,
        answer_tg_message_id: i64,
        is_useful: bool,
    ) -> Result<AnswerEstimatedEvent> {
        debug!(
            regular_user_id = actor.id,
            answer_tg_message_id = answer_tg_message_id,
            is_useful = is_useful,
            "Estimating answer"
        );

        let mut answer = self
            .db
            .answers
            .get_by_tg_message_id(answer_tg_message_id)
            .await?
            .ok_or(SupportDeskError::AnswerNotFound {
                answer_id: answer_tg_message_id,
            })?;
        if is_useful {
            answer.estimate_as_useful()?;
        } else {
            answer.estimate_as_unuseful()?;
        }
        self.db.answers.update(&answer).await?;

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
        let asked_by = self
            .db
            .regular_users
            .get_by_id(question.regular_user_id)
            .await?
            .ok_or(SupportDeskError::RegularUserNotFound {
                user_id: question.regular_user_id.value(),
            })?;

        info!(
            answer_id = answer.id.value(),
            is_useful = is_useful,
            "Answer estimated"
        );
        Ok(AnswerEstimatedEvent {
            answer: (&answer).into(),
            question: (&question).into(),
            answered_by: (&answered_by).into(),
            asked_by: (&asked_by).into(),
        })
    }

    /// Append an attachment to the actor's most recently asked question.
    pub async fn add_attachment_to_last_asked_question(
        &self,
        actor: &RegularUserDto,
        tg_file_id: &str,
        kind: AttachmentKind,
        caption: Option<&str>,
    ) -> Result<QuestionAttachmentAddedEvent> {
        let user = self.load_actor(actor).await?;
        let mut question = self
            .db
            .questions
            .get_last_asked(user.id)
            .await?
            .ok_or(SupportDeskError::NoLastQuestion)?;

        let caption = caption.map(AttachmentCaption::new).transpose()?;
        let attachment = Attachment::new(tg_file_id, kind, caption)?;
        question.add_attachment(attachment.clone());
        self.db.questions.update(&question).await?;

        info!(
            regular_user_id = user.id.value(),
            question_id = question.id.value(),
            "Attachment added to last asked question"
        );
        Ok(QuestionAttachmentAddedEvent {
            attachment: AttachmentDto::from(&attachment),
            question: (&question).into(),
            asked_by: (&user).into(),
        })
    }

    async fn load_actor(&self, actor: &RegularUserDto) -> Result<RegularUser> {
        self.db
            .regular_users
            .get_by_id(RegularUserId::new(actor.id))
            .await?
            .ok_or(SupportDeskError::RegularUserNotFound { user_id: actor.id })
    }
}
