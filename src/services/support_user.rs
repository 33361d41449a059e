//! Support user service implementation
//!
//! Staff-side use cases: owner initialization, question binding and
//! answering, attachments, and role/staff administration. Every use case
//! starts from an authorized actor snapshot, evaluates its required
//! capability once, reloads the live entity from the repository, mutates
//! it, and persists the result — the repository stays the single source of
//! truth between requests.

use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::models::answer::NewAnswer;
use crate::models::dto::{QuestionDto, RoleDto, SupportUserDto};
use crate::models::events::{AnswerAttachmentAddedEvent, QuestionAnsweredEvent};
use crate::models::question::Question;
use crate::models::regular_user::RegularUser;
use crate::models::role::{NewRole, Role, RolePermissions};
use crate::models::support_user::{NewSupportUser, SupportUser, SupportUserRole};
use crate::models::values::{
    Attachment, AttachmentCaption, AttachmentKind, DescriptiveName, MessageText, QuestionId,
    RegularUserId, RoleDescription, RoleId, RoleName, SupportUserId,
};
use crate::models::AttachmentDto;
use crate::services::policy::{self, Capability};
use crate::utils::errors::{Result, SupportDeskError};

/// Service for all staff-side use cases
#[derive(Clone)]
pub struct SupportUserService {
    db: DatabaseService,
    settings: Settings,
}

impl SupportUserService {
    /// Create a new SupportUserService instance
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        Self { db, settings }
    }

    /// Look up the acting support user by chat identity.
    ///
    /// Fails with `NotAuthorized` when no record exists or the record is
    /// deactivated; otherwise returns a snapshot for subsequent calls.
    pub async fn authorize(&self, telegram_id: i64) -> Result<SupportUserDto> {
        debug!(telegram_id = telegram_id, "Authorizing support user");
        match self.db.support_users.get_by_telegram_id(telegram_id).await? {
            Some(user) if user.is_active => Ok(SupportUserDto::from(&user)),
            _ => {
                warn!(telegram_id = telegram_id, "Support user authorization failed");
                Err(SupportDeskError::NotAuthorized { telegram_id })
            }
        }
    }

    /// Create the distinguished owner account, exactly once.
    ///
    /// The owner check runs against a dedicated repository query, so owner
    /// uniqueness holds even if ordinary staff records already exist. When
    /// no name is supplied the configured default is used.
    pub async fn initialize_owner(
        &self,
        telegram_id: i64,
        entered_password: &str,
        descriptive_name: Option<&str>,
    ) -> Result<SupportUserDto> {
        debug!(telegram_id = telegram_id, "Initializing owner");

        if self.db.support_users.get_owner().await?.is_some() {
            return Err(SupportDeskError::OwnerAlreadyInitialized);
        }
        if self
            .db
            .support_users
            .get_by_telegram_id(telegram_id)
            .await?
            .is_some()
        {
            return Err(SupportDeskError::OwnerAlreadyInitialized);
        }
        if entered_password != self.settings.bot.owner_password {
            warn!(telegram_id = telegram_id, "Owner initialization with incorrect password");
            return Err(SupportDeskError::IncorrectPassword);
        }

        let name = DescriptiveName::new(
            descriptive_name.unwrap_or(self.settings.bot.owner_default_name.as_str()),
        )?;
        let owner = self
            .db
            .support_users
            .add(NewSupportUser::owner(telegram_id, name))
            .await?;
        info!(support_user_id = owner.id.value(), telegram_id = telegram_id, "Owner initialized");
        Ok(SupportUserDto::from(&owner))
    }

    /// Pick one unbound, unanswered question for the actor to take, or
    /// `None` when the pool is empty.
    pub async fn get_question_to_answer(
        &self,
        actor: &SupportUserDto,
    ) -> Result<Option<QuestionDto>> {
        policy::require(actor, Capability::AnswerQuestions)?;
        let question = self.db.questions.get_random_unbound_unanswered().await?;
        Ok(question.as_ref().map(QuestionDto::from))
    }

    /// Bind the actor to the question with the given chat message id.
    pub async fn bind_question(
        &self,
        actor: &SupportUserDto,
        question_tg_message_id: i64,
    ) -> Result<QuestionDto> {
        policy::require(actor, Capability::AnswerQuestions)?;

        let question = self.get_question_by_tg_id(question_tg_message_id).await?;
        let mut user = self.load_actor(actor).await?;
        user.bind_question(question.id)?;
        self.db.support_users.update(&user).await?;

        info!(
            support_user_id = user.id.value(),
            question_id = question.id.value(),
            "Question bound"
        );
        Ok(QuestionDto::from(&question))
    }

    /// Release the actor's current question binding.
    ///
    /// The entity reports a missing binding as a same-value error; callers
    /// see it as the `NoBoundQuestion` precondition.
    pub async fn unbind_question(&self, actor: &SupportUserDto) -> Result<()> {
        policy::require(actor, Capability::AnswerQuestions)?;

        let mut user = self.load_actor(actor).await?;
        user.unbind_question().map_err(|err| match err {
            SupportDeskError::SameValueAssigning(_) => SupportDeskError::NoBoundQuestion,
            other => other,
        })?;
        self.db.support_users.update(&user).await?;

        info!(support_user_id = user.id.value(), "Question unbound");
        Ok(())
    }

    /// Answer the actor's currently bound question and notify the asker.
    pub async fn answer_bound_question(
        &self,
        actor: &SupportUserDto,
        text: &str,
        tg_message_id: i64,
    ) -> Result<QuestionAnsweredEvent> {
        policy::require(actor, Capability::AnswerQuestions)?;

        let user = self.load_actor(actor).await?;
        let question_id = user.current_question_id.ok_or(SupportDeskError::NoBoundQuestion)?;
        let question = self.get_question_by_id(question_id).await?;
        let asked_by = self.get_regular_user(question.regular_user_id).await?;

        let message = MessageText::new(text)?;
        let answer = self
            .db
            .answers
            .add(NewAnswer::new(user.id, question.id, message, tg_message_id))
            .await?;

        info!(
            support_user_id = user.id.value(),
            question_id = question.id.value(),
            answer_id = answer.id.value(),
            "Bound question answered"
        );
        Ok(QuestionAnsweredEvent {
            question: QuestionDto::from(&question),
            answer: (&answer).into(),
            asked_by: (&asked_by).into(),
        })
    }

    /// Append an attachment to the latest answer of the actor's bound
    /// question; both parties are addressed in the returned event.
    pub async fn add_attachment_to_last_answer(
        &self,
        actor: &SupportUserDto,
        tg_file_id: &str,
        kind: AttachmentKind,
        caption: Option<&str>,
    ) -> Result<AnswerAttachmentAddedEvent> {
        policy::require(actor, Capability::AnswerQuestions)?;

        let user = self.load_actor(actor).await?;
        let question_id = user.current_question_id.ok_or(SupportDeskError::NoBoundQuestion)?;
        let mut answer = self
            .db
            .answers
            .get_last_for_question(question_id)
            .await?
            .ok_or(SupportDeskError::NoLastAnswer)?;

        let caption = caption.map(AttachmentCaption::new).transpose()?;
        let attachment = Attachment::new(tg_file_id, kind, caption)?;
        answer.add_attachment(attachment.clone());
        self.db.answers.update(&answer).await?;

        let question = self.get_question_by_id(question_id).await?;
        let asked_by = self.get_regular_user(question.regular_user_id).await?;

        info!(
            support_user_id = user.id.value(),
            answer_id = answer.id.value(),
            "Attachment added to last answer"
        );
        Ok(AnswerAttachmentAddedEvent {
            attachment: AttachmentDto::from(&attachment),
            answer: (&answer).into(),
            support_user: SupportUserDto::from(&user),
            asked_by: (&asked_by).into(),
        })
    }

    /// Create a new role. Name uniqueness is checked here, before entity
    /// creation, since the entity alone cannot enforce it.
    pub async fn add_role(
        &self,
        actor: &SupportUserDto,
        name: &str,
        description: &str,
        can_answer_questions: bool,
        can_manage_support_users: bool,
    ) -> Result<RoleDto> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let name = RoleName::new(name)?;
        if self.db.roles.get_by_name(name.as_str()).await?.is_some() {
            return Err(SupportDeskError::RoleNameDuplication {
                name: name.into_string(),
            });
        }

        let role = self
            .db
            .roles
            .add(NewRole::new(
                name,
                RoleDescription::new(description)?,
                RolePermissions::new(can_answer_questions, can_manage_support_users),
            ))
            .await?;

        info!(role_id = role.id.value(), name = %role.name, "Role created");
        Ok(RoleDto::from(&role))
    }

    pub async fn get_role(&self, actor: &SupportUserDto, role_id: i64) -> Result<RoleDto> {
        policy::require(actor, Capability::ManageSupportUsers)?;
        let role = self.get_role_by_id(RoleId::new(role_id)).await?;
        Ok(RoleDto::from(&role))
    }

    pub async fn get_all_roles(&self, actor: &SupportUserDto) -> Result<Vec<RoleDto>> {
        policy::require(actor, Capability::ManageSupportUsers)?;
        let roles = self.db.roles.get_all().await?;
        Ok(roles.iter().map(RoleDto::from).collect())
    }

    /// Delete a role. Support users still holding it fall back to
    /// "no role", releasing question bindings with it.
    pub async fn delete_role(&self, actor: &SupportUserDto, role_id: i64) -> Result<()> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let role = self.get_role_by_id(RoleId::new(role_id)).await?;
        let holders = self.db.support_users.get_by_role_id(role.id).await?;
        for mut holder in holders {
            holder.remove_role()?;
            self.db.support_users.update(&holder).await?;
        }
        self.db.roles.delete(role.id).await?;

        info!(role_id = role.id.value(), name = %role.name, "Role deleted");
        Ok(())
    }

    /// Register an existing regular user as a staff member with a role.
    pub async fn add_support_user(
        &self,
        actor: &SupportUserDto,
        target_telegram_id: i64,
        role_id: i64,
        descriptive_name: &str,
    ) -> Result<SupportUserDto> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let role = self.get_role_by_id(RoleId::new(role_id)).await?;
        if self
            .db
            .regular_users
            .get_by_telegram_id(target_telegram_id)
            .await?
            .is_none()
        {
            return Err(SupportDeskError::RegularUserNotFound {
                user_id: target_telegram_id,
            });
        }
        if self
            .db
            .support_users
            .get_by_telegram_id(target_telegram_id)
            .await?
            .is_some()
        {
            return Err(SupportDeskError::SupportUserAlreadyExists {
                telegram_id: target_telegram_id,
            });
        }

        let name = DescriptiveName::new(descriptive_name)?;
        let user = self
            .db
            .support_users
            .add(NewSupportUser::member(
                target_telegram_id,
                name,
                Some(SupportUserRole::from(&role)),
            ))
            .await?;

        info!(
            support_user_id = user.id.value(),
            telegram_id = target_telegram_id,
            role_id = role.id.value(),
            "Support user added"
        );
        Ok(SupportUserDto::from(&user))
    }

    /// Assign a different role to a staff member. Losing the answering
    /// permission releases any question binding.
    pub async fn assign_role(
        &self,
        actor: &SupportUserDto,
        target_telegram_id: i64,
        role_id: i64,
    ) -> Result<SupportUserDto> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let role = self.get_role_by_id(RoleId::new(role_id)).await?;
        let mut target = self.get_support_user_by_tg_id(target_telegram_id).await?;
        target.assign_role(SupportUserRole::from(&role))?;
        self.db.support_users.update(&target).await?;

        info!(
            support_user_id = target.id.value(),
            role_id = role.id.value(),
            "Role assigned"
        );
        Ok(SupportUserDto::from(&target))
    }

    /// Remove a staff member's role, releasing any question binding.
    pub async fn remove_role(
        &self,
        actor: &SupportUserDto,
        target_telegram_id: i64,
    ) -> Result<SupportUserDto> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let mut target = self.get_support_user_by_tg_id(target_telegram_id).await?;
        target.remove_role()?;
        self.db.support_users.update(&target).await?;

        info!(support_user_id = target.id.value(), "Role removed");
        Ok(SupportUserDto::from(&target))
    }

    pub async fn activate_support_user(
        &self,
        actor: &SupportUserDto,
        target_telegram_id: i64,
    ) -> Result<()> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let mut target = self.get_support_user_by_tg_id(target_telegram_id).await?;
        target.activate()?;
        self.db.support_users.update(&target).await?;

        info!(support_user_id = target.id.value(), "Support user activated");
        Ok(())
    }

    /// Deactivate a staff member. The entity refuses for the owner; that
    /// refusal surfaces to the caller as a permission failure.
    pub async fn deactivate_support_user(
        &self,
        actor: &SupportUserDto,
        target_telegram_id: i64,
    ) -> Result<()> {
        policy::require(actor, Capability::ManageSupportUsers)?;

        let mut target = self.get_support_user_by_tg_id(target_telegram_id).await?;
        target.deactivate().map_err(|err| match err {
            SupportDeskError::IncorrectAction(reason) => SupportDeskError::PermissionDenied(reason),
            other => other,
        })?;
        self.db.support_users.update(&target).await?;

        info!(support_user_id = target.id.value(), "Support user deactivated");
        Ok(())
    }

    /// Staff roster listing
    pub async fn get_all_support_users(
        &self,
        actor: &SupportUserDto,
    ) -> Result<Vec<SupportUserDto>> {
        policy::require(actor, Capability::ManageSupportUsers)?;
        let users = self.db.support_users.get_all().await?;
        Ok(users.iter().map(SupportUserDto::from).collect())
    }

    async fn load_actor(&self, actor: &SupportUserDto) -> Result<SupportUser> {
        self.db
            .support_users
            .get_by_id(SupportUserId::new(actor.id))
            .await?
            .ok_or(SupportDeskError::SupportUserNotFound { user_id: actor.id })
    }

    async fn get_support_user_by_tg_id(&self, telegram_id: i64) -> Result<SupportUser> {
        self.db
            .support_users
            .get_by_telegram_id(telegram_id)
            .await?
            .ok_or(SupportDeskError::SupportUserNotFound { user_id: telegram_id })
    }

    async fn get_role_by_id(&self, role_id: RoleId) -> Result<Role> {
        self.db
            .roles
            .get_by_id(role_id)
            .await?
            .ok_or(SupportDeskError::RoleNotFound { role_id: role_id.value() })
    }

    async fn get_question_by_id(&self, question_id: QuestionId) -> Result<Question> {
        self.db
            .questions
            .get_by_id(question_id)
            .await?
            .ok_or(SupportDeskError::QuestionNotFound {
                question_id: question_id.value(),
            })
    }

    async fn get_question_by_tg_id(&self, tg_message_id: i64) -> Result<Question> {
        self.db
            .questions
            .get_by_tg_message_id(tg_message_id)
            .await?
            .ok_or(SupportDeskError::QuestionNotFound {
                question_id: tg_message_id,
            })
    }

    async fn get_regular_user(&self, id: RegularUserId) -> Result<RegularUser> {
        self.db
            .regular_users
            .get_by_id(id)
            .await?
            .ok_or(SupportDeskError::RegularUserNotFound { user_id: id.value() })
    }
}
