//! Shared integration test helpers
//!
//! Builds the whole service stack over the in-memory database and provides
//! seed functions for the common fixtures (owner, roles, staff, questions).

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use SupportDesk::models::dto::{QuestionDto, RegularUserDto, RoleDto, SupportUserDto};
use SupportDesk::services::{RegularUserService, ServiceFactory, SupportUserService};
use SupportDesk::Settings;

pub const OWNER_TG_ID: i64 = 1000;
pub const OWNER_PASSWORD: &str = "test-owner-password";

pub struct TestContext {
    pub services: ServiceFactory,
}

impl TestContext {
    pub fn new() -> Self {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings.bot.owner_password = OWNER_PASSWORD.to_string();
        Self {
            services: ServiceFactory::in_memory(settings),
        }
    }

    pub fn support(&self) -> &SupportUserService {
        &self.services.support_user_service
    }

    pub fn regular(&self) -> &RegularUserService {
        &self.services.regular_user_service
    }

    /// Initialize and authorize the owner
    pub async fn init_owner(&self) -> SupportUserDto {
        self.support()
            .initialize_owner(OWNER_TG_ID, OWNER_PASSWORD, Some("Boss"))
            .await
            .expect("owner initialization failed");
        self.support()
            .authorize(OWNER_TG_ID)
            .await
            .expect("owner authorization failed")
    }

    pub async fn create_role(
        &self,
        owner: &SupportUserDto,
        name: &str,
        can_answer_questions: bool,
        can_manage_support_users: bool,
    ) -> RoleDto {
        self.support()
            .add_role(owner, name, "", can_answer_questions, can_manage_support_users)
            .await
            .expect("role creation failed")
    }

    /// Register a regular user for the identity and promote it to staff
    /// with the given role, returning the authorized staff snapshot.
    pub async fn add_staff(
        &self,
        owner: &SupportUserDto,
        telegram_id: i64,
        role_id: i64,
        name: &str,
    ) -> SupportUserDto {
        self.regular()
            .authorize(telegram_id)
            .await
            .expect("regular user registration failed");
        self.support()
            .add_support_user(owner, telegram_id, role_id, name)
            .await
            .expect("support user creation failed");
        self.support()
            .authorize(telegram_id)
            .await
            .expect("staff authorization failed")
    }

    /// One-call fixture: a role with the given permissions plus a staff
    /// member holding it.
    pub async fn staff_with_permissions(
        &self,
        owner: &SupportUserDto,
        telegram_id: i64,
        role_name: &str,
        can_answer_questions: bool,
        can_manage_support_users: bool,
    ) -> SupportUserDto {
        let role = self
            .create_role(owner, role_name, can_answer_questions, can_manage_support_users)
            .await;
        self.add_staff(owner, telegram_id, role.id, role_name).await
    }

    /// Register a regular user and ask a question on their behalf
    pub async fn ask(
        &self,
        telegram_id: i64,
        text: &str,
        tg_message_id: i64,
    ) -> (RegularUserDto, QuestionDto) {
        let user = self
            .regular()
            .authorize(telegram_id)
            .await
            .expect("regular user registration failed");
        let question = self
            .regular()
            .ask_question(&user, text, tg_message_id)
            .await
            .expect("asking question failed");
        (user, question)
    }
}
