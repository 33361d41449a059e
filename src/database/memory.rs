//! In-memory persistence adapter
//!
//! The reference implementation of every repository contract plus the
//! statistics contract, over one shared store. Each repository call takes
//! the store lock exactly once, so a single call is atomic but no
//! cross-call transaction exists — the same guarantees a
//! transaction-per-call SQL adapter provides.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use crate::database::repositories::{
    AnswerRepository, QuestionRepository, RegularUserRepository, RoleRepository,
    SupportUserRepository,
};
use crate::models::answer::{Answer, NewAnswer};
use crate::models::question::{NewQuestion, Question};
use crate::models::regular_user::{NewRegularUser, RegularUser};
use crate::models::role::{NewRole, Role};
use crate::models::support_user::{NewSupportUser, SupportUser};
use crate::models::values::{AnswerId, QuestionId, RegularUserId, RoleId, SupportUserId};
use crate::services::statistics::{
    GlobalStatistics, RegularUserStatistics, RoleStatistics, StatisticsService,
    SupportUserStatistics,
};
use crate::utils::errors::{Result, SupportDeskError};

#[derive(Debug, Default)]
struct StoreInner {
    next_role_id: i64,
    next_regular_user_id: i64,
    next_support_user_id: i64,
    next_question_id: i64,
    next_answer_id: i64,
    roles: HashMap<i64, Role>,
    regular_users: HashMap<i64, RegularUser>,
    support_users: HashMap<i64, SupportUser>,
    questions: HashMap<i64, Question>,
    answers: HashMap<i64, Answer>,
}

fn next(sequence: &mut i64) -> i64 {
    *sequence += 1;
    *sequence
}

/// Shared in-memory store behind every memory repository handle
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct MemoryRoleRepository {
    store: MemoryStore,
}

impl MemoryRoleRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoleRepository for MemoryRoleRepository {
    async fn add(&self, role: NewRole) -> Result<Role> {
        let mut inner = self.store.inner.write().await;
        if inner.roles.values().any(|existing| existing.name == role.name) {
            return Err(SupportDeskError::EntityAlreadyExists(format!(
                "role name {}",
                role.name
            )));
        }
        let id = next(&mut inner.next_role_id);
        let role = Role {
            id: RoleId::new(id),
            name: role.name,
            description: role.description,
            permissions: role.permissions,
            created_at: Utc::now(),
        };
        inner.roles.insert(id, role.clone());
        Ok(role)
    }

    async fn update(&self, role: &Role) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.roles.insert(role.id.value(), role.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: RoleId) -> Result<Option<Role>> {
        let inner = self.store.inner.read().await;
        Ok(inner.roles.get(&id.value()).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .roles
            .values()
            .find(|role| role.name.as_str() == name)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Role>> {
        let inner = self.store.inner.read().await;
        let mut roles: Vec<Role> = inner.roles.values().cloned().collect();
        roles.sort_by_key(|role| role.id.value());
        Ok(roles)
    }

    async fn delete(&self, id: RoleId) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.roles.remove(&id.value());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryRegularUserRepository {
    store: MemoryStore,
}

impl MemoryRegularUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegularUserRepository for MemoryRegularUserRepository {
    async fn add(&self, user: NewRegularUser) -> Result<RegularUser> {
        let mut inner = self.store.inner.write().await;
        if inner
            .regular_users
            .values()
            .any(|existing| existing.telegram_id == user.telegram_id)
        {
            return Err(SupportDeskError::EntityAlreadyExists(format!(
                "regular user telegram id {}",
                user.telegram_id
            )));
        }
        let id = next(&mut inner.next_regular_user_id);
        let user = RegularUser {
            id: RegularUserId::new(id),
            telegram_id: user.telegram_id,
            joined_at: Utc::now(),
        };
        inner.regular_users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &RegularUser) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.regular_users.insert(user.id.value(), user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: RegularUserId) -> Result<Option<RegularUser>> {
        let inner = self.store.inner.read().await;
        Ok(inner.regular_users.get(&id.value()).cloned())
    }

    async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<Option<RegularUser>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .regular_users
            .values()
            .find(|user| user.telegram_id == telegram_id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<RegularUser>> {
        let inner = self.store.inner.read().await;
        let mut users: Vec<RegularUser> = inner.regular_users.values().cloned().collect();
        users.sort_by_key(|user| user.id.value());
        Ok(users)
    }

    async fn delete(&self, id: RegularUserId) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.regular_users.remove(&id.value());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemorySupportUserRepository {
    store: MemoryStore,
}

impl MemorySupportUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SupportUserRepository for MemorySupportUserRepository {
    async fn add(&self, user: NewSupportUser) -> Result<SupportUser> {
        let mut inner = self.store.inner.write().await;
        if inner
            .support_users
            .values()
            .any(|existing| existing.telegram_id == user.telegram_id)
        {
            return Err(SupportDeskError::EntityAlreadyExists(format!(
                "support user telegram id {}",
                user.telegram_id
            )));
        }
        let id = next(&mut inner.next_support_user_id);
        let user = SupportUser {
            id: SupportUserId::new(id),
            telegram_id: user.telegram_id,
            descriptive_name: user.descriptive_name,
            role: user.role,
            current_question_id: None,
            joined_at: Utc::now(),
            is_owner: user.is_owner,
            is_active: true,
        };
        inner.support_users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &SupportUser) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.support_users.insert(user.id.value(), user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: SupportUserId) -> Result<Option<SupportUser>> {
        let inner = self.store.inner.read().await;
        Ok(inner.support_users.get(&id.value()).cloned())
    }

    async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<Option<SupportUser>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .support_users
            .values()
            .find(|user| user.telegram_id == telegram_id)
            .cloned())
    }

    async fn get_owner(&self) -> Result<Option<SupportUser>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .support_users
            .values()
            .find(|user| user.is_owner)
            .cloned())
    }

    async fn get_by_role_id(&self, role_id: RoleId) -> Result<Vec<SupportUser>> {
        let inner = self.store.inner.read().await;
        let mut users: Vec<SupportUser> = inner
            .support_users
            .values()
            .filter(|user| user.role.map(|role| role.role_id) == Some(role_id))
            .cloned()
            .collect();
        users.sort_by_key(|user| user.id.value());
        Ok(users)
    }

    async fn get_all(&self) -> Result<Vec<SupportUser>> {
        let inner = self.store.inner.read().await;
        let mut users: Vec<SupportUser> = inner.support_users.values().cloned().collect();
        users.sort_by_key(|user| user.id.value());
        Ok(users)
    }

    async fn delete(&self, id: SupportUserId) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.support_users.remove(&id.value());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryQuestionRepository {
    store: MemoryStore,
}

impl MemoryQuestionRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestionRepository {
    async fn add(&self, question: NewQuestion) -> Result<Question> {
        let mut inner = self.store.inner.write().await;
        if inner
            .questions
            .values()
            .any(|existing| existing.tg_message_id == question.tg_message_id)
        {
            return Err(SupportDeskError::EntityAlreadyExists(format!(
                "question telegram message id {}",
                question.tg_message_id
            )));
        }
        let id = next(&mut inner.next_question_id);
        let question = Question {
            id: QuestionId::new(id),
            regular_user_id: question.regular_user_id,
            message: question.message,
            tg_message_id: question.tg_message_id,
            attachments: vec![],
            created_at: Utc::now(),
        };
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn update(&self, question: &Question) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.questions.insert(question.id.value(), question.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        let inner = self.store.inner.read().await;
        Ok(inner.questions.get(&id.value()).cloned())
    }

    async fn get_by_tg_message_id(&self, tg_message_id: i64) -> Result<Option<Question>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .questions
            .values()
            .find(|question| question.tg_message_id == tg_message_id)
            .cloned())
    }

    async fn get_by_regular_user(&self, regular_user_id: RegularUserId) -> Result<Vec<Question>> {
        let inner = self.store.inner.read().await;
        let mut questions: Vec<Question> = inner
            .questions
            .values()
            .filter(|question| question.regular_user_id == regular_user_id)
            .cloned()
            .collect();
        questions.sort_by_key(|question| question.id.value());
        Ok(questions)
    }

    async fn get_last_asked(&self, regular_user_id: RegularUserId) -> Result<Option<Question>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|question| question.regular_user_id == regular_user_id)
            .max_by_key(|question| question.id.value())
            .cloned())
    }

    async fn get_random_unbound_unanswered(&self) -> Result<Option<Question>> {
        let inner = self.store.inner.read().await;
        let bound: HashSet<i64> = inner
            .support_users
            .values()
            .filter_map(|user| user.current_question_id.map(|id| id.value()))
            .collect();
        let answered: HashSet<i64> = inner
            .answers
            .values()
            .map(|answer| answer.question_id.value())
            .collect();
        let pool: Vec<&Question> = inner
            .questions
            .values()
            .filter(|question| {
                !bound.contains(&question.id.value()) && !answered.contains(&question.id.value())
            })
            .collect();
        Ok(pool.choose(&mut rand::thread_rng()).map(|question| (*question).clone()))
    }

    async fn get_unanswered(&self) -> Result<Vec<Question>> {
        let inner = self.store.inner.read().await;
        let answered: HashSet<i64> = inner
            .answers
            .values()
            .map(|answer| answer.question_id.value())
            .collect();
        let mut questions: Vec<Question> = inner
            .questions
            .values()
            .filter(|question| !answered.contains(&question.id.value()))
            .cloned()
            .collect();
        questions.sort_by_key(|question| question.id.value());
        Ok(questions)
    }

    async fn get_all(&self) -> Result<Vec<Question>> {
        let inner = self.store.inner.read().await;
        let mut questions: Vec<Question> = inner.questions.values().cloned().collect();
        questions.sort_by_key(|question| question.id.value());
        Ok(questions)
    }

    async fn delete(&self, id: QuestionId) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.questions.remove(&id.value());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryAnswerRepository {
    store: MemoryStore,
}

impl MemoryAnswerRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AnswerRepository for MemoryAnswerRepository {
    async fn add(&self, answer: NewAnswer) -> Result<Answer> {
        let mut inner = self.store.inner.write().await;
        if inner
            .answers
            .values()
            .any(|existing| existing.tg_message_id == answer.tg_message_id)
        {
            return Err(SupportDeskError::EntityAlreadyExists(format!(
                "answer telegram message id {}",
                answer.tg_message_id
            )));
        }
        let id = next(&mut inner.next_answer_id);
        let answer = Answer {
            id: AnswerId::new(id),
            support_user_id: answer.support_user_id,
            question_id: answer.question_id,
            message: answer.message,
            tg_message_id: answer.tg_message_id,
            is_useful: None,
            attachments: vec![],
            created_at: Utc::now(),
        };
        inner.answers.insert(id, answer.clone());
        Ok(answer)
    }

    async fn update(&self, answer: &Answer) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.answers.insert(answer.id.value(), answer.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: AnswerId) -> Result<Option<Answer>> {
        let inner = self.store.inner.read().await;
        Ok(inner.answers.get(&id.value()).cloned())
    }

    async fn get_by_tg_message_id(&self, tg_message_id: i64) -> Result<Option<Answer>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .answers
            .values()
            .find(|answer| answer.tg_message_id == tg_message_id)
            .cloned())
    }

    async fn get_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>> {
        let inner = self.store.inner.read().await;
        let mut answers: Vec<Answer> = inner
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect();
        answers.sort_by_key(|answer| answer.id.value());
        Ok(answers)
    }

    async fn get_last_for_question(&self, question_id: QuestionId) -> Result<Option<Answer>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .max_by_key(|answer| answer.id.value())
            .cloned())
    }

    async fn get_by_support_user(&self, support_user_id: SupportUserId) -> Result<Vec<Answer>> {
        let inner = self.store.inner.read().await;
        let mut answers: Vec<Answer> = inner
            .answers
            .values()
            .filter(|answer| answer.support_user_id == support_user_id)
            .cloned()
            .collect();
        answers.sort_by_key(|answer| answer.id.value());
        Ok(answers)
    }

    async fn get_all(&self) -> Result<Vec<Answer>> {
        let inner = self.store.inner.read().await;
        let mut answers: Vec<Answer> = inner.answers.values().cloned().collect();
        answers.sort_by_key(|answer| answer.id.value());
        Ok(answers)
    }

    async fn delete(&self, id: AnswerId) -> Result<()> {
        let mut inner = self.store.inner.write().await;
        inner.answers.remove(&id.value());
        Ok(())
    }
}

/// Statistics over the in-memory store
#[derive(Debug, Clone)]
pub struct MemoryStatisticsService {
    store: MemoryStore,
}

impl MemoryStatisticsService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StatisticsService for MemoryStatisticsService {
    async fn regular_user_statistics(&self, id: RegularUserId) -> Result<RegularUserStatistics> {
        let inner = self.store.inner.read().await;
        let question_ids: HashSet<i64> = inner
            .questions
            .values()
            .filter(|question| question.regular_user_id == id)
            .map(|question| question.id.value())
            .collect();
        let answers: Vec<&Answer> = inner
            .answers
            .values()
            .filter(|answer| question_ids.contains(&answer.question_id.value()))
            .collect();
        let answered: HashSet<i64> = answers
            .iter()
            .map(|answer| answer.question_id.value())
            .collect();

        let asked_questions = question_ids.len() as i64;
        let answered_questions = answered.len() as i64;
        Ok(RegularUserStatistics {
            asked_questions,
            answered_questions,
            unanswered_questions: asked_questions - answered_questions,
            useful_answers: answers.iter().filter(|a| a.is_useful == Some(true)).count() as i64,
            unuseful_answers: answers.iter().filter(|a| a.is_useful == Some(false)).count() as i64,
            unestimated_answers: answers.iter().filter(|a| a.is_useful.is_none()).count() as i64,
        })
    }

    async fn support_user_statistics(&self, id: SupportUserId) -> Result<SupportUserStatistics> {
        let inner = self.store.inner.read().await;
        let answers: Vec<&Answer> = inner
            .answers
            .values()
            .filter(|answer| answer.support_user_id == id)
            .collect();
        Ok(SupportUserStatistics {
            total_answers: answers.len() as i64,
            useful_answers: answers.iter().filter(|a| a.is_useful == Some(true)).count() as i64,
            unuseful_answers: answers.iter().filter(|a| a.is_useful == Some(false)).count() as i64,
            unestimated_answers: answers.iter().filter(|a| a.is_useful.is_none()).count() as i64,
        })
    }

    async fn role_statistics(&self, id: RoleId) -> Result<RoleStatistics> {
        let inner = self.store.inner.read().await;
        let total_users = inner
            .support_users
            .values()
            .filter(|user| user.role.map(|role| role.role_id) == Some(id))
            .count() as i64;
        Ok(RoleStatistics { total_users })
    }

    async fn global_statistics(&self) -> Result<GlobalStatistics> {
        let inner = self.store.inner.read().await;
        let answered: HashSet<i64> = inner
            .answers
            .values()
            .map(|answer| answer.question_id.value())
            .collect();
        let total_questions = inner.questions.len() as i64;
        let answered_questions = inner
            .questions
            .values()
            .filter(|question| answered.contains(&question.id.value()))
            .count() as i64;
        Ok(GlobalStatistics {
            total_regular_users: inner.regular_users.len() as i64,
            total_support_users: inner.support_users.len() as i64,
            total_roles: inner.roles.len() as i64,
            total_questions,
            answered_questions,
            unanswered_questions: total_questions - answered_questions,
            total_answers: inner.answers.len() as i64,
            useful_answers: inner
                .answers
                .values()
                .filter(|a| a.is_useful == Some(true))
                .count() as i64,
            unuseful_answers: inner
                .answers
                .values()
                .filter(|a| a.is_useful == Some(false))
                .count() as i64,
        })
    }
}
