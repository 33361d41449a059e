//! Read-side query integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::TestContext;
use SupportDesk::SupportDeskError;

#[tokio::test]
async fn test_question_info_joins_asker_and_answers() -> anyhow::Result<()> {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let staff = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;
    let (asker, _) = ctx.ask(77, "Hi", 100).await;
    ctx.ask(77, "Another", 101).await;

    ctx.support().bind_question(&staff, 100).await?;
    ctx.support().answer_bound_question(&staff, "Hello", 200).await?;

    let info = ctx.services.question_queries.get_question_info(100).await?;

    assert_eq!(info.question.tg_message_id, 100);
    assert_eq!(info.asked_by.id, asker.id);
    assert_eq!(info.answers.len(), 1);
    assert_eq!(info.answers[0].message, "Hello");
    assert_eq!(info.asker_statistics.asked_questions, 2);
    assert_eq!(info.asker_statistics.answered_questions, 1);
    assert_eq!(info.asker_statistics.unanswered_questions, 1);
    Ok(())
}

#[tokio::test]
async fn test_answer_info_joins_question_and_author() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let staff = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;
    ctx.ask(77, "Hi", 100).await;

    ctx.support().bind_question(&staff, 100).await.unwrap();
    ctx.support()
        .answer_bound_question(&staff, "Hello", 200)
        .await
        .unwrap();

    let info = ctx
        .services
        .question_queries
        .get_answer_info(200)
        .await
        .unwrap();
    assert_eq!(info.answer.tg_message_id, 200);
    assert_eq!(info.question.tg_message_id, 100);
    assert_eq!(info.answered_by.id, staff.id);

    assert_matches!(
        ctx.services.question_queries.get_answer_info(404).await,
        Err(SupportDeskError::AnswerNotFound { answer_id: 404 })
    );
}

#[tokio::test]
async fn test_open_questions_listing() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let staff = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;
    ctx.ask(77, "first", 100).await;
    ctx.ask(88, "second", 101).await;

    ctx.support().bind_question(&staff, 100).await.unwrap();
    ctx.support()
        .answer_bound_question(&staff, "Hello", 200)
        .await
        .unwrap();

    let open = ctx.services.question_queries.get_open_questions().await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].tg_message_id, 101);
}

#[tokio::test]
async fn test_support_user_info_with_role_and_counters() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let staff = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;
    ctx.ask(77, "Hi", 100).await;
    ctx.support().bind_question(&staff, 100).await.unwrap();
    ctx.support()
        .answer_bound_question(&staff, "Hello", 200)
        .await
        .unwrap();

    let info = ctx
        .services
        .staff_queries
        .get_support_user_info(55)
        .await
        .unwrap();
    assert_eq!(info.support_user.id, staff.id);
    assert_eq!(info.role.as_ref().unwrap().name, "Support");
    assert_eq!(info.statistics.total_answers, 1);
    assert_eq!(info.statistics.unestimated_answers, 1);
}

#[tokio::test]
async fn test_support_user_info_survives_role_deletion() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;

    ctx.support().delete_role(&owner, role.id).await.unwrap();

    let info = ctx
        .services
        .staff_queries
        .get_support_user_info(55)
        .await
        .unwrap();
    assert!(info.role.is_none());
}

#[tokio::test]
async fn test_role_info_counts_members() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;
    ctx.add_staff(&owner, 66, role.id, "John").await;

    let info = ctx.services.staff_queries.get_role_info(role.id).await.unwrap();
    assert_eq!(info.role.name, "Support");
    assert_eq!(info.statistics.total_users, 2);

    assert_matches!(
        ctx.services.staff_queries.get_role_info(999).await,
        Err(SupportDeskError::RoleNotFound { role_id: 999 })
    );
}

#[tokio::test]
async fn test_list_support_users_includes_owner() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;

    let roster = ctx.services.staff_queries.list_support_users().await.unwrap();
    assert_eq!(roster.len(), 2);
    let boss = roster.iter().find(|info| info.support_user.is_owner).unwrap();
    assert!(boss.role.is_none());
}

#[tokio::test]
async fn test_global_report_shape() -> anyhow::Result<()> {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let staff = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;
    let (asker, _) = ctx.ask(77, "Hi", 100).await;
    ctx.support().bind_question(&staff, 100).await?;
    ctx.support().answer_bound_question(&staff, "Hello", 200).await?;
    ctx.regular().estimate_answer_as_useful(&asker, 200).await?;

    let report = ctx.services.report_queries.get_global_report().await?;
    assert_eq!(report["users"]["regular"], 2);
    assert_eq!(report["users"]["support"], 2);
    assert_eq!(report["questions"]["total"], 1);
    assert_eq!(report["questions"]["answered"], 1);
    assert_eq!(report["questions"]["unanswered"], 0);
    assert_eq!(report["answers"]["useful"], 1);
    Ok(())
}
