//! Role and staff administration integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::TestContext;
use SupportDesk::SupportDeskError;

#[tokio::test]
async fn test_role_name_duplication_is_rejected() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;

    ctx.create_role(&owner, "Support", true, false).await;
    let err = ctx
        .support()
        .add_role(&owner, "Support", "second attempt", false, false)
        .await
        .unwrap_err();
    assert_matches!(err, SupportDeskError::RoleNameDuplication { name } if name == "Support");

    // Only the first role exists
    let roles = ctx.support().get_all_roles(&owner).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert!(roles[0].permissions.can_answer_questions);
}

#[tokio::test]
async fn test_add_support_user_with_role() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;

    ctx.regular().authorize(55).await.unwrap();
    let staff = ctx
        .support()
        .add_support_user(&owner, 55, role.id, "Jane")
        .await
        .unwrap();

    assert!(!staff.is_owner);
    assert!(staff.is_active);
    let held = staff.role.unwrap();
    assert_eq!(held.role_id, role.id);
    assert!(held.permissions.can_answer_questions);
    assert!(!held.permissions.can_manage_support_users);
}

#[tokio::test]
async fn test_add_support_user_preconditions() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;

    // Unknown role
    ctx.regular().authorize(55).await.unwrap();
    assert_matches!(
        ctx.support().add_support_user(&owner, 55, 999, "Jane").await,
        Err(SupportDeskError::RoleNotFound { role_id: 999 })
    );

    // Target must already exist as a regular user
    assert_matches!(
        ctx.support().add_support_user(&owner, 66, role.id, "Ghost").await,
        Err(SupportDeskError::RegularUserNotFound { user_id: 66 })
    );

    // Identity already promoted
    ctx.support()
        .add_support_user(&owner, 55, role.id, "Jane")
        .await
        .unwrap();
    assert_matches!(
        ctx.support().add_support_user(&owner, 55, role.id, "Jane").await,
        Err(SupportDeskError::SupportUserAlreadyExists { telegram_id: 55 })
    );
}

#[tokio::test]
async fn test_management_surface_requires_permission() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    let agent = ctx.add_staff(&owner, 55, role.id, "Jane").await;

    assert_matches!(
        ctx.support().add_role(&agent, "Helpers", "", true, false).await,
        Err(SupportDeskError::PermissionDenied(_))
    );
    assert_matches!(
        ctx.support().delete_role(&agent, role.id).await,
        Err(SupportDeskError::PermissionDenied(_))
    );
    assert_matches!(
        ctx.support().get_all_roles(&agent).await,
        Err(SupportDeskError::PermissionDenied(_))
    );
    assert_matches!(
        ctx.support().get_all_support_users(&agent).await,
        Err(SupportDeskError::PermissionDenied(_))
    );

    // The role survives the denied deletion
    let still_there = ctx.support().get_role(&owner, role.id).await.unwrap();
    assert_eq!(still_there.name, "Support");
}

#[tokio::test]
async fn test_delete_role_falls_holders_back_to_no_role() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    let agent = ctx.add_staff(&owner, 55, role.id, "Jane").await;

    // The agent is mid-work on a bound question
    ctx.ask(77, "Hi", 100).await;
    ctx.support().bind_question(&agent, 100).await.unwrap();

    ctx.support().delete_role(&owner, role.id).await.unwrap();

    assert_matches!(
        ctx.support().get_role(&owner, role.id).await,
        Err(SupportDeskError::RoleNotFound { .. })
    );

    // Role gone, binding released, permissions gone with the role
    let reloaded = ctx.support().authorize(55).await.unwrap();
    assert!(reloaded.role.is_none());
    assert_eq!(reloaded.bound_question_id, None);
    assert_matches!(
        ctx.support().bind_question(&reloaded, 100).await,
        Err(SupportDeskError::PermissionDenied(_))
    );
}

#[tokio::test]
async fn test_assign_role_transitions() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let support = ctx.create_role(&owner, "Support", true, false).await;
    let audit = ctx.create_role(&owner, "Audit", false, true).await;
    let agent = ctx.add_staff(&owner, 55, support.id, "Jane").await;

    // Same role again is a state conflict
    assert_matches!(
        ctx.support().assign_role(&owner, 55, support.id).await,
        Err(SupportDeskError::SameValueAssigning(_))
    );

    // Switching to a role without the answering permission releases the binding
    ctx.ask(77, "Hi", 100).await;
    ctx.support().bind_question(&agent, 100).await.unwrap();
    let switched = ctx.support().assign_role(&owner, 55, audit.id).await.unwrap();
    assert_eq!(switched.role.unwrap().role_id, audit.id);
    assert_eq!(switched.bound_question_id, None);

    // The owner can never hold a role
    assert_matches!(
        ctx.support()
            .assign_role(&owner, owner.telegram_id, support.id)
            .await,
        Err(SupportDeskError::IncorrectAction(_))
    );
}

#[tokio::test]
async fn test_remove_role_transitions() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;

    let removed = ctx.support().remove_role(&owner, 55).await.unwrap();
    assert!(removed.role.is_none());

    assert_matches!(
        ctx.support().remove_role(&owner, 55).await,
        Err(SupportDeskError::SameValueAssigning(_))
    );
    assert_matches!(
        ctx.support().remove_role(&owner, owner.telegram_id).await,
        Err(SupportDeskError::IncorrectAction(_))
    );
}

#[tokio::test]
async fn test_activation_lifecycle() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;

    // Activating an already-active user is detected
    assert_matches!(
        ctx.support().activate_support_user(&owner, 55).await,
        Err(SupportDeskError::SameValueAssigning(_))
    );

    ctx.support().deactivate_support_user(&owner, 55).await.unwrap();
    assert_matches!(
        ctx.support().deactivate_support_user(&owner, 55).await,
        Err(SupportDeskError::SameValueAssigning(_))
    );

    // Unknown target
    assert_matches!(
        ctx.support().deactivate_support_user(&owner, 404).await,
        Err(SupportDeskError::SupportUserNotFound { user_id: 404 })
    );
}

#[tokio::test]
async fn test_owner_deactivation_is_a_permission_failure() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let manager = ctx
        .staff_with_permissions(&owner, 55, "Manager", false, true)
        .await;

    for _ in 0..2 {
        assert_matches!(
            ctx.support()
                .deactivate_support_user(&manager, owner.telegram_id)
                .await,
            Err(SupportDeskError::PermissionDenied(_))
        );
    }
    assert!(ctx.support().authorize(owner.telegram_id).await.is_ok());
}

#[tokio::test]
async fn test_deactivation_releases_binding() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let agent = ctx
        .staff_with_permissions(&owner, 55, "Support", true, false)
        .await;

    ctx.ask(77, "Hi", 100).await;
    ctx.support().bind_question(&agent, 100).await.unwrap();

    ctx.support().deactivate_support_user(&owner, 55).await.unwrap();
    ctx.support().activate_support_user(&owner, 55).await.unwrap();

    let reloaded = ctx.support().authorize(55).await.unwrap();
    assert_eq!(reloaded.bound_question_id, None);
}

#[tokio::test]
async fn test_roster_listing() {
    let ctx = TestContext::new();
    let owner = ctx.init_owner().await;
    let role = ctx.create_role(&owner, "Support", true, false).await;
    ctx.add_staff(&owner, 55, role.id, "Jane").await;
    ctx.add_staff(&owner, 66, role.id, "John").await;

    let roster = ctx.support().get_all_support_users(&owner).await.unwrap();
    assert_eq!(roster.len(), 3);
    assert!(roster.iter().any(|member| member.is_owner));
    assert_eq!(roster.iter().filter(|member| !member.is_owner).count(), 2);
}
