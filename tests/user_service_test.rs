use std::sync::Arc;

use async_trait::async_trait;
use cinebooker::notify::NoopNotifier;
use cinebooker::services::user_service::UserService;
use cinebooker::storage::memory::MemoryStore;
use cinebooker::storage::UserStore;
use cinebooker::utils::error::AppError;
use test_context::{test_context, AsyncTestContext};

mod test_utils;
use test_utils::{signup_request, FailingNotifier, RecordingNotifier};

struct UserServiceContext {
    store: Arc<MemoryStore>,
    user_service: UserService,
}

#[async_trait]
impl AsyncTestContext for UserServiceContext {
    async fn setup() -> Self {
        let store = Arc::new(MemoryStore::new());
        let user_service = UserService::new(store.clone(), Arc::new(NoopNotifier));

        UserServiceContext {
            store,
            user_service,
        }
    }

    async fn teardown(self) {}
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_register_then_authenticate(ctx: &UserServiceContext) -> Result<(), AppError> {
    ctx.user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw1"))
        .await?;

    let profile = ctx.user_service.authenticate("alice@x.com", "pw1").await?;
    assert_eq!(profile.name, "Alice");
    assert_eq!(profile.email, "alice@x.com");

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_duplicate_email_rejected(ctx: &UserServiceContext) -> Result<(), AppError> {
    ctx.user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw1"))
        .await?;

    let err = ctx
        .user_service
        .register(signup_request("Mallory", "alice@x.com", "pw2", "pw2"))
        .await
        .expect_err("second signup with the same email must fail");
    assert!(matches!(err, AppError::DuplicateEmail));

    // The first record is untouched
    let stored = ctx
        .store
        .get_by_email("alice@x.com")
        .await?
        .expect("first user should still be stored");
    assert_eq!(stored.name, "Alice");

    let profile = ctx.user_service.authenticate("alice@x.com", "pw1").await?;
    assert_eq!(profile.name, "Alice");

    Ok(())
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_blank_fields_rejected(ctx: &UserServiceContext) {
    for request in [
        signup_request("", "alice@x.com", "pw1", "pw1"),
        signup_request("Alice", "", "pw1", "pw1"),
        signup_request("Alice", "alice@x.com", "", ""),
    ] {
        let err = ctx
            .user_service
            .register(request)
            .await
            .expect_err("signup with a blank field must fail");
        assert!(matches!(err, AppError::MissingFields));
    }
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_password_confirmation_must_match(ctx: &UserServiceContext) {
    let err = ctx
        .user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw2"))
        .await
        .expect_err("mismatched confirmation must fail");
    assert!(matches!(err, AppError::PasswordMismatch));
}

#[test_context(UserServiceContext)]
#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_identical(
    ctx: &UserServiceContext,
) -> Result<(), AppError> {
    ctx.user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw1"))
        .await?;

    let wrong_password = ctx
        .user_service
        .authenticate("alice@x.com", "nope")
        .await
        .expect_err("wrong password must fail");
    let unknown_email = ctx
        .user_service
        .authenticate("bob@x.com", "pw1")
        .await
        .expect_err("unknown email must fail");

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert_eq!(
        std::mem::discriminant(&wrong_password),
        std::mem::discriminant(&unknown_email),
        "both failures must be the same error kind"
    );

    Ok(())
}

#[tokio::test]
async fn test_notifier_failure_never_fails_the_operation() {
    let store = Arc::new(MemoryStore::new());
    let user_service = UserService::new(store, Arc::new(FailingNotifier));

    user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw1"))
        .await
        .expect("registration must succeed even when the notifier is down");
    user_service
        .authenticate("alice@x.com", "pw1")
        .await
        .expect("login must succeed even when the notifier is down");
}

#[tokio::test]
async fn test_signup_and_login_each_notify_once() {
    let store = Arc::new(MemoryStore::new());
    let notifier = RecordingNotifier::new();
    let user_service = UserService::new(store, notifier.clone());

    user_service
        .register(signup_request("Alice", "alice@x.com", "pw1", "pw1"))
        .await
        .unwrap();
    assert_eq!(notifier.subjects().await, ["New User Signup"]);

    user_service.authenticate("alice@x.com", "pw1").await.unwrap();
    assert_eq!(notifier.subjects().await, ["New User Signup", "User Login"]);
}
