//! End-to-end subscription flow over the in-memory adapters.
//!
//! Registers and activates a user, signs in, resolves the access token back
//! to the user, then walks a subscription through creation, conflict,
//! cancellation, resubscription and renewal.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use subscription_billing::adapters::{
    Argon2PasswordHasher, InMemoryAccountRepository, InMemoryPlanRepository,
    InMemorySubscriptionRepository, JwtTokenService, StubPaymentGateway,
};
use subscription_billing::application::{
    ActivateUserCommand, ActivateUserHandler, CreatePlanCommand, CreatePlanHandler,
    CreateSubscriptionCommand, CreateSubscriptionHandler, GenerateTokenCommand,
    GenerateTokenHandler, GetUserSubscriptionsHandler, GetUserSubscriptionsQuery,
    ListPlansHandler, ListPlansQuery, RegisterUserCommand, RegisterUserHandler,
    RenewSubscriptionCommand, RenewSubscriptionHandler, UpdateSubscriptionStatusCommand,
    UpdateSubscriptionStatusHandler,
};
use subscription_billing::domain::billing::{BillingError, SubscriptionStatus};
use subscription_billing::domain::foundation::{ErrorKind, PlanId, UserId};
use subscription_billing::domain::identity::IdentityError;
use subscription_billing::ports::IdentityProvider;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    plans: Arc<InMemoryPlanRepository>,
    subscriptions: Arc<InMemorySubscriptionRepository>,
    accounts: Arc<InMemoryAccountRepository>,
    payments: Arc<StubPaymentGateway>,
    tokens: Arc<JwtTokenService>,
    hasher: Arc<Argon2PasswordHasher>,
}

impl App {
    fn new() -> Self {
        Self {
            plans: Arc::new(InMemoryPlanRepository::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
            accounts: Arc::new(InMemoryAccountRepository::new()),
            payments: Arc::new(StubPaymentGateway::new()),
            tokens: Arc::new(JwtTokenService::new(
                &SecretString::new("integration-test-secret-of-32-bytes!".to_string()),
                "subscription-billing",
                Duration::from_secs(600),
            )),
            hasher: Arc::new(Argon2PasswordHasher::new()),
        }
    }

    fn subscribe(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(
            self.plans.clone(),
            self.subscriptions.clone(),
            self.payments.clone(),
        )
    }

    async fn create_plan(&self, name: &str, interval: &str) -> PlanId {
        CreatePlanHandler::new(self.plans.clone())
            .handle(CreatePlanCommand {
                name: name.to_string(),
                description: Some("Unlimited streaming".to_string()),
                currency: "USD".to_string(),
                interval: interval.to_string(),
                amount_cents: 1999,
                trial_period_days: None,
            })
            .await
            .expect("plan should be created")
            .plan
            .id()
    }

    /// Registers, activates and signs in; returns the bearer token.
    async fn sign_up(&self, email: &str) -> String {
        let registered = RegisterUserHandler::new(self.accounts.clone(), self.hasher.clone())
            .handle(RegisterUserCommand {
                name: "Margaret Hamilton".to_string(),
                email: email.to_string(),
                password: SecretString::new("Apollo#11".to_string()),
            })
            .await
            .expect("registration should succeed");

        let sign_in = GenerateTokenHandler::new(
            self.accounts.clone(),
            self.hasher.clone(),
            self.tokens.clone(),
        );
        let credentials = GenerateTokenCommand {
            email: email.to_string(),
            password: SecretString::new("Apollo#11".to_string()),
        };

        let err = sign_in.handle(credentials.clone()).await.unwrap_err();
        assert!(matches!(err, IdentityError::UserNotActivated));

        ActivateUserHandler::new(self.accounts.clone())
            .handle(ActivateUserCommand {
                user_id: registered.account.id(),
            })
            .await
            .expect("activation should succeed");

        sign_in.handle(credentials).await.expect("sign-in should succeed").token
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn subscription_lifecycle_end_to_end() {
    let app = App::new();
    let monthly = app.create_plan("Monthly Premium", "Month").await;
    let yearly = app.create_plan("Yearly Premium", "Year").await;

    let plans = ListPlansHandler::new(app.plans.clone())
        .handle(ListPlansQuery)
        .await
        .unwrap();
    assert_eq!(plans.plans.len(), 2);

    // Sign in and resolve the caller from the token
    let token = app.sign_up("margaret@example.com").await;
    let user_id = app.tokens.resolve(&token).await.unwrap();
    assert!(user_id.is_persisted());

    // Subscribe
    let created = app
        .subscribe()
        .handle(CreateSubscriptionCommand {
            user_id,
            plan_id: monthly,
        })
        .await
        .unwrap();
    let first = created.subscription;
    assert_eq!(first.status(), SubscriptionStatus::Active);
    assert!(first.auto_renew());
    assert_eq!(
        first.end_date(),
        first.start_date().add_calendar_months(1)
    );

    // A second active subscription is a conflict
    let err = app
        .subscribe()
        .handle(CreateSubscriptionCommand {
            user_id,
            plan_id: yearly,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BillingError::ActiveSubscriptionExists(u) if u == user_id));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // Renew the monthly subscription once
    let renewed = RenewSubscriptionHandler::new(
        app.plans.clone(),
        app.subscriptions.clone(),
        app.payments.clone(),
    )
    .handle(RenewSubscriptionCommand {
        subscription_id: first.id(),
    })
    .await
    .unwrap();
    assert_eq!(
        renewed.subscription.end_date(),
        first.end_date().and_then(|end| end.add_calendar_months(1))
    );

    // Cancel, then switch to the yearly plan
    UpdateSubscriptionStatusHandler::new(app.subscriptions.clone())
        .handle(UpdateSubscriptionStatusCommand {
            subscription_id: first.id(),
            status: "Cancelled".to_string(),
        })
        .await
        .unwrap();
    let second = app
        .subscribe()
        .handle(CreateSubscriptionCommand {
            user_id,
            plan_id: yearly,
        })
        .await
        .unwrap()
        .subscription;

    let history = GetUserSubscriptionsHandler::new(app.subscriptions.clone())
        .handle(GetUserSubscriptionsQuery { user_id })
        .await
        .unwrap();
    assert_eq!(history.subscriptions.len(), 2);
    assert_eq!(history.active().map(|s| s.id()), Some(second.id()));
    assert_eq!(
        history.subscriptions[0].status(),
        SubscriptionStatus::Cancelled
    );

    // Three charges: first period, renewal, yearly plan
    assert_eq!(app.payments.receipts().len(), 3);
}

#[tokio::test]
async fn subscribing_to_missing_plan_is_not_found() {
    let app = App::new();

    let err = app
        .subscribe()
        .handle(CreateSubscriptionCommand {
            user_id: UserId::new(1),
            plan_id: PlanId::new(2),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn users_are_isolated_from_each_other() {
    let app = App::new();
    let plan = app.create_plan("Basic", "Week").await;

    for user in [1, 2] {
        app.subscribe()
            .handle(CreateSubscriptionCommand {
                user_id: UserId::new(user),
                plan_id: plan,
            })
            .await
            .unwrap();
    }

    let history = GetUserSubscriptionsHandler::new(app.subscriptions.clone())
        .handle(GetUserSubscriptionsQuery {
            user_id: UserId::new(1),
        })
        .await
        .unwrap();
    assert_eq!(history.subscriptions.len(), 1);
}
