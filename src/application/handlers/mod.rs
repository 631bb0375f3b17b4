//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod billing;
pub mod identity;

pub use billing::{
    CreatePlanCommand, CreatePlanHandler, CreatePlanResult, CreateSubscriptionCommand,
    CreateSubscriptionHandler, CreateSubscriptionResult, GetUserSubscriptionsHandler,
    GetUserSubscriptionsQuery, GetUserSubscriptionsResult, ListPlansHandler, ListPlansQuery,
    ListPlansResult, RenewSubscriptionCommand, RenewSubscriptionHandler, RenewSubscriptionResult,
    SetAutoRenewCommand, SetAutoRenewHandler, SetAutoRenewResult, UpdateSubscriptionStatusCommand,
    UpdateSubscriptionStatusHandler, UpdateSubscriptionStatusResult,
};
pub use identity::{
    ActivateUserCommand, ActivateUserHandler, ActivateUserResult, GenerateTokenCommand,
    GenerateTokenHandler, GenerateTokenResult, RegisterUserCommand, RegisterUserHandler,
    RegisterUserResult,
};
