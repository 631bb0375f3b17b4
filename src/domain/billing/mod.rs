//! Billing domain - plans, subscriptions and the values they are built from.
//!
//! Value objects validate on construction and never change afterwards.
//! Aggregates are built either fresh (`create`) or from storage (`restore`);
//! both paths run the same checks. The domain never talks to storage itself.

mod amount;
mod currency;
mod description;
mod end_date;
mod errors;
mod iso4217;
mod plan;
mod plan_interval;
mod plan_name;
mod subscription;
mod subscription_status;
mod trial_period;

pub use amount::Amount;
pub use currency::Currency;
pub use description::Description;
pub use end_date::EndDateMapper;
pub use errors::BillingError;
pub use iso4217::CurrencyInfo;
pub use plan::{Plan, PlanInput};
pub use plan_interval::PlanInterval;
pub use plan_name::PlanName;
pub use subscription::{Subscription, SubscriptionInput};
pub use subscription_status::SubscriptionStatus;
pub use trial_period::TrialPeriod;
