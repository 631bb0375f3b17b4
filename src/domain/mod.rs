//! Domain layer - pure business logic with no infrastructure dependencies.

pub mod billing;
pub mod foundation;
pub mod identity;
