//! Strongly-typed numeric identifiers.
//!
//! Identifiers are assigned by storage. The value `0` is the "not yet
//! persisted" sentinel carried by freshly constructed aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a `u64` identifier newtype with the shared sentinel semantics.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The sentinel for an entity that has not been stored yet.
            pub const UNASSIGNED: Self = Self(0);

            /// Wraps a raw identifier.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw identifier.
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// True once storage has assigned a nonzero identifier.
            pub const fn is_persisted(&self) -> bool {
                self.0 != 0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a pricing plan.
    PlanId
);

numeric_id!(
    /// Identifier of a subscription.
    SubscriptionId
);

numeric_id!(
    /// Identifier of a platform user, issued by the identity subsystem.
    UserId
);
