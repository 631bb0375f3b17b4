//! Identity domain - the slice of user identity billing depends on.
//!
//! Accounts, their email and display name, and the password policy used at
//! registration. Token issuance and hashing live behind ports.

mod account;
mod email;
mod errors;
mod password;
mod person_name;

pub use account::UserAccount;
pub use email::Email;
pub use errors::{EmailError, IdentityError, PasswordError, PersonNameError};
pub use password::Password;
pub use person_name::PersonName;
