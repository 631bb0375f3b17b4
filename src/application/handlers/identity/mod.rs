//! Identity handlers: registration, activation and sign-in.

mod activate_user;
mod generate_token;
mod register_user;

pub use activate_user::{ActivateUserCommand, ActivateUserHandler, ActivateUserResult};
pub use generate_token::{GenerateTokenCommand, GenerateTokenHandler, GenerateTokenResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
