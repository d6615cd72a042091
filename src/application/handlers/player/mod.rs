//! Player command and query handlers.

mod get_player;
mod login;
mod logout;
mod register_player;
mod token_issuer;
mod validate_token;

pub use get_player::{GetPlayerHandler, GetPlayerQuery};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::{LogoutCommand, LogoutHandler};
pub use register_player::{RegisterPlayerCommand, RegisterPlayerHandler, RegisterPlayerResult};
pub use token_issuer::TokenIssuer;
pub use validate_token::ValidateTokenHandler;
