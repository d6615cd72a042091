//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, policy, errors)
//! - `player` - Registered players and authentication tokens
//! - `game` - Game catalogue entries
//! - `session` - Game sessions and the enrollment lifecycle

pub mod foundation;
pub mod game;
pub mod player;
pub mod session;
