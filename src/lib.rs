//! Game Sessions - Player registration and game session scheduling
//!
//! Players register and authenticate with time-bounded bearer tokens,
//! games are catalogued with validated genres, and sessions gather a
//! bounded number of players around one game on a given date. A session
//! is OPEN until it is full or its date has passed.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
