//! Session aggregate entity.
//!
//! A session binds one game, a capacity, a scheduled date and the set of
//! enrolled players. Its OPEN/CLOSE state is derived on every read.
//!
//! # Ownership
//!
//! Sessions reference players by ID but do NOT own them. A player may be
//! enrolled in many sessions.
//!
//! # Concurrency
//!
//! `enroll` and `remove` are check-then-act on an immutable snapshot and
//! return a new snapshot. Persist the result with
//! `SessionRepository::compare_and_swap` so that two racing enrollments
//! cannot both succeed against the same snapshot.

use std::collections::BTreeSet;

use crate::domain::foundation::{Capacity, PlayerId, SessionId, Timestamp, ValidationError};
use crate::domain::game::Game;
use crate::domain::player::Player;

use super::{SessionError, SessionState};

/// Session aggregate.
///
/// # Invariants
///
/// - `players.len() <= capacity`
/// - `players` contains no duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    capacity: Capacity,
    date: Timestamp,
    game: Game,
    players: BTreeSet<PlayerId>,
}

impl Session {
    /// Schedule a new session.
    ///
    /// Duplicate ids in `initial_players` collapse.
    ///
    /// # Errors
    ///
    /// - `OutOfRange("players")` if more players than seats are given
    pub fn create(
        id: SessionId,
        capacity: Capacity,
        date: Timestamp,
        game: Game,
        initial_players: impl IntoIterator<Item = PlayerId>,
    ) -> Result<Self, ValidationError> {
        let players: BTreeSet<PlayerId> = initial_players.into_iter().collect();
        if players.len() > capacity.as_usize() {
            return Err(ValidationError::out_of_range(
                "players",
                0,
                i64::from(capacity.value()),
                players.len() as i64,
            ));
        }
        Ok(Self {
            id,
            capacity,
            date,
            game,
            players,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Enrolled player ids in ascending order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().copied()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity.as_usize()
    }

    pub fn available_slots(&self) -> u32 {
        self.capacity.value().saturating_sub(self.players.len() as u32)
    }

    /// True once the scheduled date lies strictly before `now`.
    pub fn has_started(&self, now: &Timestamp) -> bool {
        self.date.is_before(now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    /// CLOSE if full or the date has passed, otherwise OPEN.
    pub fn state(&self, now: &Timestamp) -> SessionState {
        SessionState::derive(self.is_full(), self.has_started(now))
    }

    pub fn is_open(&self, now: &Timestamp) -> bool {
        self.state(now).is_open()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Enroll a player, returning the updated snapshot.
    ///
    /// # Errors
    ///
    /// - `AlreadyEnrolled` if the player is a member
    /// - `SessionFull` if every seat is taken
    /// - `SessionClosed` if the date has passed
    pub fn enroll(&self, player: &Player, now: &Timestamp) -> Result<Session, SessionError> {
        self.enroll_id(player.id(), now)
    }

    /// Same as [`Session::enroll`] for callers holding only an id.
    pub fn enroll_id(&self, player_id: PlayerId, now: &Timestamp) -> Result<Session, SessionError> {
        if self.has_player(player_id) {
            return Err(SessionError::AlreadyEnrolled {
                session_id: self.id,
                player_id,
            });
        }
        if self.is_full() {
            return Err(SessionError::SessionFull {
                session_id: self.id,
                capacity: self.capacity.value(),
            });
        }
        if self.has_started(now) {
            return Err(SessionError::SessionClosed {
                session_id: self.id,
            });
        }

        let mut next = self.clone();
        next.players.insert(player_id);
        Ok(next)
    }

    /// Remove a player, returning the updated snapshot.
    ///
    /// Permitted in any state. Freeing a seat can reopen a full session;
    /// a session whose date has passed stays closed.
    ///
    /// # Errors
    ///
    /// - `NotEnrolled` if the player is not a member
    pub fn remove(&self, player_id: PlayerId) -> Result<Session, SessionError> {
        if !self.has_player(player_id) {
            return Err(SessionError::NotEnrolled {
                session_id: self.id,
                player_id,
            });
        }

        let mut next = self.clone();
        next.players.remove(&player_id);
        Ok(next)
    }
}
