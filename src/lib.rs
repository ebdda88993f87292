//! Play-session outcome tracking with a persistent top-three leaderboard.
//!
//! A host creates a [`GameSession`] per play session, feeds it score and damage events and
//! calls [`GameSession::tick`] at a regular cadence. When the session ends the current
//! player is ranked against the persisted leaderboard, the top three are written back to
//! the [`dao::PreferenceStore`], and the result is handed to the host, usually through a
//! [`services::presenter::SessionPresenter`].

pub mod config;
pub mod dao;
pub mod error;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::SessionConfig;
pub use dao::PreferenceStore;
pub use state::{
    Finalization, GameSession, Leaderboard, Placement, SessionOutcome, SessionPhase, Standings,
    TickOutcome, UserRecord,
};
