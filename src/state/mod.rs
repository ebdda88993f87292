/// Player health collaborator.
pub mod health;
/// Top-three leaderboard and merge.
pub mod leaderboard;
/// Leaderboard records and their wire format.
pub mod record;
/// Session driver.
pub mod session;
/// Session lifecycle state machine.
pub mod state_machine;

pub use leaderboard::{Leaderboard, Placement, Standings};
pub use record::UserRecord;
pub use session::{Finalization, GameSession, TickOutcome};
pub use state_machine::{SessionOutcome, SessionPhase};
