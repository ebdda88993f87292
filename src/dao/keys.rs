//! Keys shared by every component that reads or writes the preference store.

/// Display name of the player about to start a session.
pub const USERNAME: &str = "Username";
/// Serialized record of the first leaderboard slot.
pub const FIRST_USER: &str = "FirstUser";
/// Serialized record of the second leaderboard slot.
pub const SECOND_USER: &str = "SecondUser";
/// Serialized record of the third leaderboard slot.
pub const THIRD_USER: &str = "ThirdUser";
/// `1` when sound is enabled, `0` otherwise.
pub const SOUND_ON: &str = "SoundOn";

/// Leaderboard slot keys ordered from first to third place.
pub const SLOT_KEYS: [&str; 3] = [FIRST_USER, SECOND_USER, THIRD_USER];
