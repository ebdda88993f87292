//! Persistent top-three leaderboard and the merge that places the current player.

use tracing::{debug, warn};

use crate::{
    dao::{PreferenceStore, keys::SLOT_KEYS},
    error::{LeaderboardWarning, PersistError},
    state::record::{UserRecord, compare},
};

/// Number of persisted leaderboard positions.
pub const SLOT_COUNT: usize = 3;

/// Where the current player finished after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Rank 1.
    First,
    /// Rank 2.
    Second,
    /// Rank 3.
    Third,
    /// Anywhere below the persisted positions.
    Unplaced,
}

impl Placement {
    /// Placement matching a merge rank.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            1 => Placement::First,
            2 => Placement::Second,
            3 => Placement::Third,
            _ => Placement::Unplaced,
        }
    }

    /// Congratulation shown on the result screen, empty when unplaced.
    pub fn message(self) -> &'static str {
        match self {
            Placement::First => "First place, congratulations!",
            Placement::Second => "Second place, congratulations!",
            Placement::Third => "Third place, congratulations!",
            Placement::Unplaced => "",
        }
    }

    /// Whether the player occupies one of the persisted slots.
    pub fn is_placed(self) -> bool {
        self != Placement::Unplaced
    }
}

/// Ranked result of merging the current player into the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    ranked: Vec<UserRecord>,
}

impl Standings {
    /// Every candidate, best first, with ranks `1..=N`.
    pub fn ranked(&self) -> &[UserRecord] {
        &self.ranked
    }

    /// The records that now occupy the persisted slots; unfilled slots are `None`.
    pub fn top_slots(&self) -> [Option<&UserRecord>; SLOT_COUNT] {
        std::array::from_fn(|index| self.ranked.get(index))
    }

    /// The current player's ranked entry.
    pub fn current_player(&self) -> Option<&UserRecord> {
        self.ranked.iter().find(|record| record.is_current_player)
    }

    /// Where the current player finished.
    pub fn placement(&self) -> Placement {
        self.current_player()
            .map_or(Placement::Unplaced, |record| Placement::from_rank(record.rank))
    }

    /// Result screen message for the current player.
    pub fn message(&self) -> &'static str {
        self.placement().message()
    }

    /// The player's own entry when it must be shown apart from the top slots.
    ///
    /// `None` when the player already appears in one of the persisted slots.
    pub fn player_display(&self) -> Option<&UserRecord> {
        if self.placement().is_placed() {
            None
        } else {
            self.current_player()
        }
    }
}

/// Merge the current player's record with the persisted slots.
///
/// Empty and unranked slots are dropped. The remaining candidates are stably sorted best
/// first, so exact ties keep the order current player, first, second, third. Ranks are then
/// reassigned from 1.
pub fn merge(current: UserRecord, persisted: &[UserRecord; SLOT_COUNT]) -> Standings {
    let mut ranked = Vec::with_capacity(SLOT_COUNT + 1);
    ranked.push(current);
    ranked.extend(
        persisted
            .iter()
            .filter(|record| !record.is_unranked())
            .cloned(),
    );

    ranked.sort_by(|a, b| compare(b, a));

    for (index, record) in ranked.iter_mut().enumerate() {
        record.rank = (index + 1) as u8;
    }

    Standings { ranked }
}

/// The three persisted leaderboard slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    slots: [UserRecord; SLOT_COUNT],
}

impl Leaderboard {
    /// Leaderboard with the given slots, first place first.
    pub fn new(slots: [UserRecord; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Read the three slots from the store.
    ///
    /// A slot that cannot be read or decoded is treated as empty and reported as a warning;
    /// loading itself never fails.
    pub fn load(store: &dyn PreferenceStore) -> (Self, Vec<LeaderboardWarning>) {
        let mut warnings = Vec::new();
        let slots = SLOT_KEYS.map(|key| match store.get_string(key) {
            Ok(None) => UserRecord::empty_slot(),
            Ok(Some(text)) => UserRecord::parse(&text).unwrap_or_else(|source| {
                warn!(key, error = %source, "ignoring corrupt leaderboard slot");
                warnings.push(LeaderboardWarning::Malformed { key, source });
                UserRecord::empty_slot()
            }),
            Err(source) => {
                warn!(key, error = %source, "could not read leaderboard slot");
                warnings.push(LeaderboardWarning::Unreadable { key, source });
                UserRecord::empty_slot()
            }
        });

        (Self { slots }, warnings)
    }

    /// Current slots, first place first.
    pub fn slots(&self) -> &[UserRecord; SLOT_COUNT] {
        &self.slots
    }

    /// Place the current player and adopt the resulting top three as the new slots.
    pub fn record(&mut self, current: UserRecord) -> Standings {
        let standings = merge(current, &self.slots);
        self.slots = standings
            .top_slots()
            .map(|slot| slot.cloned().unwrap_or_default());
        standings
    }

    /// Write every filled slot back to the store.
    ///
    /// All slots are attempted even when one fails; the failures are returned.
    pub fn persist(&self, store: &mut dyn PreferenceStore) -> Vec<PersistError> {
        let mut failures = Vec::new();
        for (&key, record) in SLOT_KEYS.iter().zip(&self.slots) {
            if record.is_unranked() {
                continue;
            }
            let line = record.serialize();
            match store.set_string(key, &line) {
                Ok(()) => debug!(key, record = %line, "persisted leaderboard slot"),
                Err(source) => {
                    warn!(key, error = %source, "failed to persist leaderboard slot");
                    failures.push(PersistError { key, source });
                }
            }
        }
        failures
    }
}
