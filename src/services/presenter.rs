//! Adapter turning tick outcomes into display and audio calls.

use tracing::debug;

use crate::state::{
    leaderboard::SLOT_COUNT,
    record::UserRecord,
    session::{Finalization, HudFrame, TickOutcome},
    state_machine::SessionOutcome,
};

/// Sound played once when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// The target score was reached.
    Win,
    /// The player lost every life.
    Lose,
}

impl From<SessionOutcome> for AudioCue {
    fn from(outcome: SessionOutcome) -> Self {
        match outcome {
            SessionOutcome::Won => AudioCue::Win,
            SessionOutcome::Lost => AudioCue::Lose,
        }
    }
}

/// One line of the result board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// Player name.
    pub username: String,
    /// Score as text.
    pub score: String,
    /// Time as text, two decimals.
    pub time: String,
    /// Rendered in bold: the row belongs to the current player.
    pub emphasized: bool,
}

impl From<&UserRecord> for BoardRow {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            score: record.score.to_string(),
            time: record.time_text(),
            emphasized: record.is_current_player,
        }
    }
}

/// Everything the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBoard {
    /// First to third place; unfilled places are `None`.
    pub slots: [Option<BoardRow>; SLOT_COUNT],
    /// The player's own row, only when they did not make the top three.
    pub player_row: Option<BoardRow>,
    /// Congratulation, empty when the player is unplaced.
    pub message: String,
}

impl From<&Finalization> for ResultBoard {
    fn from(finalization: &Finalization) -> Self {
        Self {
            slots: finalization
                .standings
                .top_slots()
                .map(|slot| slot.map(BoardRow::from)),
            player_row: finalization.player_display().map(BoardRow::from),
            message: finalization.message().to_string(),
        }
    }
}

/// Screen collaborator.
pub trait SessionDisplay {
    /// Refresh the in-game HUD.
    fn show_hud(&mut self, frame: &HudFrame);
    /// Hide the HUD and show the result screen.
    fn show_results(&mut self, board: &ResultBoard);
}

/// Audio collaborator.
pub trait SessionAudio {
    /// Mute or unmute all output.
    fn set_muted(&mut self, muted: bool);
    /// Play a one-shot cue.
    fn play(&mut self, cue: AudioCue);
}

/// Forwards every tick outcome of a session to the display and audio collaborators.
pub struct SessionPresenter<D, A> {
    display: D,
    audio: A,
}

impl<D: SessionDisplay, A: SessionAudio> SessionPresenter<D, A> {
    /// Wire the collaborators; audio is muted unless sound is enabled.
    pub fn new(display: D, mut audio: A, sound_on: bool) -> Self {
        audio.set_muted(!sound_on);
        Self { display, audio }
    }

    /// Translate one tick outcome into collaborator calls.
    pub fn present(&mut self, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::Playing(frame) => self.display.show_hud(frame),
            TickOutcome::Finished(finalization) => {
                let cue = AudioCue::from(finalization.outcome);
                debug!(?cue, placement = ?finalization.placement(), "presenting results");
                self.audio.play(cue);
                self.display.show_results(&ResultBoard::from(&**finalization));
            }
            TickOutcome::Idle => {}
        }
    }

    /// Display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Audio collaborator.
    pub fn audio(&self) -> &A {
        &self.audio
    }
}
