//! A single play session: score accumulation, phase transitions and the one-time
//! leaderboard finalization.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    config::SessionConfig,
    dao::{PreferenceStore, keys},
    error::{LeaderboardWarning, PersistError},
    state::{
        health::PlayerHealth,
        leaderboard::{Leaderboard, Placement, Standings},
        record::{UserRecord, format_seconds},
        state_machine::{
            FinalizeTicket, PhaseEvent, SessionOutcome, SessionPhase, SessionStateMachine,
        },
    },
};

/// Health bar values sampled during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBar {
    /// Current health points.
    pub current: i32,
    /// Health points of a full bar.
    pub max: i32,
}

/// What the HUD shows while the session is still being played.
#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    /// Accumulated score.
    pub score: u32,
    /// Seconds since the session started.
    pub elapsed: f64,
    /// Health bar, absent when the session runs without a health collaborator.
    pub health: Option<HealthBar>,
}

impl HudFrame {
    /// `Score: 3`
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// `Time: 12.34`
    pub fn time_text(&self) -> String {
        format!("Time: {}", format_seconds(self.elapsed))
    }
}

/// Result of the one-time finalization of a session.
#[derive(Debug)]
pub struct Finalization {
    /// How the session ended.
    pub outcome: SessionOutcome,
    /// Ranked leaderboard including the current player.
    pub standings: Standings,
    /// Slots that could not be written back; the standings are valid regardless.
    pub persist_errors: Vec<PersistError>,
}

impl Finalization {
    /// Where the current player finished.
    pub fn placement(&self) -> Placement {
        self.standings.placement()
    }

    /// Congratulation for a top-three finish, empty otherwise.
    pub fn message(&self) -> &'static str {
        self.standings.message()
    }

    /// The player's own entry when it is not already one of the top slots.
    pub fn player_display(&self) -> Option<&UserRecord> {
        self.standings.player_display()
    }

    /// Whether every filled slot reached the store.
    pub fn is_persisted(&self) -> bool {
        self.persist_errors.is_empty()
    }
}

/// What a call to [`GameSession::tick`] produced.
#[derive(Debug)]
pub enum TickOutcome {
    /// Still playing; the HUD should be refreshed.
    Playing(HudFrame),
    /// The session just ended and was finalized.
    Finished(Box<Finalization>),
    /// The session ended on an earlier tick; nothing to do.
    Idle,
}

/// One play session, owned by the host and advanced by [`GameSession::tick`].
pub struct GameSession {
    id: Uuid,
    config: SessionConfig,
    machine: SessionStateMachine,
    score: u32,
    elapsed: f64,
    username: String,
    leaderboard: Leaderboard,
    load_warnings: Vec<LeaderboardWarning>,
    store: Box<dyn PreferenceStore>,
    health: Option<Box<dyn PlayerHealth>>,
}

impl GameSession {
    /// Start a session: resolve the player's name and load the persisted leaderboard.
    ///
    /// A blank or missing `Username` is replaced by the configured default and written back.
    /// Unreadable leaderboard slots are treated as empty and kept in
    /// [`GameSession::load_warnings`].
    pub fn start(
        config: SessionConfig,
        mut store: Box<dyn PreferenceStore>,
        health: Option<Box<dyn PlayerHealth>>,
    ) -> Self {
        let id = Uuid::new_v4();
        let username = resolve_username(store.as_mut(), &config.default_username);
        let (leaderboard, load_warnings) = Leaderboard::load(store.as_ref());

        info!(
            session_id = %id,
            username = %username,
            target_score = config.target_score,
            warnings = load_warnings.len(),
            "session started"
        );

        Self {
            id,
            config,
            machine: SessionStateMachine::new(),
            score: 0,
            elapsed: 0.0,
            username,
            leaderboard,
            load_warnings,
            store,
            health,
        }
    }

    /// Identifier used to correlate log lines of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Configuration the session was started with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.machine.phase()
    }

    /// Whether the leaderboard finalization already ran.
    pub fn is_finalized(&self) -> bool {
        self.machine.is_finalized()
    }

    /// Accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds since start, as of the last tick spent playing.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Name the player's record will be stored under.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Persisted leaderboard slots, updated once the session is finalized.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Problems found while loading the leaderboard.
    pub fn load_warnings(&self) -> &[LeaderboardWarning] {
        &self.load_warnings
    }

    /// Preference store used by the session.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Release the preference store, ending the session.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }

    /// Add `delta` to the score. Ignored once the session has ended.
    pub fn add_score(&mut self, delta: i32) {
        if self.phase().is_terminal() {
            debug!(session_id = %self.id, delta, "ignoring score after session end");
            return;
        }
        self.score = self.score.saturating_add_signed(delta);
    }

    /// Forward damage to the player's health; defeat is checked on the next tick.
    pub fn apply_damage(&mut self, amount: i32) {
        if let Some(health) = self.health.as_mut() {
            health.take_damage(amount);
        }
    }

    /// Forward healing to the player's health.
    pub fn apply_healing(&mut self, amount: i32) {
        if let Some(health) = self.health.as_mut() {
            health.add_health(amount);
        }
    }

    /// Advance the session by one step.
    ///
    /// `elapsed` is the number of seconds since the session started. While playing it is
    /// recorded as the time to finish; once a terminal phase is reached the leaderboard is
    /// merged and persisted exactly once, on the tick that ends the session.
    ///
    /// The finish time is the `elapsed` passed to that ending tick rather than the one of the
    /// last tick spent playing, and finalization happens in the same call instead of on the
    /// following tick.
    pub fn tick(&mut self, elapsed: f64) -> TickOutcome {
        if self.phase() == SessionPhase::Playing {
            if elapsed.is_finite() {
                self.elapsed = elapsed.max(0.0);
            }
            match self.pending_event() {
                Some(event) => self.transition(event),
                None => return TickOutcome::Playing(self.hud_frame()),
            }
        }

        match self.machine.begin_finalization() {
            Some(ticket) => TickOutcome::Finished(Box::new(self.finalize(ticket))),
            None => TickOutcome::Idle,
        }
    }

    fn pending_event(&self) -> Option<PhaseEvent> {
        let defeated = self
            .health
            .as_ref()
            .is_some_and(|health| !health.is_alive() && health.remaining_lives() <= 0);

        if defeated {
            Some(PhaseEvent::PlayerDefeated)
        } else if self.score >= self.config.target_score {
            Some(PhaseEvent::TargetReached)
        } else {
            None
        }
    }

    fn transition(&mut self, event: PhaseEvent) {
        if event == PhaseEvent::TargetReached {
            self.score = self.config.target_score;
        }
        let phase = self.machine.apply(event);
        info!(
            session_id = %self.id,
            ?phase,
            score = self.score,
            elapsed = self.elapsed,
            "session ended"
        );
    }

    fn hud_frame(&self) -> HudFrame {
        HudFrame {
            score: self.score,
            elapsed: self.elapsed,
            health: self.health.as_ref().map(|health| HealthBar {
                current: health.current_health(),
                max: health.max_health(),
            }),
        }
    }

    fn finalize(&mut self, ticket: FinalizeTicket) -> Finalization {
        let player = UserRecord::current_player(&self.username, self.score, self.elapsed);
        let standings = self.leaderboard.record(player);
        let persist_errors = self.leaderboard.persist(self.store.as_mut());

        info!(
            session_id = %self.id,
            outcome = ?ticket.outcome(),
            placement = ?standings.placement(),
            failed_writes = persist_errors.len(),
            "leaderboard finalized"
        );

        Finalization {
            outcome: ticket.outcome(),
            standings,
            persist_errors,
        }
    }
}

fn resolve_username(store: &mut dyn PreferenceStore, default_username: &str) -> String {
    match store.get_string(keys::USERNAME) {
        Ok(Some(name)) if !name.trim().is_empty() => name,
        Ok(_) => {
            if let Err(err) = store.set_string(keys::USERNAME, default_username) {
                warn!(error = %err, "could not store default username");
            }
            default_username.to_string()
        }
        Err(err) => {
            warn!(error = %err, "could not read username; using default");
            default_username.to_string()
        }
    }
}
