/// Lifecycle phases of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// The player is still in play.
    #[default]
    Playing,
    /// The player ran out of health and lives.
    GameOver,
    /// The player reached the target score.
    Winning,
}

impl SessionPhase {
    /// Terminal phases have no outgoing transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::GameOver | SessionPhase::Winning)
    }

    /// Outcome represented by a terminal phase.
    pub fn outcome(self) -> Option<SessionOutcome> {
        match self {
            SessionPhase::Playing => None,
            SessionPhase::GameOver => Some(SessionOutcome::Lost),
            SessionPhase::Winning => Some(SessionOutcome::Won),
        }
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Reached the target score.
    Won,
    /// Lost every life.
    Lost,
}

/// Events that can be applied to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Health is depleted and no lives remain.
    PlayerDefeated,
    /// The accumulated score reached the target.
    TargetReached,
}

/// Permission to run the one-time finalization of a session.
///
/// Only [`SessionStateMachine::begin_finalization`] creates one, and it does so at most once
/// per machine.
#[derive(Debug)]
pub struct FinalizeTicket {
    outcome: SessionOutcome,
}

impl FinalizeTicket {
    /// Outcome being finalized.
    pub fn outcome(&self) -> SessionOutcome {
        self.outcome
    }
}

/// State machine for the Playing → GameOver | Winning lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionStateMachine {
    phase: SessionPhase,
    finalized: bool,
}

impl SessionStateMachine {
    /// Create a new state machine in the playing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether finalization already ran.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Apply an event, returning the resulting phase.
    ///
    /// Terminal phases absorb every event and stay where they are.
    pub fn apply(&mut self, event: PhaseEvent) -> SessionPhase {
        self.phase = self.compute_transition(event);
        self.phase
    }

    /// Hand out the finalization ticket the first time it is requested in a terminal phase.
    ///
    /// The finalized flag is set before the ticket is returned and never cleared.
    pub fn begin_finalization(&mut self) -> Option<FinalizeTicket> {
        if self.finalized {
            return None;
        }
        let outcome = self.phase.outcome()?;
        self.finalized = true;
        Some(FinalizeTicket { outcome })
    }

    fn compute_transition(&self, event: PhaseEvent) -> SessionPhase {
        match (self.phase, event) {
            (SessionPhase::Playing, PhaseEvent::PlayerDefeated) => SessionPhase::GameOver,
            (SessionPhase::Playing, PhaseEvent::TargetReached) => SessionPhase::Winning,
            (terminal, _) => terminal,
        }
    }
}
