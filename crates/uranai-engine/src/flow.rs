//! Presentation flow state machine.
//!
//! Each mode's UI flow is a strictly linear sequence: input/selection,
//! an optional drawing phase with a bounded interaction count (the omikuji
//! box takes exactly three shakes), a loading phase, and the result. The
//! only backward transition is an explicit reset, and a pending draw
//! blocks repeat triggers.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The four presentation states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    /// Waiting for user input or selection.
    Input,
    /// The drawing/shaking phase.
    Drawing,
    /// The artificial-delay phase before the reveal.
    Loading,
    /// The result is on display.
    Result,
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Drawing => write!(f, "drawing"),
            Self::Loading => write!(f, "loading"),
            Self::Result => write!(f, "result"),
        }
    }
}

/// A linear draw flow with transition guards.
#[derive(Debug, Clone)]
pub struct Flow {
    state: FlowState,
    required_interactions: u32,
    interactions: u32,
}

impl Flow {
    /// Create a flow in the input state.
    ///
    /// `required_interactions` is the number of drawing-phase interactions
    /// needed before the flow may advance (3 for omikuji, 0 elsewhere).
    pub fn new(required_interactions: u32) -> Self {
        Self {
            state: FlowState::Input,
            required_interactions,
            interactions: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Interactions registered so far in the drawing phase.
    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    /// Whether a draw is pending (drawing or loading).
    pub fn is_pending(&self) -> bool {
        matches!(self.state, FlowState::Drawing | FlowState::Loading)
    }

    /// Start a draw: `Input -> Drawing`.
    ///
    /// A pending draw rejects the repeat trigger; a displayed result must
    /// be reset before a new draw.
    pub fn begin(&mut self) -> EngineResult<()> {
        match self.state {
            FlowState::Input => {
                self.state = FlowState::Drawing;
                Ok(())
            }
            FlowState::Drawing | FlowState::Loading => Err(EngineError::DrawInProgress),
            FlowState::Result => Err(EngineError::InvalidTransition {
                from: self.state,
                to: FlowState::Drawing,
            }),
        }
    }

    /// Register one drawing-phase interaction; returns how many remain.
    ///
    /// Interactions beyond the required count are ignored, matching a user
    /// shaking the box after it is already primed.
    pub fn interact(&mut self) -> EngineResult<u32> {
        if self.state != FlowState::Drawing {
            return Err(EngineError::InvalidTransition {
                from: self.state,
                to: FlowState::Drawing,
            });
        }
        if self.interactions < self.required_interactions {
            self.interactions += 1;
        }
        Ok(self.required_interactions - self.interactions)
    }

    /// Advance to loading: `Drawing -> Loading`, only once primed.
    pub fn advance(&mut self) -> EngineResult<()> {
        if self.state != FlowState::Drawing {
            return Err(EngineError::InvalidTransition {
                from: self.state,
                to: FlowState::Loading,
            });
        }
        let remaining = self.required_interactions - self.interactions;
        if remaining > 0 {
            return Err(EngineError::InteractionsRemaining(remaining));
        }
        self.state = FlowState::Loading;
        Ok(())
    }

    /// Reveal the result: `Loading -> Result`.
    pub fn complete(&mut self) -> EngineResult<()> {
        if self.state != FlowState::Loading {
            return Err(EngineError::InvalidTransition {
                from: self.state,
                to: FlowState::Result,
            });
        }
        self.state = FlowState::Result;
        Ok(())
    }

    /// Explicit reset-to-start from any state.
    pub fn reset(&mut self) {
        self.state = FlowState::Input;
        self.interactions = 0;
    }
}
