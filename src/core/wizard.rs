//! Registration wizard step sequencing and navigation
//!
//! Pure state machine over an ordered list of step definitions. The host
//! supplies the steps and the navigation predicates, renders the current
//! step, and reacts to emitted events; nothing here performs IO.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single step in a registration flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDef {
    pub id: String,
    pub label: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl StepDef {
    /// Create an enabled step
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
        }
    }

    /// Create a disabled (conditional) step
    pub fn disabled(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(id, label)
        }
    }
}

/// Visual theme for a wizard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Player,
    Team,
    Family,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Player => write!(f, "player"),
            Theme::Team => write!(f, "team"),
            Theme::Family => write!(f, "family"),
        }
    }
}

/// Identity and context for a wizard instance.
///
/// The state machine never mutates this; it belongs to the hosting flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    pub title: String,
    pub theme: Theme,
    #[serde(default)]
    pub badge: Option<String>,
}

/// Configuration faults, raised at setup time and never during navigation
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("duplicate step id '{0}' in step list")]
    DuplicateStepId(String),

    #[error("step list has no enabled steps")]
    NoEnabledSteps,
}

/// Compute the ordered active-step sequence: enabled steps only, original
/// relative order preserved.
///
/// Ids must be unique across the full list, enabled or not, so that no
/// later enablement toggle can surface a duplicate mid-flow.
pub fn active_sequence(steps: &[StepDef]) -> Result<Vec<String>, FlowError> {
    let mut seen = HashSet::new();
    for step in steps {
        if !seen.insert(step.id.as_str()) {
            return Err(FlowError::DuplicateStepId(step.id.clone()));
        }
    }

    Ok(steps
        .iter()
        .filter(|s| s.enabled)
        .map(|s| s.id.clone())
        .collect())
}

/// Notification emitted on a successful transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A continue request moved to the next active step
    Advanced { from: String, to: String },
    /// A back request moved to the previous active step
    Rewound { from: String, to: String },
    /// The current step was disabled out from under the wizard and the
    /// machine moved to the nearest later active step
    Skipped { from: String, to: String },
    /// The wizard reached its terminal state
    Completed { from: String },
}

/// Tracks the current step against the active sequence.
///
/// Invariant: when not complete, the current step id is a member of the
/// active sequence. Transitions are applied whole; a caller observing the
/// machine between method calls always sees a consistent pair.
#[derive(Debug, Clone)]
pub struct WizardMachine {
    steps: Vec<StepDef>,
    sequence: Vec<String>,
    /// `None` once the wizard has completed
    current: Option<String>,
}

impl WizardMachine {
    /// Build a machine positioned on the first active step.
    ///
    /// A step list whose active sequence is empty is a configuration fault:
    /// a wizard with nothing to show is mis-authored, not complete.
    pub fn new(steps: Vec<StepDef>) -> Result<Self, FlowError> {
        let sequence = active_sequence(&steps)?;
        let current = sequence.first().cloned();
        if current.is_none() {
            return Err(FlowError::NoEnabledSteps);
        }

        Ok(Self {
            steps,
            sequence,
            current,
        })
    }

    /// Id of the step the wizard is on, or `None` once complete
    pub fn active_step_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The active-step sequence in navigation order
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// The full step list, disabled steps included
    pub fn steps(&self) -> &[StepDef] {
        &self.steps
    }

    /// Look up a step definition by id
    pub fn step(&self, id: &str) -> Option<&StepDef> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// Zero-based position of the current step in the active sequence
    pub fn position(&self) -> Option<usize> {
        let current = self.current.as_deref()?;
        self.sequence.iter().position(|id| id == current)
    }

    /// Number of steps in the active sequence
    pub fn step_count(&self) -> usize {
        self.sequence.len()
    }

    /// True when the current step is the first active step
    pub fn is_first(&self) -> bool {
        self.position() == Some(0)
    }

    /// True when the current step is the last active step
    pub fn is_last(&self) -> bool {
        match self.position() {
            Some(pos) => pos + 1 == self.sequence.len(),
            None => false,
        }
    }

    /// Process a continue request.
    ///
    /// A no-op (returning `None`) when the gate is closed or the wizard is
    /// already complete; callers gate the control, not the call. From the
    /// last active step this transitions to the terminal state.
    pub fn advance(&mut self, can_continue: bool) -> Option<WizardEvent> {
        if !can_continue {
            return None;
        }
        let from = self.current.clone()?;
        let pos = self.position()?;

        match self.sequence.get(pos + 1) {
            Some(next) => {
                let to = next.clone();
                self.current = Some(to.clone());
                Some(WizardEvent::Advanced { from, to })
            }
            None => {
                self.current = None;
                Some(WizardEvent::Completed { from })
            }
        }
    }

    /// Process a back request.
    ///
    /// A no-op when the gate is closed, the wizard is complete, or the
    /// current step is the first active step.
    pub fn back(&mut self, can_back: bool) -> Option<WizardEvent> {
        if !can_back {
            return None;
        }
        let from = self.current.clone()?;
        let pos = self.position()?;
        if pos == 0 {
            return None;
        }

        let to = self.sequence[pos - 1].clone();
        self.current = Some(to.clone());
        Some(WizardEvent::Rewound { from, to })
    }

    /// Apply a replacement step list (an enablement change).
    ///
    /// Validation happens before any state is touched, so a configuration
    /// fault leaves the machine exactly as it was. If the current step is
    /// still enabled only the sequence changes. If it was disabled, the
    /// machine moves forward to the nearest active step at or after the
    /// former step's position, or completes when none remains.
    pub fn replace_steps(&mut self, steps: Vec<StepDef>) -> Result<Option<WizardEvent>, FlowError> {
        let sequence = active_sequence(&steps)?;

        let Some(from) = self.current.clone() else {
            // Terminal state is terminal; just adopt the new configuration.
            self.steps = steps;
            self.sequence = sequence;
            return Ok(None);
        };

        if sequence.iter().any(|id| *id == from) {
            self.steps = steps;
            self.sequence = sequence;
            return Ok(None);
        }

        // Anchor on the former step's position in the new list, falling back
        // to its old index when the step was dropped entirely.
        let anchor = steps
            .iter()
            .position(|s| s.id == from)
            .or_else(|| self.steps.iter().position(|s| s.id == from))
            .unwrap_or(0);
        let next = steps
            .iter()
            .skip(anchor)
            .find(|s| s.enabled)
            .map(|s| s.id.clone());

        self.steps = steps;
        self.sequence = sequence;
        match next {
            Some(to) => {
                self.current = Some(to.clone());
                Ok(Some(WizardEvent::Skipped { from, to }))
            }
            None => {
                self.current = None;
                Ok(Some(WizardEvent::Completed { from }))
            }
        }
    }
}
