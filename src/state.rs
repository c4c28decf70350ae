//! Form state and the reducer that drives it.
//!
//! The state is never mutated in place: every user interaction becomes an
//! [`Action`] and [`reduce`] returns the next state. The TUI and the
//! headless `calc` command share this path.

use tracing::{debug, info, warn};

use crate::calc;
use crate::model::{CalculationResult, Field, FormInput, Mode};
use crate::validate::{self, ValidationErrors};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the text of a free-text field.
    EditField(Field, String),
    SelectMode(Mode),
    Submit,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Result,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub input: FormInput,
    pub errors: ValidationErrors,
    pub result: Option<CalculationResult>,
    pub phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Result` right after a successful submit; any edit or rejected
    /// submit moves back to `Editing` while the last figures stay visible.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

pub fn reduce(state: &FormState, action: Action) -> FormState {
    match action {
        Action::EditField(field, text) => {
            let mut next = state.clone();
            match next.input.text_mut(field) {
                Some(slot) => *slot = text,
                None => debug!(%field, "ignoring text edit on non-text field"),
            }
            next.phase = Phase::Editing;
            next
        }
        Action::SelectMode(mode) => {
            let mut next = state.clone();
            next.input.mode = Some(mode);
            next.phase = Phase::Editing;
            next
        }
        Action::Submit => submit(state),
        Action::Clear => {
            debug!("clearing form");
            FormState::new()
        }
    }
}

fn submit(state: &FormState) -> FormState {
    let mut next = state.clone();
    next.phase = Phase::Editing;

    let missing = validate::validate(&state.input);
    if !missing.is_empty() {
        debug!(count = missing.len(), "submit rejected: required fields missing");
        next.errors = missing;
        return next;
    }

    let parsed = match validate::parse(&state.input) {
        Ok(parsed) => parsed,
        Err(invalid) => {
            debug!(count = invalid.len(), "submit rejected: unparseable fields");
            next.errors = invalid;
            return next;
        }
    };

    let result = calc::calculate_parsed(&parsed);
    if result.is_finite() {
        info!(
            mode = %parsed.mode,
            monthly = result.monthly_payment,
            total = result.total_repayment,
            "calculated repayments"
        );
    } else {
        warn!(
            mode = %parsed.mode,
            rate = parsed.annual_rate_percent,
            term = parsed.term_years,
            "calculation produced a non-finite result"
        );
    }

    next.errors = ValidationErrors::new();
    next.result = Some(result);
    next.phase = Phase::Result;
    next
}
