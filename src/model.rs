use std::fmt;

use serde::Serialize;

/// How the loan is paid back over the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Amortizing loan: every payment covers interest and some principal.
    #[default]
    Repayment,
    /// Only interest is paid monthly; the principal is due at the end.
    InterestOnly,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Repayment => "Repayment",
            Mode::InterestOnly => "Interest Only",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Repayment => Mode::InterestOnly,
            Mode::InterestOnly => Mode::Repayment,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Term,
    Rate,
    Mode,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Amount, Field::Term, Field::Rate, Field::Mode];

    pub fn label(self) -> &'static str {
        match self {
            Field::Amount => "Mortgage Amount",
            Field::Term => "Mortgage Term",
            Field::Rate => "Interest Rate",
            Field::Mode => "Mortgage Type",
        }
    }

    /// Identifier used when errors are reported outside the TUI.
    pub fn key(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Term => "term",
            Field::Rate => "rate",
            Field::Mode => "mode",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Amount => Field::Term,
            Field::Term => Field::Rate,
            Field::Rate => Field::Mode,
            Field::Mode => Field::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Amount => Field::Mode,
            Field::Term => Field::Amount,
            Field::Rate => Field::Term,
            Field::Mode => Field::Rate,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw form contents exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub amount: String,
    pub term_years: String,
    pub annual_rate_percent: String,
    pub mode: Option<Mode>,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            amount: String::new(),
            term_years: String::new(),
            annual_rate_percent: String::new(),
            mode: Some(Mode::Repayment),
        }
    }
}

impl FormInput {
    /// Text of a free-text field. `Field::Mode` has no text and yields `None`.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Amount => Some(&self.amount),
            Field::Term => Some(&self.term_years),
            Field::Rate => Some(&self.annual_rate_percent),
            Field::Mode => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Amount => Some(&mut self.amount),
            Field::Term => Some(&mut self.term_years),
            Field::Rate => Some(&mut self.annual_rate_percent),
            Field::Mode => None,
        }
    }
}

/// Numbers extracted from a validated form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInput {
    pub principal: f64,
    pub term_years: f64,
    pub annual_rate_percent: f64,
    pub mode: Mode,
}

/// Aggregate figures produced by a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub monthly_payment: f64,
    pub total_repayment: f64,
}

impl CalculationResult {
    pub fn is_finite(&self) -> bool {
        self.monthly_payment.is_finite() && self.total_repayment.is_finite()
    }
}
