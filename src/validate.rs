//! Presence checks and text-to-number parsing for the form.
//!
//! Both passes collect every problem instead of stopping at the first one,
//! so the view can annotate all offending fields at once.

use std::collections::BTreeMap;

use crate::error::FieldError;
use crate::model::{Field, FormInput, ParsedInput};

/// Per-field errors from one submit attempt. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Flags every required field that is blank.
pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in [Field::Amount, Field::Term, Field::Rate] {
        if input.text(field).map_or(true, is_blank) {
            errors.insert(field, FieldError::Required);
        }
    }
    if input.mode.is_none() {
        errors.insert(Field::Mode, FieldError::Required);
    }

    errors
}

/// Reads a decimal the way a user would type it: surrounding whitespace is
/// ignored, and anything that does not yield a finite number is rejected.
pub fn parse_number(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NotANumber),
    }
}

/// Converts a form into numbers, reporting each field that fails.
pub fn parse(input: &FormInput) -> Result<ParsedInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let mut number = |field: Field, text: &str| match parse_number(text) {
        Ok(value) => value,
        Err(error) => {
            errors.insert(field, error);
            f64::NAN
        }
    };
    let principal = number(Field::Amount, &input.amount);
    let term_years = number(Field::Term, &input.term_years);
    let annual_rate_percent = number(Field::Rate, &input.annual_rate_percent);

    let Some(mode) = input.mode else {
        errors.insert(Field::Mode, FieldError::Required);
        return Err(errors);
    };

    if errors.is_empty() {
        Ok(ParsedInput {
            principal,
            term_years,
            annual_rate_percent,
            mode,
        })
    } else {
        Err(errors)
    }
}
