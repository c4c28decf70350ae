//! One-shot calculation from command-line flags.

use anyhow::{bail, Result};
use tracing::debug;

use crate::config::CalcArgs;
use crate::format::format_gbp;
use crate::model::Field;
use crate::state::{reduce, Action, FormState};

fn actions(args: &CalcArgs) -> Vec<Action> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        Action::EditField(Field::Amount, text(&args.amount)),
        Action::EditField(Field::Term, text(&args.term)),
        Action::EditField(Field::Rate, text(&args.rate)),
        Action::SelectMode(args.mode),
        Action::Submit,
    ]
}

/// Runs the form once and renders the outcome for stdout.
///
/// Field errors become an `Err` listing each one as `field: message`.
pub fn run_calc(args: &CalcArgs) -> Result<String> {
    let state = actions(args)
        .into_iter()
        .fold(FormState::new(), |state, action| reduce(&state, action));

    if !state.errors.is_empty() {
        let lines: Vec<String> = state
            .errors
            .iter()
            .map(|(field, error)| format!("  {field}: {error}"))
            .collect();
        bail!("invalid input:\n{}", lines.join("\n"));
    }
    let Some(result) = state.result else {
        bail!("no result was produced");
    };
    debug!(json = args.json, "rendering result");

    if args.json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(format!(
            "Mortgage type: {}\nYour monthly repayments: {}\nTotal you'll repay over the term: {}",
            args.mode,
            format_gbp(result.monthly_payment),
            format_gbp(result.total_repayment),
        ))
    }
}
