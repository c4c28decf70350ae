//! Closed-form repayment figures for a fixed-rate mortgage.
//!
//! Results keep full `f64` precision; rounding belongs to the display layer
//! (see [`crate::format`]).

use crate::model::{CalculationResult, Mode, ParsedInput};

/// Annual percentage rate as a monthly fraction, e.g. `5.0` -> `0.004166...`.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of monthly installments over the term. Fractional years are kept.
pub fn number_of_payments(term_years: f64) -> f64 {
    term_years * 12.0
}

/// Computes the monthly payment and the total repaid over the term.
///
/// Inputs are not range-checked. In repayment mode a zero rate divides by
/// `(1 + 0)^n - 1 == 0`, so both figures come back as NaN.
pub fn calculate(
    principal: f64,
    term_years: f64,
    annual_rate_percent: f64,
    mode: Mode,
) -> CalculationResult {
    let rate = monthly_rate(annual_rate_percent);
    let payments = number_of_payments(term_years);

    match mode {
        Mode::Repayment => {
            let growth = (1.0 + rate).powf(payments);
            let monthly_payment = principal * rate * growth / (growth - 1.0);
            CalculationResult {
                monthly_payment,
                total_repayment: monthly_payment * payments,
            }
        }
        Mode::InterestOnly => {
            let monthly_payment = principal * rate;
            CalculationResult {
                monthly_payment,
                total_repayment: principal + monthly_payment * payments,
            }
        }
    }
}

pub fn calculate_parsed(input: &ParsedInput) -> CalculationResult {
    calculate(
        input.principal,
        input.term_years,
        input.annual_rate_percent,
        input.mode,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    /// Annuity payment built up by summing discount factors instead of the
    /// closed form, so it checks `calculate` without sharing its formula.
    fn annuity_by_discounting(principal: f64, monthly: f64, months: u32) -> f64 {
        let mut factor = 1.0;
        let mut sum = 0.0;
        for _ in 0..months {
            factor /= 1.0 + monthly;
            sum += factor;
        }
        principal / sum
    }

    #[test]
    fn monthly_rate_converts_annual_percentage() {
        assert_close(monthly_rate(5.0), 0.05 / 12.0);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn number_of_payments_keeps_fractional_years() {
        assert_eq!(number_of_payments(25.0), 300.0);
        assert_eq!(number_of_payments(2.5), 30.0);
    }

    #[test]
    fn repayment_matches_independent_annuity() {
        let result = calculate(200_000.0, 25.0, 5.0, Mode::Repayment);
        let expected = annuity_by_discounting(200_000.0, 0.05 / 12.0, 300);

        assert_close(result.monthly_payment, expected);
        assert_close(result.total_repayment, expected * 300.0);
        assert!((result.monthly_payment - 1169.18).abs() < 0.01);
        assert!((result.total_repayment - 350_754.02).abs() < 0.01);
    }

    #[test]
    fn repayment_total_is_monthly_times_payments() {
        let cases = [(150_000.0, 30.0, 3.75), (80_000.0, 10.5, 6.1), (1.0, 1.0, 0.5)];
        for (principal, years, rate) in cases {
            let result = calculate(principal, years, rate, Mode::Repayment);

            assert_close(
                result.total_repayment,
                result.monthly_payment * years * 12.0,
            );
        }
    }

    #[test]
    fn interest_only_pays_interest_then_principal() {
        let result = calculate(200_000.0, 25.0, 5.0, Mode::InterestOnly);

        assert_close(result.monthly_payment, 200_000.0 * 0.05 / 12.0);
        assert_close(result.total_repayment, 450_000.0);
        assert!((result.monthly_payment - 833.33).abs() < 0.01);
    }

    #[test]
    fn interest_only_total_adds_principal() {
        let result = calculate(95_000.0, 15.0, 4.2, Mode::InterestOnly);

        assert_close(
            result.total_repayment,
            95_000.0 + result.monthly_payment * 180.0,
        );
    }

    #[test]
    fn calculate_is_deterministic() {
        let first = calculate(312_500.0, 22.0, 4.89, Mode::Repayment);
        let second = calculate(312_500.0, 22.0, 4.89, Mode::Repayment);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_rate_repayment_is_not_a_number() {
        let result = calculate(200_000.0, 25.0, 0.0, Mode::Repayment);

        assert!(result.monthly_payment.is_nan());
        assert!(result.total_repayment.is_nan());
        assert!(!result.is_finite());
    }

    #[test]
    fn zero_rate_interest_only_is_just_the_principal() {
        let result = calculate(200_000.0, 25.0, 0.0, Mode::InterestOnly);

        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_repayment, 200_000.0);
    }

    #[test]
    fn calculate_parsed_forwards_fields() {
        let parsed = ParsedInput {
            principal: 100_000.0,
            term_years: 20.0,
            annual_rate_percent: 3.0,
            mode: Mode::InterestOnly,
        };

        assert_eq!(
            calculate_parsed(&parsed),
            calculate(100_000.0, 20.0, 3.0, Mode::InterestOnly)
        );
    }
}
