/// Groups the integer digits of `digits` in threes with commas.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders an amount in UK style with a pound prefix and exactly two
/// decimals, e.g. `1234567.891` -> `£1,234,567.89`.
///
/// Non-finite values render as `£NaN` / `£∞` so a degenerate calculation
/// stays visible instead of looking like a real figure.
pub fn format_gbp(amount: f64) -> String {
    if amount.is_nan() {
        return "£NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("£{sign}∞");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.004 rounds to 0.00 and should not keep its sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("£{sign}{}.{cents}", group_thousands(whole))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_gbp_small_values_have_no_separator() {
        assert_eq!(format_gbp(0.0), "£0.00");
        assert_eq!(format_gbp(7.5), "£7.50");
        assert_eq!(format_gbp(999.999), "£1,000.00");
    }

    #[test]
    fn format_gbp_groups_thousands() {
        assert_eq!(format_gbp(1169.180083), "£1,169.18");
        assert_eq!(format_gbp(350754.0249), "£350,754.02");
        assert_eq!(format_gbp(1_234_567.891), "£1,234,567.89");
        assert_eq!(format_gbp(100_000.0), "£100,000.00");
    }

    #[test]
    fn format_gbp_rounds_only_for_display() {
        assert_eq!(format_gbp(833.333_333), "£833.33");
        assert_eq!(format_gbp(450_000.000_000_1), "£450,000.00");
    }

    #[test]
    fn format_gbp_keeps_sign_of_negative_amounts() {
        assert_eq!(format_gbp(-1234.5), "£-1,234.50");
        assert_eq!(format_gbp(-0.001), "£0.00");
    }

    #[test]
    fn format_gbp_renders_non_finite_values() {
        assert_eq!(format_gbp(f64::NAN), "£NaN");
        assert_eq!(format_gbp(f64::INFINITY), "£∞");
        assert_eq!(format_gbp(f64::NEG_INFINITY), "£-∞");
    }

    #[test]
    fn group_thousands_handles_exact_multiples() {
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
