use chiatien_domain::Money;
use chiatien_i18n as i18n;

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const FRACTION_DIGITS: u32 = 2;

/// Formats an amount the Vietnamese way: `1.234.567,5 VND`.
pub fn format_money(amount: Money) -> String {
    format!("{} {}", format_amount(amount), i18n::CURRENCY_SUFFIX)
}

/// Like [`format_money`] but always carries a sign, for balances.
pub fn format_signed_money(amount: Money) -> String {
    let rounded = amount.round_dp(FRACTION_DIGITS);
    let sign = if rounded.is_negative() { "" } else { "+" };
    format!("{sign}{}", format_money(rounded))
}

fn format_amount(amount: Money) -> String {
    let rounded = amount.round_dp(FRACTION_DIGITS);
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_negative() {
        out.push('-');
    }
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(Money::ZERO, "0")]
    #[case::below_thousand(Money::from_i64(999), "999")]
    #[case::thousand(Money::from_i64(1000), "1.000")]
    #[case::millions(Money::from_i64(1_234_567), "1.234.567")]
    #[case::negative(Money::from_i64(-250_000), "-250.000")]
    #[case::fraction(Money::new(1_234_505, 1), "123.450,5")]
    #[case::rounds_to_cents(Money::new(3_333_333, 4), "333,33")]
    #[case::rounds_half_away(Money::new(-1_005, 3), "-1,01")]
    fn test_format_amount(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn format_money_appends_currency() {
        assert_eq!(
            format_money(Money::from_i64(50_000)),
            format!("50.000 {}", i18n::CURRENCY_SUFFIX)
        );
    }

    #[rstest]
    #[case::positive(Money::from_i64(1500), "+1.500")]
    #[case::zero(Money::ZERO, "+0")]
    #[case::negative(Money::from_i64(-1500), "-1.500")]
    fn test_format_signed_money(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(
            format_signed_money(amount),
            format!("{expected} {}", i18n::CURRENCY_SUFFIX)
        );
    }
}
