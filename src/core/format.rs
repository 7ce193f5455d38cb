//! Formatting helpers shared by the projections and the terminal renderer.

use chrono::NaiveDate;

/// Currency value, two decimal places with a dollar sign.
pub fn price(value: f64) -> String {
    format!("${value:.2}")
}

/// Calendar date, e.g. "Mar 23, 2020".
pub fn date(value: NaiveDate) -> String {
    value.format("%b %d, %Y").to_string()
}

/// Integer count with thousands separators.
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed day offset for the nearby-event list, e.g. "+3 days" / "-13 days".
pub fn signed_days(days: i64) -> String {
    if days > 0 {
        format!("+{days} days")
    } else {
        format!("{days} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rounds_to_two_decimals() {
        assert_eq!(price(54.321), "$54.32");
        assert_eq!(price(9.1), "$9.10");
        assert_eq!(price(0.0), "$0.00");
    }

    #[test]
    fn test_date_renders_calendar_format() {
        let d = NaiveDate::from_ymd_opt(2020, 3, 23).unwrap();
        assert_eq!(date(d), "Mar 23, 2020");
    }

    #[test]
    fn test_count_inserts_thousands_separators() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(9011), "9,011");
        assert_eq!(count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_signed_days_prefixes_positive_offsets() {
        assert_eq!(signed_days(3), "+3 days");
        assert_eq!(signed_days(-13), "-13 days");
        assert_eq!(signed_days(0), "0 days");
    }
}
