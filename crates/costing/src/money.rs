//! The one money format the app displays: `Rp 1,234.5`.
//!
//! Up to three fraction digits, trailing zeros dropped, `,` between thousands.

const FRACTION_SCALE: f64 = 1000.0;

/// Format a plain amount, e.g. `5400` -> `5,400` and `-0.125` -> `-0.125`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return if amount.is_nan() {
            "NaN".to_string()
        } else if amount > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let scaled = (amount.abs() * FRACTION_SCALE).round() as u128;
    let whole = scaled / FRACTION_SCALE as u128;
    let fraction = scaled % FRACTION_SCALE as u128;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let fraction = format!("{fraction:03}");
        grouped.push('.');
        grouped.push_str(fraction.trim_end_matches('0'));
    }

    if amount < 0.0 && scaled > 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an amount with the currency prefix.
pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(900.0), "900");
        assert_eq!(format_amount(5400.0), "5,400");
        assert_eq!(format_amount(100000.0), "100,000");
        assert_eq!(format_amount(1234567.0), "1,234,567");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(1234.125), "1,234.125");
        assert_eq!(format_amount(2.0004), "2");
        assert_eq!(format_amount(2.0006), "2.001");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-16550.0), "-16,550");
        assert_eq!(format_amount(-0.0001), "0");
    }

    #[test]
    fn rupiah_prefix() {
        assert_eq!(format_rupiah(8450.0), "Rp 8,450");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp ∞");
    }
}
