fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Formats an amount with two decimals and a currency prefix, e.g. `$1,234.50`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = if amount.is_finite() {
        (amount * 100.0).round() as i64
    } else {
        0
    };
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}
