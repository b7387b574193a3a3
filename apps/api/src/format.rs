//! Number rendering for prompts and templated advice.

/// Renders a number the way en-US locale formatting does: thousands separators,
/// at most three fractional digits, trailing zeros dropped.
///
/// `1234567.891` → `"1,234,567.891"`, `4200.0` → `"4,200"`, `0.5` → `"0.5"`.
pub fn grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let negative = value < 0.0;
    let scaled = (value.abs() * 1000.0).round() as u128;
    let int_part = scaled / 1000;
    let frac_part = scaled % 1000;

    let mut out = String::new();
    if negative && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if frac_part > 0 {
        let frac = format!("{frac_part:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Rounds to the nearest whole number, then groups.
pub fn grouped_round(value: f64) -> String {
    grouped(value.round())
}

fn group_digits(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
